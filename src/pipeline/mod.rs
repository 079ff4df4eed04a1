//! Document pipeline: stage traits, composition, observation and the
//! JSON spec that configures it.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
