//! Directory-level driver: loader, writer and the run that ties them to a
//! pipeline.

pub mod driver;
pub mod loader;
pub mod writer;

pub use driver::{CorpusRunner, DocumentFailure, RunReport};
pub use loader::CorpusLoader;
pub use writer::CorpusWriter;
