//! Stable machine-readable codes for spec diagnostics.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The spec version is not supported.
    UnsupportedVersion,
    /// A numeric limit is zero or otherwise out of range.
    LimitExceeded,
    /// Two settings contradict each other.
    InvalidCombo,
    /// A named resource (e.g. a stopword language) does not exist.
    UnknownValue,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::LimitExceeded => "limit_exceeded",
            Self::InvalidCombo => "invalid_combo",
            Self::UnknownValue => "unknown_value",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
