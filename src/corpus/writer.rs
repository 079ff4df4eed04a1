//! Output side of a run.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrepError, Result};

/// Writes one output file per document into a single directory
#[derive(Debug, Clone)]
pub struct CorpusWriter {
    dir: PathBuf,
}

impl CorpusWriter {
    /// Create the output directory (and parents) if needed.
    ///
    /// Failure here is an error for the whole run.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| PrepError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `text` under `file_name`, replacing any previous content
    pub fn write(&self, file_name: &OsStr, text: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, text).map_err(|e| PrepError::io(&path, e))?;
        Ok(path)
    }
}
