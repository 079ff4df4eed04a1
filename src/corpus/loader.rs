//! Input side of a run: enumerate and decode the corpus directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrepError, Result};
use crate::types::PrepConfig;

/// Lists and reads the documents of one input directory
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    dir: PathBuf,
    extension: Option<String>,
    sort: bool,
}

impl CorpusLoader {
    /// Loader for `*.txt` files in `dir`, in filename order
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: Some("txt".to_string()),
            sort: true,
        }
    }

    pub fn from_config(dir: impl Into<PathBuf>, cfg: &PrepConfig) -> Self {
        Self::new(dir)
            .with_extension(cfg.extension.as_deref())
            .with_sorting(cfg.sort_inputs)
    }

    /// Only list files with this extension; `None` lists every regular file
    pub fn with_extension(mut self, extension: Option<&str>) -> Self {
        self.extension = extension.map(str::to_string);
        self
    }

    pub fn with_sorting(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Regular files of the input directory that pass the extension filter.
    ///
    /// A missing or unreadable directory is an error for the whole run.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| PrepError::io(&self.dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| PrepError::io(&self.dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            let keep = match &self.extension {
                Some(ext) => path.extension().is_some_and(|e| e == ext.as_str()),
                None => true,
            };
            if keep {
                files.push(path);
            }
        }

        if self.sort {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        tracing::debug!(dir = %self.dir.display(), files = files.len(), "listed input directory");
        Ok(files)
    }

    /// Read one document as UTF-8 and lowercase it
    pub fn load(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| PrepError::io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| PrepError::Encoding {
            path: path.to_path_buf(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        Ok(text.to_lowercase())
    }
}
