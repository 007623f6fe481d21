use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found / not a file: {0}")]
    NotFound(PathBuf),

    #[error("page {0} does not have the expected '.html' extension")]
    WrongExtension(PathBuf),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file {0}: {1}")]
    StateParse(PathBuf, #[source] toml::de::Error),

    #[error("failed to serialize state: {0}")]
    StateSerialize(#[from] toml::ser::Error),
}

impl PageError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

/// A page must be an existing file ending in `.html`.
pub fn check_page(path: &Path) -> Result<(), PageError> {
    if !path.is_file() {
        return Err(PageError::NotFound(path.to_path_buf()));
    }
    check_extension(path)
}

pub(crate) fn check_extension(path: &Path) -> Result<(), PageError> {
    if path.extension().and_then(|e| e.to_str()) != Some("html") {
        return Err(PageError::WrongExtension(path.to_path_buf()));
    }
    Ok(())
}

pub fn read_page(path: &Path) -> Result<String, PageError> {
    check_page(path)?;
    debug!(page = %path.display(), "reading page");
    fs::read_to_string(path).map_err(|e| PageError::io(path, e))
}

pub fn write_page(path: &Path, content: &str) -> Result<(), PageError> {
    check_page(path)?;
    debug!(page = %path.display(), bytes = content.len(), "writing page");
    fs::write(path, content).map_err(|e| PageError::io(path, e))
}
