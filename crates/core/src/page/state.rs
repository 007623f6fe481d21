use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::storage::PageError;

/// State remembered between runs, stored as TOML next to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Custom page chosen with `--output` on an earlier run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<String>,
}

impl PageState {
    /// Load state from `path`. A missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path).map_err(|e| PageError::io(path, e))?;
        toml::from_str(&s).map_err(|e| PageError::StateParse(path.to_path_buf(), e))
    }

    pub fn save(&self, path: &Path) -> Result<(), PageError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| PageError::io(parent, e))?;
        }
        let s = toml::to_string(self)?;
        debug!(state = %path.display(), "saving page state");
        fs::write(path, s).map_err(|e| PageError::io(path, e))
    }

    /// The stored custom page, trimmed; blank counts as unset.
    pub fn custom_path(&self) -> Option<&str> {
        self.custom_path.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}
