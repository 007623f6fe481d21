use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

pub const TEMPLATE_FILE_NAME: &str = "favorites_page_template.html";
pub const STATE_FILE_NAME: &str = "state.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("[page] default_path is not set in {0}")]
    MissingDefaultPath(String),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let resolved = Self::resolve(&path, cf)?;
        debug!(config = %path.display(), page = %resolved.default_page.display(), "loaded config");
        Ok(resolved)
    }

    fn resolve(path: &Path, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let config_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let sub = |s: &str| s.replace("{{config_dir}}", &config_dir.to_string_lossy());

        let default_page = cf
            .page
            .default_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ConfigError::MissingDefaultPath(path.display().to_string()))?;
        let default_page = expand_path(&sub(default_page))?;

        let template = match &cf.page.template {
            Some(t) => expand_path(&sub(t.trim()))?,
            None => config_dir.join(TEMPLATE_FILE_NAME),
        };
        let state_file = match &cf.page.state_file {
            Some(s) => expand_path(&sub(s.trim()))?,
            None => config_dir.join(STATE_FILE_NAME),
        };

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            config_path: path.to_path_buf(),
            default_page,
            template,
            state_file,
            layout: cf.layout,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("favlink").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("favlink").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
