use std::path::PathBuf;

use serde::Deserialize;

use crate::favorites::PageLayout;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageConfig {
    /// Page edited when no custom page has been chosen with `--output`.
    pub default_path: Option<String>,
    /// Template copied to seed a new custom page.
    /// Defaults to `{{config_dir}}/favorites_page_template.html`.
    pub template: Option<String>,
    /// Where the chosen custom page is remembered between runs.
    /// Defaults to `{{config_dir}}/state.toml`.
    pub state_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The config file this was loaded from.
    pub config_path: PathBuf,
    pub default_page: PathBuf,
    pub template: PathBuf,
    pub state_file: PathBuf,
    pub layout: PageLayout,
    pub logging: LoggingConfig,
}
