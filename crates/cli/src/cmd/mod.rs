pub mod add;
pub mod doctor;
pub mod groups;

use std::fmt::Display;
use std::path::Path;

use favlink_core::config::{ConfigLoader, ResolvedConfig, default_config_path};

/// Load config and start logging, or report the failure and exit.
pub fn load_config(config: Option<&Path>, command: &str) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            if let Err(e) = crate::logging::init(&rc) {
                let file = rc.logging.file.as_deref().unwrap_or(Path::new(""));
                fail(command, format!("failed to open log file {}: {e}", file.display()));
            }
            rc
        }
        Err(e) => {
            eprintln!("FAIL favlink {command}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn fail(command: &str, err: impl Display) -> ! {
    tracing::debug!("{command} failed: {err}");
    crate::logging::shutdown();
    eprintln!("FAIL favlink {command}");
    eprintln!("{err}");
    std::process::exit(1);
}
