use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::BUILTIN_TEMPLATE;
use super::state::PageState;
use super::storage::{PageError, check_extension};
use crate::config::types::ResolvedConfig;

/// Why a particular page was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// The configured default page.
    Default,
    /// The custom page remembered from an earlier `--output`.
    Stored,
    /// The page given with `--output` on this run.
    Override {
        /// The override differs from what was stored and has been remembered.
        remembered: bool,
        /// The page did not exist and was created from the template.
        seeded: bool,
    },
}

/// The page a command reads from and writes back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub read_path: PathBuf,
    pub write_path: PathBuf,
    pub source: PageSource,
}

impl ResolvedPage {
    fn same(path: PathBuf, source: PageSource) -> Self {
        Self { read_path: path.clone(), write_path: path, source }
    }
}

/// Decides which page to edit from the config, the stored state and `--output`.
pub struct PageLocator<'a> {
    cfg: &'a ResolvedConfig,
}

impl<'a> PageLocator<'a> {
    pub fn new(cfg: &'a ResolvedConfig) -> Self {
        Self { cfg }
    }

    pub fn state(&self) -> Result<PageState, PageError> {
        PageState::load(&self.cfg.state_file)
    }

    /// Resolve the page to edit, remembering a new `--output` and seeding it
    /// from the template when it does not exist yet.
    ///
    /// | `--output`        | stored custom page | page used                            |
    /// |-------------------|--------------------|--------------------------------------|
    /// | none              | none               | default page                         |
    /// | none              | set                | stored page                          |
    /// | given             | none               | given (remembered, seeded if absent) |
    /// | equal to stored   | set                | stored page                          |
    /// | differs           | set                | given (remembered, seeded if absent) |
    pub fn resolve(&self, output: Option<&str>) -> Result<ResolvedPage, PageError> {
        let mut state = self.state()?;

        let Some(requested) = output.map(str::trim).filter(|o| !o.is_empty()) else {
            return Ok(self.current_from(&state));
        };

        let requested = absolute(requested)?;
        check_extension(&requested)?;
        let requested_str = requested.to_string_lossy().into_owned();

        if state.custom_path() == Some(requested_str.as_str()) {
            return Ok(ResolvedPage::same(requested, PageSource::Stored));
        }

        state.custom_path = Some(requested_str);
        state.save(&self.cfg.state_file)?;
        info!(page = %requested.display(), "remembering custom page");

        let seeded = self.seed(&requested)?;
        Ok(ResolvedPage::same(requested, PageSource::Override { remembered: true, seeded }))
    }

    /// Resolve the page without touching the stored state or the file system.
    /// An `--output` is used as given.
    pub fn peek(&self, output: Option<&str>) -> Result<ResolvedPage, PageError> {
        if let Some(requested) = output.map(str::trim).filter(|o| !o.is_empty()) {
            return Ok(ResolvedPage::same(
                absolute(requested)?,
                PageSource::Override { remembered: false, seeded: false },
            ));
        }
        Ok(self.current_from(&self.state()?))
    }

    fn current_from(&self, state: &PageState) -> ResolvedPage {
        match state.custom_path() {
            Some(custom) => ResolvedPage::same(PathBuf::from(custom), PageSource::Stored),
            None => ResolvedPage::same(self.cfg.default_page.clone(), PageSource::Default),
        }
    }

    /// Create `target` from the template unless it already exists.
    /// Falls back to the built-in template when the configured one is missing.
    fn seed(&self, target: &Path) -> Result<bool, PageError> {
        if target.exists() {
            debug!(page = %target.display(), "page exists, not seeding");
            return Ok(false);
        }

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| PageError::io(parent, e))?;
        }

        if self.cfg.template.is_file() {
            fs::copy(&self.cfg.template, target).map_err(|e| PageError::io(target, e))?;
        } else {
            debug!(template = %self.cfg.template.display(), "template missing, using built-in");
            fs::write(target, BUILTIN_TEMPLATE).map_err(|e| PageError::io(target, e))?;
        }

        info!(page = %target.display(), "created page from template");
        Ok(true)
    }
}

fn absolute(path: &str) -> Result<PathBuf, PageError> {
    std::path::absolute(path).map_err(|e| PageError::io(Path::new(path), e))
}
