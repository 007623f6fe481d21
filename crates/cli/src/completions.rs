//! Shell completion support with dynamic value completers.
//!
//! Group names are read from the page the user currently edits.

use clap_complete::engine::CompletionCandidate;
use favlink_core::config::ConfigLoader;
use favlink_core::favorites::FavoritesEditor;
use favlink_core::page::{PageLocator, read_page};
use std::collections::HashSet;
use std::ffi::OsStr;

/// Group names currently in the page, or nothing if config or page cannot be read.
fn current_groups() -> Option<Vec<String>> {
    let cfg = ConfigLoader::load(None).ok()?;
    let page = PageLocator::new(&cfg).peek(None).ok()?;
    let input = read_page(&page.read_path).ok()?;
    FavoritesEditor::new(cfg.layout).list_groups(&input).ok()
}

/// Complete group names from the current page.
pub fn complete_groups(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");

    matching_groups(current_groups().unwrap_or_default(), current_str)
        .into_iter()
        .map(CompletionCandidate::new)
        .collect()
}

/// Groups starting with `prefix`, each name once, in page order.
fn matching_groups(groups: Vec<String>, prefix: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|g| g.starts_with(prefix) && seen.insert(g.clone()))
        .collect()
}
