//! Favorites page editing: locating and creating groups, inserting links.

pub mod editor;
pub mod page;
pub mod types;

// Re-export primary API
pub use editor::{FavoritesEditor, apply_new_link, list_groups};
pub use page::FavoritesPage;
pub use types::{ApplyOutcome, FavoritesError, Group, Link, PageLayout};
