//! Where the favorites page lives: resolving the page to edit, remembering a
//! custom page between runs, seeding new pages from a template, and the
//! checked reads and writes around the editor.

pub mod locator;
pub mod state;
pub mod storage;

pub use locator::{PageLocator, PageSource, ResolvedPage};
pub use state::PageState;
pub use storage::{PageError, check_page, read_page, write_page};

/// Template written when no template file is configured on disk.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../assets/favorites_page_template.html");
