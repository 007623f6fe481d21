#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod favorites;
pub mod html_doc;
pub mod page;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
