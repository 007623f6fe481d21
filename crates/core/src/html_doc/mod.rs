//! Lenient HTML parsing into an arena tree, and serialization back to text.
//!
//! This module provides functionality to:
//! - Parse hand-authored HTML pages without aborting on malformed markup
//! - Navigate and mutate the resulting tree through stable [`NodeId`]s
//! - Serialize the tree so that re-parsing yields an equivalent tree

pub mod parser;
pub mod serializer;
pub mod tree;
pub mod types;

pub use parser::parse;
pub use serializer::{serialize, serialize_node};
pub use tree::{Descendants, HtmlDocument};
pub use types::{Attribute, Element, HtmlError, NodeId, NodeKind};
