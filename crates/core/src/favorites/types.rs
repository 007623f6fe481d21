use serde::Deserialize;
use thiserror::Error;

use crate::html_doc::{Element, HtmlError, NodeId};

/// The hand-authored layout convention of a favorites page.
///
/// ```html
/// <body>
///   <div>                                   <!-- holder -->
///     <div class="column floatingCol">      <!-- group -->
///       <h2>Tools</h2>
///       <a href="https://example.com" target="_blank">Example</a>
///     </div>
///   </div>
/// </body>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Tag of a group container.
    pub group_tag: String,
    /// Classes a group container carries (whitespace-separated, all required).
    pub group_class: String,
    /// Tag of the heading holding the group name.
    pub heading_tag: String,
    /// Tag of the holder under `<body>` that new groups go into when none exist.
    pub holder_tag: String,
    /// `target` attribute written on new links. Empty writes none.
    pub link_target: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            group_tag: "div".into(),
            group_class: "column floatingCol".into(),
            heading_tag: "h2".into(),
            holder_tag: "div".into(),
            link_target: "_blank".into(),
        }
    }
}

impl PageLayout {
    pub fn is_group_container(&self, el: &Element) -> bool {
        el.name.eq_ignore_ascii_case(&self.group_tag)
            && self.group_class.split_ascii_whitespace().all(|c| el.has_class(c))
    }

    pub fn is_heading(&self, el: &Element) -> bool {
        el.name.eq_ignore_ascii_case(&self.heading_tag)
    }

    /// A fresh, empty group container element.
    pub fn group_element(&self) -> Element {
        let el = Element::new(&self.group_tag);
        if self.group_class.trim().is_empty() {
            el
        } else {
            el.with_attr("class", self.group_class.trim())
        }
    }
}

/// A named group section located in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Heading text, exactly as it appears in the page.
    pub name: String,
    pub container: NodeId,
    pub heading: NodeId,
}

/// A link entry: target address and display name. Any string is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub address: String,
    pub display_name: String,
}

impl Link {
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { address: address.into(), display_name: display_name.into() }
    }

    /// The anchor element for this link, without its text child.
    pub fn anchor(&self, layout: &PageLayout) -> Element {
        let el = Element::new("a").with_attr("href", &self.address);
        if layout.link_target.is_empty() {
            el
        } else {
            el.with_attr("target", &layout.link_target)
        }
    }
}

/// Result of [`FavoritesEditor::apply_new_link`](super::FavoritesEditor::apply_new_link).
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    /// The serialized, modified page.
    pub content: String,
    /// Name of the group the link went into.
    pub group: String,
    /// Whether the group had to be created.
    pub group_created: bool,
}

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("failed to parse page: {0}")]
    Format(#[from] HtmlError),

    #[error("page has no <body> element to hold groups")]
    NoBody,

    #[error("page has no <{0}> holder under <body> to hold groups")]
    NoHolder(String),
}
