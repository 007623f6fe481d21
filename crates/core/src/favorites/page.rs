use tracing::{debug, info};

use crate::favorites::types::{FavoritesError, Group, Link, PageLayout};
use crate::html_doc::{self, Element, HtmlDocument, NodeId};

/// Where a newly created group goes.
enum Placement {
    After(NodeId),
    Into(NodeId),
}

/// A favorites page parsed into a tree, edited in place.
#[derive(Debug, Clone)]
pub struct FavoritesPage {
    doc: HtmlDocument,
    layout: PageLayout,
}

impl FavoritesPage {
    pub fn parse(input: &str, layout: PageLayout) -> Result<Self, FavoritesError> {
        let doc = html_doc::parse(input)?;
        Ok(Self { doc, layout })
    }

    pub fn document(&self) -> &HtmlDocument {
        &self.doc
    }

    pub fn serialize(&self) -> String {
        html_doc::serialize(&self.doc)
    }

    /// Every element following the group container convention, in document order,
    /// whether or not it carries a heading.
    fn group_containers(&self) -> Vec<NodeId> {
        self.doc.find_elements(self.doc.root(), |el| self.layout.is_group_container(el))
    }

    fn heading_of(&self, container: NodeId) -> Option<NodeId> {
        self.doc
            .element_children(container)
            .find(|c| self.doc.element(*c).is_some_and(|el| self.layout.is_heading(el)))
    }

    /// All groups in document order, duplicates included.
    pub fn groups(&self) -> Vec<Group> {
        self.group_containers()
            .into_iter()
            .filter_map(|container| {
                let heading = self.heading_of(container)?;
                Some(Group { name: self.doc.text_content(heading), container, heading })
            })
            .collect()
    }

    /// Heading text of every group, in document order.
    pub fn list_groups(&self) -> Vec<String> {
        self.groups().into_iter().map(|g| g.name).collect()
    }

    /// First group whose heading text equals `name` exactly (case-sensitive).
    pub fn find_group(&self, name: &str) -> Option<Group> {
        self.groups().into_iter().find(|g| g.name == name)
    }

    /// Return the group named `name`, creating it after the last existing group
    /// (or in the holder when there are none). The flag is `true` when created.
    pub fn ensure_group(&mut self, name: &str) -> Result<(Group, bool), FavoritesError> {
        if let Some(group) = self.find_group(name) {
            return Ok((group, false));
        }

        let placement = match self.group_containers().last() {
            Some(&last) => Placement::After(last),
            None => Placement::Into(self.holder()?),
        };

        let container = self.doc.create_element(self.layout.group_element());
        let heading = self.doc.create_element(Element::new(&self.layout.heading_tag));
        self.doc.push_text(heading, name);
        self.doc.append_child(container, heading);

        match placement {
            Placement::After(last) => self.doc.insert_after(last, container)?,
            Placement::Into(holder) => self.doc.append_child(holder, container),
        }

        info!(group = name, "group did not exist, created it");
        Ok((Group { name: name.to_string(), container, heading }, true))
    }

    /// The container new groups go into when the page has none yet:
    /// the first holder element under `<body>`.
    fn holder(&self) -> Result<NodeId, FavoritesError> {
        let body = self
            .doc
            .find_element(self.doc.root(), |el| el.name == "body")
            .ok_or(FavoritesError::NoBody)?;

        let holder_tag = &self.layout.holder_tag;
        self.doc
            .find_element(body, |el| el.name.eq_ignore_ascii_case(holder_tag))
            .ok_or_else(|| FavoritesError::NoHolder(holder_tag.clone()))
    }

    /// Insert `link` directly after the group's heading, so the newest link comes first.
    pub fn insert_link(&mut self, group: &Group, link: &Link) -> Result<NodeId, FavoritesError> {
        let anchor = self.doc.create_element(link.anchor(&self.layout));
        self.doc.push_text(anchor, &link.display_name);
        self.doc.insert_after(group.heading, anchor)?;

        debug!(group = %group.name, address = %link.address, "inserted link");
        Ok(anchor)
    }

    /// Links of a group in document order.
    pub fn links(&self, group: &Group) -> Vec<Link> {
        self.doc
            .element_children(group.container)
            .filter_map(|id| {
                let el = self.doc.element(id)?;
                (el.name == "a").then(|| {
                    Link::new(el.attr("href").unwrap_or_default(), self.doc.text_content(id))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><body><div>\
        <div class=\"column floatingCol\"><h2>News</h2><a href=\"https://n.test\" target=\"_blank\">N</a></div>\
        <div class=\"column floatingCol\"><h2>Tools</h2></div>\
        </div></body></html>";

    fn page(input: &str) -> FavoritesPage {
        FavoritesPage::parse(input, PageLayout::default()).unwrap()
    }

    #[test]
    fn groups_are_listed_in_document_order() {
        assert_eq!(page(PAGE).list_groups(), ["News", "Tools"]);
    }

    #[test]
    fn find_group_is_exact_and_case_sensitive() {
        let p = page(PAGE);
        assert!(p.find_group("Tools").is_some());
        assert!(p.find_group("tools").is_none());
        assert!(p.find_group(" Tools").is_none());
    }

    #[test]
    fn find_group_prefers_first_duplicate() {
        let input = "<body><div>\
            <div class=\"column floatingCol\"><h2>A</h2><a href=\"1\">one</a></div>\
            <div class=\"column floatingCol\"><h2>A</h2><a href=\"2\">two</a></div>\
            </div></body>";
        let p = page(input);
        let g = p.find_group("A").unwrap();
        assert_eq!(p.links(&g), [Link::new("1", "one")]);
        assert_eq!(p.list_groups(), ["A", "A"]);
    }

    #[test]
    fn ensure_existing_group_has_no_side_effect() {
        let mut p = page(PAGE);
        let before = p.document().clone();
        let (g, created) = p.ensure_group("News").unwrap();
        assert!(!created);
        assert_eq!(g.name, "News");
        assert_eq!(p.document(), &before);
    }

    #[test]
    fn ensure_group_appends_after_last_group() {
        let mut p = page(PAGE);
        let (_, created) = p.ensure_group("Music").unwrap();
        assert!(created);
        assert_eq!(p.list_groups(), ["News", "Tools", "Music"]);
    }

    #[test]
    fn ensure_group_uses_holder_when_no_groups() {
        let mut p = page("<html><body><div id=\"holder\"></div></body></html>");
        let (g, created) = p.ensure_group("Tools").unwrap();
        assert!(created);
        assert_eq!(
            p.serialize(),
            "<html><body><div id=\"holder\"><div class=\"column floatingCol\"><h2>Tools</h2></div></div></body></html>"
        );
        assert!(p.links(&g).is_empty());
    }

    #[test]
    fn ensure_group_without_body_fails() {
        let mut p = page("<div>nothing</div>");
        assert!(matches!(p.ensure_group("X"), Err(FavoritesError::NoBody)));
    }

    #[test]
    fn ensure_group_without_holder_fails() {
        let mut p = page("<html><body><p>hi</p></body></html>");
        assert!(matches!(p.ensure_group("X"), Err(FavoritesError::NoHolder(t)) if t == "div"));
    }

    #[test]
    fn insert_link_goes_right_after_heading() {
        let mut p = page(PAGE);
        let g = p.find_group("News").unwrap();
        p.insert_link(&g, &Link::new("https://m.test", "M")).unwrap();
        assert_eq!(
            p.links(&g),
            [Link::new("https://m.test", "M"), Link::new("https://n.test", "N")]
        );
    }

    #[test]
    fn empty_names_reparse_to_same_tree() {
        let mut p = page("<html><body><div></div></body></html>");
        let (g, _) = p.ensure_group("").unwrap();
        p.insert_link(&g, &Link::new("https://e.test", "")).unwrap();

        let out = p.serialize();
        assert!(out.contains("<h2></h2><a href=\"https://e.test\" target=\"_blank\"></a>"));
        assert_eq!(&html_doc::parse(&out).unwrap(), p.document());
    }

    #[test]
    fn custom_layout_is_honoured() {
        let layout = PageLayout {
            group_tag: "section".into(),
            group_class: String::new(),
            heading_tag: "h3".into(),
            holder_tag: "main".into(),
            link_target: String::new(),
        };
        let mut p =
            FavoritesPage::parse("<body><main></main></body>", layout).unwrap();
        let (g, _) = p.ensure_group("Docs").unwrap();
        p.insert_link(&g, &Link::new("d", "D")).unwrap();
        assert_eq!(
            p.serialize(),
            "<body><main><section><h3>Docs</h3><a href=\"d\">D</a></section></main></body>"
        );
    }
}
