//! Arena-backed document tree.

use super::types::{Element, HtmlError, NodeId, NodeKind};

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed HTML document.
///
/// All nodes live in one arena owned by the document and are addressed by
/// [`NodeId`]. Nodes created with [`create_element`](Self::create_element) or
/// [`create_text`](Self::create_text) start detached and only become part of
/// the tree once appended or inserted.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    nodes: Vec<NodeData>,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlDocument {
    /// An empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData { kind: NodeKind::Document, parent: None, children: Vec::new() }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Children of `id` that are elements, in order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|c| self.element(*c).is_some())
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants { doc: self, stack: vec![id] }
    }

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        for node in self.descendants(id) {
            if let NodeKind::Text(t) = self.kind(node) {
                text.push_str(t);
            }
        }
        text
    }

    /// First element under `from` (excluding `from` itself) matching `pred`, in document order.
    pub fn find_element<F>(&self, from: NodeId, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&Element) -> bool,
    {
        self.descendants(from)
            .skip(1)
            .find(|id| self.element(*id).is_some_and(&mut pred))
    }

    /// Every element under `from` (excluding `from` itself) matching `pred`, in document order.
    pub fn find_elements<F>(&self, from: NodeId, mut pred: F) -> Vec<NodeId>
    where
        F: FnMut(&Element) -> bool,
    {
        self.descendants(from)
            .skip(1)
            .filter(|id| self.element(*id).is_some_and(&mut pred))
            .collect()
    }

    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.create(NodeKind::Element(element))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create(NodeKind::Text(text.into()))
    }

    pub(crate) fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { kind, parent: None, children: Vec::new() });
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_ne!(parent, child);
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Place `node` as the sibling immediately following `sibling`.
    pub fn insert_after(&mut self, sibling: NodeId, node: NodeId) -> Result<(), HtmlError> {
        let parent = self.parent(sibling).ok_or(HtmlError::NoParent(sibling))?;
        self.detach(node);

        let siblings = &mut self.nodes[parent.0].children;
        let position = siblings
            .iter()
            .position(|c| *c == sibling)
            .ok_or(HtmlError::NoParent(sibling))?;
        siblings.insert(position + 1, node);
        self.nodes[node.0].parent = Some(parent);
        Ok(())
    }

    /// Append text under `parent`, merging into a trailing text node if there is one.
    pub(crate) fn push_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        let last = self.nodes[parent.0].children.last().copied();
        if let Some(last) = last
            && let NodeKind::Text(existing) = &mut self.nodes[last.0].kind
        {
            existing.push_str(text);
            return;
        }
        let id = self.create_text(text);
        self.append_child(parent, id);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    fn subtree_eq(&self, a: NodeId, other: &HtmlDocument, b: NodeId) -> bool {
        if self.kind(a) != other.kind(b) {
            return false;
        }
        let (left, right) = (self.children(a), other.children(b));
        left.len() == right.len()
            && left.iter().zip(right).all(|(x, y)| self.subtree_eq(*x, other, *y))
    }
}

/// Structural equality: same node kinds, text and attributes in the same
/// shape, regardless of arena layout or detached nodes.
impl PartialEq for HtmlDocument {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root(), other, other.root())
    }
}

impl Eq for HtmlDocument {}

/// Pre-order iterator returned by [`HtmlDocument::descendants`].
pub struct Descendants<'a> {
    doc: &'a HtmlDocument,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
