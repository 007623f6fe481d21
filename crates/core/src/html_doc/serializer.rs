//! Document serialization back to HTML text.

use super::tree::HtmlDocument;
use super::types::{NodeId, NodeKind};

/// Serialize a whole document.
///
/// Text and attribute values are entity-encoded so that parsing the output
/// yields a tree equal to `doc`.
pub fn serialize(doc: &HtmlDocument) -> String {
    let mut out = String::new();
    write_children(doc, doc.root(), false, &mut out);
    out
}

/// Serialize a single node and its subtree (outer HTML).
pub fn serialize_node(doc: &HtmlDocument, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, false, &mut out);
    out
}

fn write_children(doc: &HtmlDocument, id: NodeId, raw: bool, out: &mut String) {
    for child in doc.children(id) {
        write_node(doc, *child, raw, out);
    }
}

fn write_node(doc: &HtmlDocument, id: NodeId, raw: bool, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Document => write_children(doc, id, false, out),
        NodeKind::Declaration(content) => {
            out.push('<');
            out.push_str(content);
            out.push('>');
        }
        NodeKind::Comment(content) => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
        NodeKind::Text(text) if raw => out.push_str(text),
        NodeKind::Text(text) => out.push_str(&html_escape::encode_text(text)),
        NodeKind::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            for attr in &el.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                if let Some(value) = &attr.value {
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
            }
            out.push('>');

            if el.is_void() {
                return;
            }

            write_children(doc, id, el.is_raw_text(), out);
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}
