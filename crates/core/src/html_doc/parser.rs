//! Lenient HTML parsing.
//!
//! The parser accepts any input: markup it cannot make sense of is kept as
//! text, unmatched end tags are dropped and unclosed elements are closed at the
//! end of input. It is not an HTML5 tree builder (no implied `<p>` closing,
//! no foster parenting), which is sufficient for hand-authored pages.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use super::tree::HtmlDocument;
use super::types::{Attribute, Element, HtmlError, NodeId, NodeKind};

static START_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^<([a-zA-Z][a-zA-Z0-9:_-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("valid regex")
});

static END_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</([a-zA-Z][a-zA-Z0-9:_-]*)\s*>").expect("valid regex"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid regex")
});

/// Parse `input` into a document tree.
///
/// # Errors
/// * `EmptyDocument` - Input is empty or whitespace-only
pub fn parse(input: &str) -> Result<HtmlDocument, HtmlError> {
    if input.trim().is_empty() {
        return Err(HtmlError::EmptyDocument);
    }

    let mut builder = TreeBuilder::new();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(offset) = input[pos..].find('<') {
        let lt = pos + offset;
        let rest = &input[lt..];

        let Some((markup, len)) = read_markup(rest) else {
            // A `<` that opens no markup stays in the surrounding text.
            pos = lt + 1;
            continue;
        };

        builder.text(&input[text_start..lt]);
        pos = lt + len;

        if let Markup::Start { ref element, self_closing } = markup
            && element.is_raw_text()
            && !self_closing
        {
            let name = element.name.clone();
            builder.apply(markup);
            let raw_len = raw_text_len(&input[pos..], &name);
            builder.raw_text(&input[pos..pos + raw_len]);
            builder.end_raw();
            pos += raw_len;
            pos += raw_end_tag_len(&input[pos..], &name);
        } else {
            builder.apply(markup);
        }
        text_start = pos;
    }

    builder.text(&input[text_start..]);
    Ok(builder.finish())
}

enum Markup {
    Start { element: Element, self_closing: bool },
    End(String),
    Comment(String),
    Declaration(String),
}

/// Recognise markup at the start of `rest` (which begins with `<`), returning it with its byte length.
fn read_markup(rest: &str) -> Option<(Markup, usize)> {
    if let Some(body) = rest.strip_prefix("<!--") {
        let (content, len) = match body.find("-->") {
            Some(end) => (&body[..end], 4 + end + 3),
            None => (body, rest.len()),
        };
        return Some((Markup::Comment(content.to_string()), len));
    }

    if rest.starts_with("<!") || rest.starts_with("<?") {
        let (content, len) = match rest.find('>') {
            Some(end) => (&rest[1..end], end + 1),
            None => (&rest[1..], rest.len()),
        };
        return Some((Markup::Declaration(content.to_string()), len));
    }

    if let Some(caps) = END_TAG_RE.captures(rest) {
        let len = caps.get(0).map_or(0, |m| m.len());
        return Some((Markup::End(caps[1].to_ascii_lowercase()), len));
    }

    let caps = START_TAG_RE.captures(rest)?;
    let len = caps.get(0).map_or(0, |m| m.len());
    let element = Element {
        name: caps[1].to_ascii_lowercase(),
        attrs: caps.get(2).map(|m| parse_attrs(m.as_str())).unwrap_or_default(),
    };
    let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
    Some((Markup::Start { element, self_closing }, len))
}

fn parse_attrs(raw: &str) -> Vec<Attribute> {
    ATTR_RE
        .captures_iter(raw)
        .map(|caps: Captures<'_>| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned());
            Attribute { name: caps[1].to_ascii_lowercase(), value }
        })
        .collect()
}

/// Length of raw text content up to (not including) the closing tag for `name`.
///
/// `</scriptx` does not close a `script`: the name must be followed by
/// whitespace, `/`, `>` or the end of input.
fn raw_text_len(rest: &str, name: &str) -> usize {
    let lower = rest.to_ascii_lowercase();
    let closing = format!("</{name}");
    let mut from = 0;
    while let Some(offset) = lower[from..].find(&closing) {
        let at = from + offset;
        let after = at + closing.len();
        match lower.as_bytes().get(after) {
            None | Some(b'/' | b'>') => return at,
            Some(b) if b.is_ascii_whitespace() => return at,
            Some(_) => from = after,
        }
    }
    rest.len()
}

/// Length of the closing tag for `name` at the start of `rest`, attributes
/// included, or 0 when `rest` is not one.
fn raw_end_tag_len(rest: &str, name: &str) -> usize {
    let closing = format!("</{name}");
    match rest.get(..closing.len()) {
        Some(head) if head.eq_ignore_ascii_case(&closing) => {
            rest.find('>').map_or(rest.len(), |end| end + 1)
        }
        _ => 0,
    }
}

struct TreeBuilder {
    doc: HtmlDocument,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    fn new() -> Self {
        let doc = HtmlDocument::new();
        let root = doc.root();
        Self { doc, open: vec![root] }
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or_else(|| self.doc.root())
    }

    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(raw);
        let parent = self.current();
        self.doc.push_text(parent, &decoded);
    }

    fn raw_text(&mut self, raw: &str) {
        let parent = self.current();
        self.doc.push_text(parent, raw);
    }

    /// Close the raw-text element whose content was just read.
    fn end_raw(&mut self) {
        if self.open.len() > 1 {
            self.open.pop();
        }
    }

    fn apply(&mut self, markup: Markup) {
        let parent = self.current();
        match markup {
            Markup::Start { element, self_closing } => {
                let keeps_open = !self_closing && !element.is_void();
                let id = self.doc.create_element(element);
                self.doc.append_child(parent, id);
                if keeps_open {
                    self.open.push(id);
                }
            }
            Markup::End(name) => self.close(&name),
            Markup::Comment(text) => {
                let id = self.doc.create(NodeKind::Comment(text));
                self.doc.append_child(parent, id);
            }
            Markup::Declaration(text) => {
                let id = self.doc.create(NodeKind::Declaration(text));
                self.doc.append_child(parent, id);
            }
        }
    }

    /// Close the innermost open element named `name` and everything opened after it.
    fn close(&mut self, name: &str) {
        let matched = self
            .open
            .iter()
            .skip(1)
            .rposition(|id| self.doc.element(*id).is_some_and(|el| el.name == name));

        match matched {
            Some(index) => self.open.truncate(index + 1),
            None => trace!(tag = name, "dropping unmatched end tag"),
        }
    }

    fn finish(self) -> HtmlDocument {
        self.doc
    }
}
