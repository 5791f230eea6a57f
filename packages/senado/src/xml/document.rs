use std::borrow::Cow;

use crate::error::{Result, SenadoError};

use super::utils::{element_children, get_tag_name, get_text};

/// One tagged node of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name without namespace prefix.
    pub tag: String,
    /// Direct text, trimmed. `None` when absent or whitespace-only.
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with a tag and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set the text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder: append a child.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            tag: get_tag_name(node).to_string(),
            text: get_text(node),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: element_children(node).map(Self::from_node).collect(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `index`-th child element.
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// First child with the given tag.
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Follow a path of child positions, e.g. `[1, 0]` for the first child
    /// of the second child.
    pub fn descend(&self, positions: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &index in positions {
            current = current.child(index)?;
        }
        Some(current)
    }
}

/// A parsed document together with the bytes it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: Vec<u8>,
    root: Element,
}

impl Document {
    /// Parse raw bytes into a document.
    ///
    /// The bytes are decoded according to the encoding named in the XML
    /// declaration: UTF-8 (the default) or ISO-8859-1.
    ///
    /// # Errors
    /// `MalformedDocument` when the encoding is unsupported, the bytes do not
    /// decode, or the text is not well-formed XML.
    pub fn parse(raw: Vec<u8>) -> Result<Self> {
        let text = decode(&raw)?;
        let doc = roxmltree::Document::parse(&text)?;
        let root = Element::from_node(doc.root_element());
        Ok(Self { raw, root })
    }

    /// Build a document around an existing tree.
    ///
    /// The raw bytes are left empty; such documents are meant for parsing
    /// only, not for write-back.
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self {
            raw: Vec::new(),
            root,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The bytes the document was parsed from.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

/// Encoding label from the `<?xml ... encoding="..."?>` declaration.
fn declared_encoding(raw: &[u8]) -> Option<String> {
    let declaration = raw.strip_prefix(b"<?xml")?;
    let end = declaration.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&declaration[..end]).ok()?;
    let value = declaration.split("encoding").nth(1)?.trim_start();
    let value = value.strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    value.find(quote).map(|close| value[..close].to_string())
}

fn decode(raw: &[u8]) -> Result<Cow<'_, str>> {
    let encoding = declared_encoding(raw).map(|e| e.to_ascii_lowercase());
    match encoding.as_deref() {
        None | Some("utf-8" | "utf8") => std::str::from_utf8(raw)
            .map(Cow::Borrowed)
            .map_err(|e| SenadoError::MalformedDocument(format!("invalid UTF-8: {e}"))),
        // Every Latin-1 byte is the code point of the same value
        Some("iso-8859-1" | "latin1" | "latin-1") => {
            Ok(Cow::Owned(raw.iter().map(|&b| char::from(b)).collect()))
        }
        Some(other) => Err(SenadoError::MalformedDocument(format!(
            "unsupported encoding: {other}"
        ))),
    }
}
