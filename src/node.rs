//! HTML element tree and its serialization.

use std::borrow::Cow;
use std::fmt::Write;

use crate::error::{MdError, Result};
use crate::fragment::{FragmentKind, TextFragment};

/// Elements rendered without content or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// Element attributes, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// ` key="value"` for every pair, in order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, false);
        out
    }

    fn write(&self, out: &mut String, escape: bool) {
        for (key, value) in &self.0 {
            let value = if escape {
                html_escape::encode_double_quoted_attribute(value)
            } else {
                Cow::Borrowed(value.as_str())
            };
            let _ = write!(out, " {key}=\"{value}\"");
        }
    }
}

/// A node of the rendered element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    /// Childless element, or bare text when `tag` is `None`.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// Element owning one or more children.
    Parent {
        tag: String,
        children: Vec<ElementNode>,
        attributes: Attributes,
    },
}

impl ElementNode {
    /// Bare text with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        ElementNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: Option<String>, attributes: Attributes) -> Self {
        ElementNode::Leaf {
            tag: Some(tag.into()),
            value,
            attributes,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<ElementNode>) -> Self {
        ElementNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        match &mut self {
            ElementNode::Leaf { attributes, .. } | ElementNode::Parent { attributes, .. } => {
                *attributes = attrs;
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            ElementNode::Leaf { tag, .. } => tag.as_deref(),
            ElementNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            ElementNode::Leaf { attributes, .. } | ElementNode::Parent { attributes, .. } => {
                attributes
            }
        }
    }

    pub fn children(&self) -> &[ElementNode] {
        match self {
            ElementNode::Leaf { .. } => &[],
            ElementNode::Parent { children, .. } => children,
        }
    }
}

/// Lower one inline fragment to a leaf node.
///
/// Links keep their label as the `a` element's text; images carry no value.
pub fn fragment_to_node(fragment: &TextFragment) -> ElementNode {
    let text = fragment.text().to_string();
    let dest = fragment.destination().unwrap_or_default().to_string();

    match fragment.kind() {
        FragmentKind::Plain => ElementNode::text(text),
        FragmentKind::Bold => ElementNode::leaf("b", Some(text), Attributes::new()),
        FragmentKind::Italic => ElementNode::leaf("i", Some(text), Attributes::new()),
        FragmentKind::Code => ElementNode::leaf("code", Some(text), Attributes::new()),
        FragmentKind::Link => {
            ElementNode::leaf("a", Some(text), Attributes::new().with("href", dest))
        }
        FragmentKind::Image => ElementNode::leaf(
            "img",
            None,
            Attributes::new().with("src", dest).with("alt", text),
        ),
    }
}

/// Render a node and all its descendants as HTML.
pub fn serialize(node: &ElementNode) -> Result<String> {
    let mut out = String::new();
    write_node(node, false, &mut out)?;
    Ok(out)
}

/// Like [`serialize`], but HTML-escapes text values and attribute values.
pub fn serialize_escaped(node: &ElementNode) -> Result<String> {
    let mut out = String::new();
    write_node(node, true, &mut out)?;
    Ok(out)
}

fn write_node(node: &ElementNode, escape: bool, out: &mut String) -> Result<()> {
    match node {
        ElementNode::Leaf {
            tag: None, value, ..
        } => {
            let value = value
                .as_deref()
                .filter(|v| !v.is_empty())
                .ok_or(MdError::MissingLeafValue)?;
            push_text(out, value, escape);
        }
        ElementNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            open_tag(out, tag, attributes, escape);
            if VOID_TAGS.contains(&tag.as_str()) {
                return Ok(());
            }
            push_text(out, value.as_deref().unwrap_or_default(), escape);
            close_tag(out, tag);
        }
        ElementNode::Parent {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(MdError::InvalidParentNode("missing tag".to_string()));
            }
            if children.is_empty() {
                return Err(MdError::InvalidParentNode(format!("<{tag}> has no children")));
            }
            open_tag(out, tag, attributes, escape);
            for child in children {
                write_node(child, escape, out)?;
            }
            close_tag(out, tag);
        }
    }
    Ok(())
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes, escape: bool) {
    out.push('<');
    out.push_str(tag);
    attributes.write(out, escape);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_text(out: &mut String, text: &str, escape: bool) {
    if escape {
        out.push_str(&html_escape::encode_text(text));
    } else {
        out.push_str(text);
    }
}
