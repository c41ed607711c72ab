use serde::{Deserialize, Serialize};

/// Ordered attribute key-value pairs.
///
/// Insertion order is render order, so an `img` node always emits `src`
/// before `alt`. Keys are unique by construction; nothing deduplicates.
pub type Attrs = Vec<(String, String)>;

/// An inline-markup-classified fragment of text.
///
/// Spans are immutable once produced; they live only as long as the
/// tokenization call that created them. Link text and image alt text may be
/// empty strings; destinations are always present (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, href: String },
    Image { alt: String, src: String },
}

/// Block-level kind assigned by classification.
///
/// Classification is total: every string maps to exactly one kind, with
/// `Paragraph` as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1-6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A node in the renderable HTML tree.
///
/// Two fixed shapes: a leaf carries an inline text value and no children
/// (`tag: None` means raw text with no wrapping element); a parent carries
/// children and no inline value. A parent exclusively owns its children and
/// the sequence is never mutated after construction — rendering is a pure
/// read-only tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attrs: Attrs,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// Raw text leaf with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    /// Parent node owning the given children.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }
}
