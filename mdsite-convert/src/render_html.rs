//! Block rendering, inline-to-node conversion and HTML serialization.
//!
//! Values are emitted verbatim — the dialect has no delimiter escaping and
//! the output performs no HTML entity escaping.

use crate::blocks::{classify, split_blocks};
use crate::error::ConvertError;
use crate::inline::tokenize;
use crate::types::{Attrs, BlockKind, HtmlNode, Inline};

/// Convert a whole document into its renderable node tree.
///
/// Blocks are segmented, classified and rendered in document order, then
/// collected as children of a single `div` root. An empty document yields a
/// childless root, not an error. Conversion is fail-fast: the first
/// malformed block aborts the call.
pub fn convert(document: &str) -> Result<HtmlNode, ConvertError> {
    let normalised = document.replace("\r\n", "\n");

    let mut children = Vec::new();
    for block in split_blocks(&normalised) {
        children.push(render_block(block, classify(block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Render one classified block into its node subtree.
pub fn render_block(block: &str, kind: BlockKind) -> Result<HtmlNode, ConvertError> {
    match kind {
        BlockKind::Paragraph => render_paragraph(block),
        BlockKind::Heading(level) => render_heading(block, level),
        BlockKind::Code => render_code(block),
        BlockKind::Quote => render_quote(block),
        BlockKind::UnorderedList => render_list(block, "ul", 2),
        BlockKind::OrderedList => render_list(block, "ol", 3),
    }
}

/// Total mapping from inline span to leaf node.
pub fn inline_to_node(span: Inline) -> HtmlNode {
    match span {
        Inline::Text(content) => HtmlNode::text(content),
        Inline::Bold(content) => HtmlNode::leaf("b", content),
        Inline::Italic(content) => HtmlNode::leaf("i", content),
        Inline::Code(content) => HtmlNode::leaf("code", content),
        Inline::Link { text, href } => {
            HtmlNode::leaf_with_attrs("a", text, vec![("href".to_string(), href)])
        }
        Inline::Image { alt, src } => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![("src".to_string(), src), ("alt".to_string(), alt)],
        ),
    }
}

/// Serialize a node and its subtree to an HTML string.
///
/// Untagged leaves emit their raw value with no wrapping element; children
/// of a parent are concatenated with no inserted whitespace.
pub fn to_html(node: &HtmlNode) -> String {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => value.clone(),
        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attrs,
        } => format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs)),
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            let inner: String = children.iter().map(to_html).collect();
            format!("<{tag}{}>{inner}</{tag}>", render_attrs(attrs))
        }
    }
}

fn render_attrs(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}

/// Tokenize inline text and convert the spans to child nodes.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(tokenize(text)?.into_iter().map(inline_to_node).collect())
}

// ------------------------------------------------------------------
// Per-kind renderers
// ------------------------------------------------------------------

fn render_paragraph(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", inline_children(&text)?))
}

fn render_heading(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    // The marker is the `#` run plus one space.
    let marker_len = level as usize + 1;
    let text = block.get(marker_len..).unwrap_or("").trim_start();
    if text.is_empty() {
        return Err(ConvertError::InvalidHeading { level });
    }
    Ok(HtmlNode::parent(format!("h{level}"), inline_children(text)?))
}

fn render_code(block: &str) -> Result<HtmlNode, ConvertError> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(ConvertError::InvalidCodeBlock);
    }

    // Content sits after the opening fence plus its line terminator and
    // before the closing fence. Blocks too short for those offsets (or with
    // a multibyte character straddling one) have no valid content slot.
    let content = block
        .len()
        .checked_sub(3)
        .filter(|&end| end >= 4)
        .and_then(|end| block.get(4..end))
        .ok_or(ConvertError::InvalidCodeBlock)?;

    // Code content is one unformatted text leaf, never re-tokenized, so
    // inline markup inside the fence stays literal.
    let code = HtmlNode::parent("code", vec![HtmlNode::text(content)]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn render_quote(block: &str) -> Result<HtmlNode, ConvertError> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        let stripped = line
            .strip_prefix('>')
            .ok_or_else(|| ConvertError::InvalidQuote {
                line: line.to_string(),
            })?;
        lines.push(stripped.trim());
    }
    Ok(HtmlNode::parent(
        "blockquote",
        inline_children(&lines.join(" "))?,
    ))
}

/// List items re-tokenize per line, keeping inline-markup detection local to
/// literal item text. Marker width is fixed; ordered lists are assumed to
/// stay in single digits.
fn render_list(block: &str, tag: &str, marker_len: usize) -> Result<HtmlNode, ConvertError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let text = line.get(marker_len..).unwrap_or_default();
        items.push(HtmlNode::parent("li", inline_children(text)?));
    }
    Ok(HtmlNode::parent(tag, items))
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
