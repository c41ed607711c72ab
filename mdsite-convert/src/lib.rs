//! `mdsite-convert` — conversion core for the mdsite generator.
//!
//! Turns a document written in a constrained Markdown dialect into a tree of
//! renderable [`HtmlNode`]s, then serializes that tree to an HTML string.
//! The dialect covers headings, paragraphs, fenced code, quotes, flat
//! ordered/unordered lists, and inline bold/italic/code/link/image markup.
//!
//! Conversion of one document is a pure, deterministic, re-entrant function
//! of its input string: no I/O, no shared state, nothing cached across
//! calls. Malformed markup fails the whole document rather than producing
//! partial output.
//!
//! # Quick start
//!
//! ```
//! let node = mdsite_convert::convert("## Title\n\nSome **bold** text.").unwrap();
//! assert_eq!(
//!     node.to_html(),
//!     "<div><h2>Title</h2><p>Some <b>bold</b> text.</p></div>"
//! );
//! ```

pub mod blocks;
pub mod error;
pub mod inline;
pub mod page;
pub mod render_html;
pub mod types;

pub use error::ConvertError;
pub use page::{extract_title, render_page, render_page_with_title};
pub use render_html::convert;
pub use types::*;

impl HtmlNode {
    /// Serialize this node and its subtree to an HTML string.
    pub fn to_html(&self) -> String {
        render_html::to_html(self)
    }
}
