//! Inline-span tokenizer.
//!
//! Turns a raw inline string into an ordered sequence of [`Inline`] spans.
//! Passes run in a fixed order over the growing span sequence: image markers,
//! link markers, then the `**`, `_` and backtick delimiter splits. The order
//! determines precedence when markup types could overlap, so it must not be
//! rearranged.

use crate::error::ConvertError;
use crate::types::Inline;

/// Tokenize `text` into inline spans.
///
/// Every character of the input survives in order except the markup markers
/// themselves. An unmatched delimiter is a hard
/// [`ConvertError::MalformedMarkup`], not a silent pass-through.
pub fn tokenize(text: &str) -> Result<Vec<Inline>, ConvertError> {
    let mut spans = vec![Inline::Text(text.to_string())];
    spans = split_markers(spans, true);
    spans = split_markers(spans, false);
    spans = split_delimiter(spans, "**", Inline::Bold)?;
    spans = split_delimiter(spans, "_", Inline::Italic)?;
    spans = split_delimiter(spans, "`", Inline::Code)?;
    Ok(spans)
}

/// Split every remaining `Text` span on `delimiter`.
///
/// Pieces at even positions stay text, pieces at odd positions become the
/// span kind built by `make`. Every opening delimiter needs a matching
/// closing one, so an even piece count is malformed. Empty pieces are
/// dropped.
fn split_delimiter(
    spans: Vec<Inline>,
    delimiter: &str,
    make: fn(String) -> Inline,
) -> Result<Vec<Inline>, ConvertError> {
    let mut out = Vec::new();
    for span in spans {
        let Inline::Text(text) = span else {
            out.push(span);
            continue;
        };

        let pieces: Vec<&str> = text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ConvertError::MalformedMarkup {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, piece) in pieces.iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Inline::Text((*piece).to_string()));
            } else {
                out.push(make((*piece).to_string()));
            }
        }
    }
    Ok(out)
}

/// Split every remaining `Text` span on image (`![alt](src)`) or link
/// (`[text](href)`) markers, left to right. Empty prefix/suffix fragments
/// are dropped; non-text spans pass through unchanged.
fn split_markers(spans: Vec<Inline>, image: bool) -> Vec<Inline> {
    let mut out = Vec::new();
    for span in spans {
        let Inline::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = text.as_str();
        while let Some((start, end, label, dest)) = find_marker(rest, image) {
            if start > 0 {
                out.push(Inline::Text(rest[..start].to_string()));
            }
            out.push(if image {
                Inline::Image {
                    alt: label.to_string(),
                    src: dest.to_string(),
                }
            } else {
                Inline::Link {
                    text: label.to_string(),
                    href: dest.to_string(),
                }
            });
            rest = &rest[end..];
        }
        if !rest.is_empty() {
            out.push(Inline::Text(rest.to_string()));
        }
    }
    out
}

/// Find the first marker in `text`, returning `(start, end, label, dest)`
/// byte positions and slices.
///
/// Label text contains no square brackets and the destination no parentheses
/// (matching is non-greedy up to the first closing paren). Link scanning
/// skips any `[` immediately preceded by `!` — image extraction runs first,
/// but the exclusion stays load-bearing if the passes are ever reordered.
fn find_marker(text: &str, image: bool) -> Option<(usize, usize, &str, &str)> {
    let bytes = text.as_bytes();
    let mut search = 0;

    while let Some(rel) = text[search..].find('[') {
        let open = search + rel;
        search = open + 1;

        let preceded_by_bang = open > 0 && bytes[open - 1] == b'!';
        if image != preceded_by_bang {
            continue;
        }

        let after_open = &text[open + 1..];
        let Some(close_rel) = after_open.find([']', '[']) else {
            continue;
        };
        if after_open.as_bytes()[close_rel] == b'[' {
            continue;
        }
        let close = open + 1 + close_rel;
        let label = &text[open + 1..close];

        if bytes.get(close + 1) != Some(&b'(') {
            continue;
        }
        let after_paren = &text[close + 2..];
        let Some(paren_rel) = after_paren.find([')', '(']) else {
            continue;
        };
        if after_paren.as_bytes()[paren_rel] == b'(' {
            continue;
        }
        let dest = &after_paren[..paren_rel];

        let start = if image { open - 1 } else { open };
        let end = close + 2 + paren_rel + 1;
        return Some((start, end, label, dest));
    }

    None
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
