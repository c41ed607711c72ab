//! Block segmentation and classification.

use crate::types::BlockKind;

/// Split a document into trimmed, non-empty blocks on blank-line boundaries.
///
/// A completely empty line separates blocks. Top-to-bottom order is
/// preserved; this order drives everything downstream.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a raw block string. Total over all strings; `Paragraph` is the
/// fallback when nothing else matches.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }
    if block.starts_with("```") && block.ends_with("```") {
        // Overlapping fences on a very short block still land here; the
        // renderer validates the content offsets.
        return BlockKind::Code;
    }

    // Each predicate starts true and is permanently falsified on its first
    // violating line. All lines are scanned regardless of earlier
    // falsifications; only the end state decides.
    let mut quote = true;
    let mut unordered = true;
    let mut ordered = true;
    for (i, line) in block.split('\n').enumerate() {
        if !line.starts_with('>') {
            quote = false;
        }
        if !line.starts_with("- ") {
            unordered = false;
        }
        if !line.starts_with(&format!("{}. ", i + 1)) {
            ordered = false;
        }
    }

    if quote {
        BlockKind::Quote
    } else if unordered {
        BlockKind::UnorderedList
    } else if ordered {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// `^#{1,6} ` at the start of the block → heading level.
fn heading_level(block: &str) -> Option<u8> {
    let bytes = block.as_bytes();
    let hashes = bytes.iter().take_while(|&&b| b == b'#').count();
    if (1..=6).contains(&hashes) && bytes.get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_trims_and_drops_empty_blocks() {
        assert_eq!(split_blocks("a\n\nb\n\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_blank_only_input_is_empty() {
        assert_eq!(split_blocks("\n\n  \n\n"), Vec::<&str>::new());
        assert_eq!(split_blocks(""), Vec::<&str>::new());
    }

    #[test]
    fn split_keeps_single_newlines_inside_blocks() {
        assert_eq!(split_blocks("a\nb\n\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(classify("# one"), BlockKind::Heading(1));
        assert_eq!(classify("### three"), BlockKind::Heading(3));
        assert_eq!(classify("###### six"), BlockKind::Heading(6));
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert_eq!(classify("####### seven"), BlockKind::Paragraph);
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert_eq!(classify("#nope"), BlockKind::Paragraph);
        assert_eq!(classify("#"), BlockKind::Paragraph);
    }

    #[test]
    fn fenced_code() {
        assert_eq!(classify("```\nlet x = 1;\n```"), BlockKind::Code);
    }

    #[test]
    fn bare_fence_classifies_as_code() {
        // Start and end markers overlap; the renderer rejects the offsets.
        assert_eq!(classify("```"), BlockKind::Code);
    }

    #[test]
    fn quote_block() {
        assert_eq!(classify("> a\n> b"), BlockKind::Quote);
    }

    #[test]
    fn unordered_list() {
        assert_eq!(classify("- a\n- b"), BlockKind::UnorderedList);
    }

    #[test]
    fn ordered_list_requires_sequential_numbering() {
        assert_eq!(classify("1. a\n2. b"), BlockKind::OrderedList);
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(classify("2. a"), BlockKind::Paragraph);
    }

    #[test]
    fn mixed_prefixes_fall_back_to_paragraph() {
        assert_eq!(classify("> a\n- b"), BlockKind::Paragraph);
    }

    #[test]
    fn empty_string_is_a_paragraph() {
        assert_eq!(classify(""), BlockKind::Paragraph);
    }

    #[test]
    fn classification_is_idempotent() {
        for block in ["# h", "```", "> q", "- u", "1. o", "plain"] {
            assert_eq!(classify(block), classify(block));
        }
    }
}
