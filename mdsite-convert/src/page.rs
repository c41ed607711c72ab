//! Page generation — title extraction and template substitution.
//!
//! The glue between a converted document and a finished HTML page. The
//! template is plain text with two literal placeholder tokens; nothing here
//! knows about files or paths.

use crate::error::ConvertError;

/// Placeholder replaced with the extracted document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced with the serialized document HTML.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Extract the page title: the text following `"# "` on the document's
/// first line, kept verbatim (trailing whitespace included). A document
/// without a top-level heading there has no title.
pub fn extract_title(document: &str) -> Result<&str, ConvertError> {
    let first_line = document.split('\n').next().unwrap_or("");
    // Only the line terminator is stripped, never title content.
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    first_line
        .strip_prefix("# ")
        .ok_or(ConvertError::MissingTitle)
}

/// Render a full page: convert and serialize `document`, then substitute the
/// extracted title and the content into `template`.
pub fn render_page(document: &str, template: &str) -> Result<String, ConvertError> {
    let title = extract_title(document)?;
    render_page_with_title(document, template, title)
}

/// Render a full page with an explicit title, bypassing extraction. The
/// document itself still needs no top-level heading in this variant.
pub fn render_page_with_title(
    document: &str,
    template: &str,
    title: &str,
) -> Result<String, ConvertError> {
    let html = crate::render_html::convert(document)?.to_html();
    Ok(template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_from_first_line() {
        assert_eq!(extract_title("# Hello\n\nbody").unwrap(), "Hello");
    }

    #[test]
    fn title_keeps_trailing_whitespace() {
        assert_eq!(extract_title("# Hello  \n\nbody").unwrap(), "Hello  ");
    }

    #[test]
    fn title_from_crlf_document_has_no_carriage_return() {
        assert_eq!(extract_title("# Hello\r\n\r\nbody").unwrap(), "Hello");
    }

    #[test]
    fn missing_title_fails() {
        assert_eq!(extract_title("no heading").unwrap_err(), ConvertError::MissingTitle);
    }

    #[test]
    fn later_heading_does_not_count() {
        assert_eq!(
            extract_title("intro\n\n# Late").unwrap_err(),
            ConvertError::MissingTitle
        );
    }

    #[test]
    fn page_substitutes_both_placeholders() {
        let template = "<title>{{ Title }}</title><body>{{ Content }}</body>";
        let page = render_page("# Home\n\nhi", template).unwrap();
        assert_eq!(
            page,
            "<title>Home</title><body><div><h1>Home</h1><p>hi</p></div></body>"
        );
    }

    #[test]
    fn explicit_title_replaces_extracted_one() {
        let template = "<title>{{ Title }}</title>{{ Content }}";
        let page = render_page_with_title("# Doc\n\nhi", template, "Site").unwrap();
        assert_eq!(page, "<title>Site</title><div><h1>Doc</h1><p>hi</p></div>");
    }

    #[test]
    fn explicit_title_needs_no_heading() {
        let page = render_page_with_title("just text", "{{ Title }}", "T").unwrap();
        assert_eq!(page, "T");
    }

    #[test]
    fn page_propagates_conversion_errors() {
        let err = render_page("# T\n\n`oops", "{{ Content }}").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MalformedMarkup {
                delimiter: "`".to_string()
            }
        );
    }
}
