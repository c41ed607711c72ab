//! Integration tests converting complete fixture documents end-to-end.

use mdsite_convert::ConvertError;

fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

#[test]
fn basic_fixture_converts() {
    let content = read_fixture("basic.md");
    let html = mdsite_convert::convert(&content)
        .expect("basic.md should convert")
        .to_html();

    assert!(html.starts_with("<div>"), "root should be a div: {html}");
    assert!(html.contains("<h1>Document Title</h1>"));
    assert!(html.contains("<h2>Section</h2>"));
    assert!(html.contains("<b>bold</b>"));
    assert!(html.contains("<i>italic</i>"));
    assert!(html.contains("<code>code</code>"));
    assert!(html.contains("<a href=\"https://example.com\">link</a>"));
    assert!(html.contains("<img src=\"logo.png\" alt=\"logo\"></img>"));
    assert!(html.contains("<blockquote>quoted line one quoted line two</blockquote>"));
    assert!(html.contains("<ul><li>alpha</li><li>beta</li></ul>"));
    assert!(html.contains("<ol><li>one</li><li>two</li></ol>"));
    assert!(html.contains("<pre><code>fn main() {}\n</code></pre>"));
}

#[test]
fn exact_document_rendering() {
    let html = mdsite_convert::convert("# Title\n\nHello **world**.\n\n- a\n- b\n")
        .unwrap()
        .to_html();
    assert_eq!(
        html,
        "<div><h1>Title</h1><p>Hello <b>world</b>.</p><ul><li>a</li><li>b</li></ul></div>"
    );
}

#[test]
fn unbalanced_fixture_fails() {
    let content = read_fixture("unbalanced.md");
    let err = mdsite_convert::convert(&content).unwrap_err();
    assert_eq!(
        err,
        ConvertError::MalformedMarkup {
            delimiter: "**".to_string()
        }
    );
}

#[test]
fn page_generation_from_fixture() {
    let content = read_fixture("basic.md");
    let template = "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";
    let page = mdsite_convert::render_page(&content, template).unwrap();

    assert!(page.contains("<title>Document Title</title>"));
    assert!(page.contains("<h1>Document Title</h1>"));
    assert!(!page.contains("{{ Title }}"));
    assert!(!page.contains("{{ Content }}"));
}
