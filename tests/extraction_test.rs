//! End-to-end extraction over complete article fixtures.

use magstruct::{extract, extract_bytes, Category, Error};

const LIFESTYLE_URL: &str = "https://example.com/entertainment/strong-women";

fn lifestyle_page() -> &'static str {
    r#"<html>
    <head><title>Strong Women | The Connection</title></head>
    <body>
        <nav><a href="/">Home</a><a href="/shop">Shop</a></nav>
        <header><h1>FOR YOUR ENTERTAINMENT</h1></header>
        <article>
            <p class="byline">By Andy Penfold</p>
            <h1>Strong Women</h1>
            <p>The Millennium series returns this fall with a brand new installment.</p>
            <h2>Online book pick</h2>
            <p>A thriller about the girl in the eagle's talons, set in the far north.</p>
            <h2>Baking with honey</h2>
            <p>A cookbook celebrating honey in breads, cakes and weeknight dinners.</p>
        </article>
        <footer>All rights reserved.</footer>
    </body></html>"#
}

#[test]
fn extracts_title_category_and_sections() {
    let result = extract(lifestyle_page(), LIFESTYLE_URL).unwrap();

    assert_eq!(result.title.as_deref(), Some("Strong Women"));
    assert_eq!(result.category, Category::Lifestyle);
    assert_eq!(result.sections.len(), 3);
    assert_eq!(result.sections[0].heading.as_deref(), Some("Strong Women"));
    assert_eq!(result.sections[1].heading.as_deref(), Some("Online book pick"));
    assert_eq!(result.sections[2].heading.as_deref(), Some("Baking with honey"));
    assert!(result.sections.iter().all(|s| !s.body_blocks.is_empty()));
}

#[test]
fn eyebrow_heading_is_never_the_title() {
    let result = extract(lifestyle_page(), LIFESTYLE_URL).unwrap();
    assert_ne!(result.title.as_deref(), Some("FOR YOUR ENTERTAINMENT"));
}

#[test]
fn metadata_carries_byline_hostname_and_source() {
    let result = extract(lifestyle_page(), LIFESTYLE_URL).unwrap();
    assert_eq!(result.metadata.get("byline").map(String::as_str), Some("Andy Penfold"));
    assert_eq!(result.metadata.get("hostname").map(String::as_str), Some("example.com"));
    assert_eq!(
        result.metadata.get("source_url").map(String::as_str),
        Some(LIFESTYLE_URL)
    );
}

#[test]
fn navigation_and_footer_never_leak_into_sections() {
    let result = extract(lifestyle_page(), LIFESTYLE_URL).unwrap();
    for section in &result.sections {
        for block in &section.body_blocks {
            assert!(!block.contains("All rights reserved"));
            assert!(!block.contains("Home"));
        }
    }
}

#[test]
fn unclassifiable_page_degrades_to_general() {
    let html = r#"<html><body><article>
        <h1>An Unremarkable Page</h1>
        <p>Nothing in this text resembles a known keyword signal in any way.</p>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/misc/page").unwrap();
    assert_eq!(result.category, Category::General);
}

#[test]
fn repeated_blocks_survive_only_once() {
    let html = r#"<html><body><article>
        <h1>An Unremarkable Page</h1>
        <h2>First part</h2>
        <p>The festival returns to the fairgrounds this October for a full week.</p>
        <h2>Second part</h2>
        <p>The festival returns to the fairgrounds this October for a full week.</p>
        <p>Tickets for every evening event go on sale at the start of September.</p>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/misc/festival").unwrap();

    let all_blocks: Vec<&String> = result
        .sections
        .iter()
        .flat_map(|s| s.body_blocks.iter())
        .collect();
    let repeats = all_blocks
        .iter()
        .filter(|b| b.contains("festival returns"))
        .count();
    assert_eq!(repeats, 1);
}

#[test]
fn headingless_page_synthesizes_one_section_with_warning() {
    let html = r#"<html><body><article>
        <p>First paragraph of a plain page that never uses a heading element.</p>
        <p>Second paragraph, still part of the same flow of undivided text.</p>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/misc/plain").unwrap();

    assert_eq!(result.sections.len(), 1);
    assert!(result.sections[0].heading.is_none());
    assert_eq!(result.sections[0].body_blocks.len(), 2);
    assert!(result.warnings.iter().any(|w| w.contains("no headings")));
}

#[test]
fn empty_input_is_malformed() {
    assert!(matches!(
        extract("", "https://example.com/a"),
        Err(Error::InputMalformed(_))
    ));
    assert!(matches!(
        extract("   \n\t ", "https://example.com/a"),
        Err(Error::InputMalformed(_))
    ));
}

#[test]
fn contentless_document_is_malformed() {
    assert!(matches!(
        extract("<html><body></body></html>", "https://example.com/a"),
        Err(Error::InputMalformed(_))
    ));
}

#[test]
fn byte_input_decodes_declared_charset() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(
        b"<html><head><meta charset=\"windows-1252\"><title>Caf",
    );
    bytes.push(0xE9);
    bytes.extend_from_slice(b" Stories</title></head><body><article><h1>Caf");
    bytes.push(0xE9);
    bytes.extend_from_slice(
        b" Stories</h1><p>A long morning at the corner table with the regulars.</p></article></body></html>",
    );

    let result = extract_bytes(&bytes, "https://example.com/misc/cafe").unwrap();
    assert_eq!(result.title.as_deref(), Some("Café Stories"));
}

#[test]
fn result_round_trips_through_json() {
    let result = extract(lifestyle_page(), LIFESTYLE_URL).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: magstruct::ExtractionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.title, result.title);
    assert_eq!(back.sections.len(), result.sections.len());
    assert_eq!(back.category, result.category);
}
