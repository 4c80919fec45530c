//! Section boundary behavior over full pages.

use magstruct::{extract, Category, SectionKind};

#[test]
fn travel_sections_keep_short_place_blurbs() {
    let blurbs: String = (0..10)
        .map(|i| format!("<p>Stop {i:02}: the riverwalk.</p>"))
        .collect();
    let html = format!(
        r#"<html><body><article>
            <h1>A Tale of Two Cities</h1>
            <p>Two Texas destinations worth the drive, and what to see in each.</p>
            <h2>San Antonio</h2>
            {blurbs}
        </article></body></html>"#
    );

    let result = extract(&html, "https://example.com/travel-connection/two-cities").unwrap();
    assert_eq!(result.category, Category::Travel);

    let city = result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some("San Antonio"))
        .unwrap();
    // Travel allows eight items per section and accepts 15-char blurbs that
    // the default knobs would discard.
    assert_eq!(city.body_blocks.len(), 8);
}

#[test]
fn default_categories_cap_sections_at_three_blocks() {
    let html = r#"<html><body><article>
        <h1>An Unremarkable Page</h1>
        <h2>One heading</h2>
        <p>First paragraph with plenty of length to clear the block filter.</p>
        <p>Second paragraph with plenty of length to clear the block filter.</p>
        <p>Third paragraph with plenty of length to clear the block filter.</p>
        <p>Fourth paragraph with plenty of length to clear the block filter.</p>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/misc/page").unwrap();

    let section = result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some("One heading"))
        .unwrap();
    assert_eq!(section.body_blocks.len(), 3);
}

#[test]
fn list_heavy_sections_are_marked_listings() {
    let html = r#"<html><body><article>
        <h1>A Tale of Two Cities</h1>
        <h2>What to pack</h2>
        <ul>
            <li>A sturdy pair of boots for the canyon trails outside town.</li>
            <li>Sun protection rated for long desert afternoons in the open.</li>
        </ul>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/travel-connection/two-cities").unwrap();

    let packing = result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some("What to pack"))
        .unwrap();
    assert_eq!(packing.kind, SectionKind::Listing);
    assert_eq!(packing.body_blocks.len(), 2);
}

#[test]
fn promotional_blocks_end_a_section() {
    let html = r#"<html><body><article>
        <h1>An Unremarkable Page</h1>
        <h2>One heading</h2>
        <p>Legitimate opening paragraph, long enough for the filter to keep.</p>
        <p>Shop now for the full collection in our online warehouse today!</p>
        <p>Anything after the call to action must not join this section.</p>
    </article></body></html>"#;
    let result = extract(html, "https://example.com/misc/page").unwrap();

    let section = result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some("One heading"))
        .unwrap();
    assert_eq!(section.body_blocks.len(), 1);
    assert!(section.body_blocks[0].starts_with("Legitimate"));
}
