//! Image extraction and image-to-section assignment.
//!
//! Extraction pulls every content image from the tree with its alt text,
//! caption, and credit. Assignment then maps each image to exactly one
//! section (or the document header) with a three-tier strategy:
//!
//! 1. **Semantic**: highest token overlap between the image's
//!    filename/alt/caption and a section's heading and body.
//! 2. **Proximity**: nearest section heading by document position, for
//!    images that sit inside the sectioned span.
//! 3. **Fallback**: the document header.
//!
//! Semantic matching runs for every image before proximity runs for any;
//! attempting proximity first is exactly what produces the
//! all-images-in-the-header failure on lifestyle pages.

use std::collections::{HashMap, HashSet};

use dom_query::{NodeId, Selection};

use crate::patterns::{IMAGE_CREDIT, NONCONTENT_IMAGE};
use crate::result::{Image, Section};
use crate::sections::normalize;

/// Words too generic to indicate a topical link.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "this", "that", "img", "image", "photo",
];

/// Heading-token overlap counts this much more than body-token overlap.
const HEADING_TOKEN_WEIGHT: usize = 3;

/// How many siblings after an image are scanned for a caption line.
const CAPTION_SIBLING_SCAN: usize = 3;

/// How each image ended up where it did. Feeds the quality scorer's
/// image-relevance sub-score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    pub semantic: usize,
    pub proximity: usize,
    pub fallback: usize,
}

impl AssignmentStats {
    #[must_use]
    pub fn total(&self) -> usize {
        self.semantic + self.proximity + self.fallback
    }
}

/// Extract all content images under the content area, in document order.
///
/// Chrome, ad, and tracking-pixel images are filtered by filename/alt
/// pattern. Captions come from an enclosing `<figure>`'s `figcaption` or
/// from an adjacent credit line; a `©`/`Photo:` portion is split into the
/// credit field.
#[must_use]
pub fn extract(content: &Selection, positions: &HashMap<NodeId, usize>) -> Vec<Image> {
    let mut images = Vec::new();

    for node in content.select("img").nodes() {
        let sel = Selection::from(*node);
        let src = sel
            .attr("src")
            .or_else(|| sel.attr("data-src"))
            .map(|s| s.to_string())
            .unwrap_or_default();
        if src.is_empty() {
            continue;
        }

        let alt = sel.attr("alt").map(|s| normalize(&s)).filter(|s| !s.is_empty());
        let filename = filename_of(&src);
        if NONCONTENT_IMAGE.is_match(&filename)
            || alt.as_deref().is_some_and(|a| NONCONTENT_IMAGE.is_match(a))
        {
            continue;
        }

        let raw_caption = find_caption(node, &sel);
        let (caption, credit) = split_credit(raw_caption);

        images.push(Image {
            url: src,
            alt,
            caption,
            credit,
            position: positions.get(&node.id).copied().unwrap_or(0),
        });
    }

    images
}

/// Caption text from an enclosing figure or an adjacent credit line.
fn find_caption(node: &dom_query::NodeRef, sel: &Selection) -> Option<String> {
    for anc in node.ancestors(None) {
        if anc.node_name().is_some_and(|t| t.eq_ignore_ascii_case("figure")) {
            let figcaption = Selection::from(anc).select("figcaption");
            let text = normalize(&figcaption.text());
            if !text.is_empty() {
                return Some(text);
            }
            break;
        }
    }

    // No figure: a short credit line sometimes follows the image directly.
    let mut current = sel.nodes().first().and_then(dom_query::NodeRef::next_sibling);
    for _ in 0..CAPTION_SIBLING_SCAN {
        let Some(n) = current else { break };
        if n.is_element() {
            let text = normalize(&Selection::from(n).text());
            if IMAGE_CREDIT.is_match(&text) {
                return Some(text);
            }
            // The first substantial element after the image is body
            // content, not a caption; stop looking.
            if text.len() > 120 {
                break;
            }
        }
        current = n.next_sibling();
    }
    None
}

/// Split a raw caption into (caption, credit) on a credit marker.
fn split_credit(raw: Option<String>) -> (Option<String>, Option<String>) {
    let Some(raw) = raw else {
        return (None, None);
    };
    if let Some(idx) = raw.find('©') {
        let caption = raw[..idx].trim().to_string();
        let credit = raw[idx..].trim().to_string();
        return (
            (!caption.is_empty()).then_some(caption),
            (!credit.is_empty()).then_some(credit),
        );
    }
    if IMAGE_CREDIT.is_match(&raw) {
        // No split point: the whole line is a credit.
        return (None, Some(raw));
    }
    (Some(raw), None)
}

/// Assign every image exactly once across the sections and the header.
///
/// Returns per-tier counts. An image already claimed (same URL) when a
/// tier tries to commit is rejected and falls through to the next tier;
/// a duplicate URL rejected by every tier is dropped so the same image
/// identifier never appears twice in the result.
pub fn assign(
    images: Vec<Image>,
    sections: &mut [Section],
    section_positions: &[usize],
    first_heading_position: Option<usize>,
    header_images: &mut Vec<Image>,
) -> AssignmentStats {
    let mut stats = AssignmentStats::default();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut pending: Vec<Option<Image>> = images.into_iter().map(Some).collect();

    let section_tokens: Vec<(HashSet<String>, HashSet<String>)> = sections
        .iter()
        .map(|s| {
            let heading = tokenize(s.heading.as_deref().unwrap_or(""));
            let body = tokenize(&s.body_blocks.join(" "));
            (heading, body)
        })
        .collect();

    // Tier 1: semantic match, for every image before any proximity claim.
    for slot in &mut pending {
        let Some(image) = slot else { continue };
        let Some(best) = semantic_match(image, &section_tokens) else {
            continue;
        };
        if claimed.contains(&image.url) {
            continue;
        }
        claimed.insert(image.url.clone());
        if let Some(image) = slot.take() {
            sections[best].images.push(image);
            stats.semantic += 1;
        }
    }

    // Tier 2: proximity, only inside the sectioned span of the document.
    if let Some(first) = first_heading_position {
        for slot in &mut pending {
            let Some(image) = slot else { continue };
            if image.position < first || claimed.contains(&image.url) {
                continue;
            }
            let Some(nearest) = nearest_section(image.position, section_positions) else {
                continue;
            };
            claimed.insert(image.url.clone());
            if let Some(image) = slot.take() {
                sections[nearest].images.push(image);
                stats.proximity += 1;
            }
        }
    }

    // Tier 3: everything unclaimed goes to the document header.
    for slot in &mut pending {
        let Some(image) = slot else { continue };
        if claimed.contains(&image.url) {
            // Same identifier already assigned elsewhere; drop the copy.
            *slot = None;
            continue;
        }
        tracing::debug!(url = %image.url, "image fell through to header");
        claimed.insert(image.url.clone());
        if let Some(image) = slot.take() {
            header_images.push(image);
            stats.fallback += 1;
        }
    }

    stats
}

/// Best section by weighted token overlap, or `None` without any overlap.
fn semantic_match(
    image: &Image,
    section_tokens: &[(HashSet<String>, HashSet<String>)],
) -> Option<usize> {
    let image_tokens = image_tokens(image);
    if image_tokens.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for (i, (heading, body)) in section_tokens.iter().enumerate() {
        let score = image_tokens.intersection(heading).count() * HEADING_TOKEN_WEIGHT
            + image_tokens.intersection(body).count();
        if score > 0 && best.is_none_or(|(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

/// Nearest section heading by absolute document-order distance; the
/// earlier section wins a tie.
fn nearest_section(position: usize, section_positions: &[usize]) -> Option<usize> {
    section_positions
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| position.abs_diff(**p))
        .map(|(i, _)| i)
}

/// Topical tokens for an image: cleaned filename words plus alt and
/// caption words, stopword-filtered.
fn image_tokens(image: &Image) -> HashSet<String> {
    let filename = filename_of(&image.url);
    let stem = filename
        .rsplit_once('.')
        .map_or(filename.as_str(), |(stem, _)| stem);

    let mut text = stem.replace(['-', '_'], " ");
    if let Some(alt) = &image.alt {
        text.push(' ');
        text.push_str(alt);
    }
    if let Some(caption) = &image.caption {
        text.push(' ');
        text.push_str(caption);
    }
    tokenize(&text)
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| t.len() > 2 && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

fn filename_of(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or(url)
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::SectionKind;
    use crate::sections::document_positions;
    use dom_query::Document;

    fn section(heading: &str, body: &str, order: usize) -> Section {
        Section {
            heading: Some(heading.to_string()),
            order,
            kind: SectionKind::Prose,
            body_blocks: vec![body.to_string()],
            images: Vec::new(),
            qa_turns: Vec::new(),
        }
    }

    fn image(url: &str, alt: Option<&str>, position: usize) -> Image {
        Image {
            url: url.to_string(),
            alt: alt.map(str::to_string),
            caption: None,
            credit: None,
            position,
        }
    }

    #[test]
    fn extracts_images_with_figcaption_split() {
        let doc = Document::from(
            r#"<html><body><article>
                <figure>
                    <img src="/img/eagle-talons-cover.jpg" alt="The Girl in the Eagle's Talons">
                    <figcaption>The new thriller © Nordic Press</figcaption>
                </figure>
            </article></body></html>"#,
        );
        let content = doc.select("article");
        let content = Selection::from(*content.nodes().first().unwrap());
        let positions = document_positions(&content);
        let images = extract(&content, &positions);

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "/img/eagle-talons-cover.jpg");
        assert_eq!(images[0].caption.as_deref(), Some("The new thriller"));
        assert_eq!(images[0].credit.as_deref(), Some("© Nordic Press"));
    }

    #[test]
    fn skips_ad_and_logo_images() {
        let doc = Document::from(
            r#"<html><body><article>
                <img src="/assets/site-logo.png" alt="logo">
                <img src="/ads/banner_300x250.jpg" alt="">
                <img src="/img/halloween-pumpkins.jpg" alt="carved pumpkins">
            </article></body></html>"#,
        );
        let content = doc.select("article");
        let content = Selection::from(*content.nodes().first().unwrap());
        let positions = document_positions(&content);
        let images = extract(&content, &positions);

        assert_eq!(images.len(), 1);
        assert!(images[0].url.contains("halloween"));
    }

    #[test]
    fn semantic_match_beats_proximity() {
        // Image positioned right next to section 0, but its alt text names
        // section 1's topic; semantic tier must win.
        let mut sections = vec![
            section("Celebrate the season", "Pumpkins and parties all month long.", 0),
            section("Online book pick", "A thriller about eagle talons and secrets.", 1),
        ];
        let positions = vec![2, 40];
        let imgs = vec![image("/img/eagle-talons.jpg", Some("eagle talons cover"), 4)];
        let mut header = Vec::new();

        let stats = assign(imgs, &mut sections, &positions, Some(2), &mut header);
        assert_eq!(stats.semantic, 1);
        assert!(sections[0].images.is_empty());
        assert_eq!(sections[1].images.len(), 1);
    }

    #[test]
    fn proximity_assigns_unmatched_in_span_images() {
        let mut sections = vec![
            section("First", "Nothing related to the photo here.", 0),
            section("Second", "Also nothing related to the photo.", 1),
        ];
        let positions = vec![10, 50];
        let imgs = vec![image("/img/dsc04512.jpg", None, 48)];
        let mut header = Vec::new();

        let stats = assign(imgs, &mut sections, &positions, Some(10), &mut header);
        assert_eq!(stats.proximity, 1);
        assert_eq!(sections[1].images.len(), 1);
    }

    #[test]
    fn header_region_image_falls_back_to_header() {
        let mut sections = vec![section("Only", "Unrelated body content here.", 0)];
        let positions = vec![20];
        let imgs = vec![image("/img/dsc09999.jpg", Some("portrait"), 3)];
        let mut header = Vec::new();

        let stats = assign(imgs, &mut sections, &positions, Some(20), &mut header);
        assert_eq!(stats.fallback, 1);
        assert!(sections[0].images.is_empty());
        assert_eq!(header.len(), 1);
    }

    #[test]
    fn duplicate_url_is_never_assigned_twice() {
        let mut sections = vec![section("Books", "All about the eagle talons book.", 0)];
        let positions = vec![5];
        let imgs = vec![
            image("/img/eagle.jpg", Some("eagle talons"), 6),
            image("/img/eagle.jpg", Some("eagle talons"), 30),
        ];
        let mut header = Vec::new();

        assign(imgs, &mut sections, &positions, Some(5), &mut header);
        let total = sections[0].images.len() + header.len();
        assert_eq!(total, 1);
    }

    #[test]
    fn filename_tokens_strip_extension_and_separators() {
        let tokens = image_tokens(&image("/static/nasa_bees-cover.jpg", None, 0));
        assert!(tokens.contains("nasa"));
        assert!(tokens.contains("bees"));
        assert!(tokens.contains("cover"));
        assert!(!tokens.contains("jpg"));
    }
}
