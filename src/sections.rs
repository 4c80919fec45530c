//! Section boundary detection.
//!
//! Walks heading elements in document order and partitions the markup
//! under the located content area into heading-anchored sections. Each
//! heading opens a section whose body accumulates the sibling blocks that
//! follow it, until the next heading, the per-category item cap, or a
//! block the noise filter classifies as non-body content.
//!
//! The filter is deliberately conservative: when a block is ambiguous the
//! detector keeps accumulating rather than guessing a premature boundary.
//! Over-eager early stops are what push article content and images into
//! the header section.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef, Selection};

use crate::patterns::{AUTHOR_BIO_TEXT, PROMO_TEXT, WHITESPACE_RUN};
use crate::profiles::{Category, ProfileSet};
use crate::result::{Section, SectionKind};

/// Continuation punctuation: a short block ending in one of these is the
/// lead-in to the next block, not noise.
const CONTINUATION: &[char] = &[':', ',', ';'];

/// Sections with at least this fraction of list-item blocks are listings.
const LISTING_FRACTION: f64 = 0.5;

/// Detected sections plus the positional data the image assigner needs.
#[derive(Debug)]
pub struct SectionLayout {
    pub sections: Vec<Section>,
    /// Document-order position of each section's heading, parallel to
    /// `sections`. Empty for a synthesized heading-less layout.
    pub positions: Vec<usize>,
    /// Position of the first heading; images before it belong to the
    /// document header.
    pub first_heading_position: Option<usize>,
    /// True when the document had no headings and a single section was
    /// synthesized over the whole body.
    pub synthesized: bool,
}

/// Map every element under `content` to its document-order index.
///
/// Headings, blocks, and images are all positioned against this single
/// index so proximity comparisons are consistent.
#[must_use]
pub fn document_positions(content: &Selection) -> HashMap<NodeId, usize> {
    content
        .select("*")
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect()
}

/// Partition the content area into ordered sections for a category.
#[must_use]
pub fn detect(
    content: &Selection,
    category: Category,
    profiles: &ProfileSet,
    positions: &HashMap<NodeId, usize>,
) -> SectionLayout {
    let (max_items, min_block_len) = profiles.section_limits(category);

    let heading_sel = content.select("h1, h2, h3, h4, h5, h6");
    let mut headings: Vec<NodeRef> = heading_sel.nodes().to_vec();
    headings.sort_by_key(|n| positions.get(&n.id).copied().unwrap_or(usize::MAX));

    let mut sections = Vec::new();
    let mut section_positions = Vec::new();

    for node in &headings {
        let heading_text = normalize(&Selection::from(*node).text());
        if heading_text.len() < 3 || PROMO_TEXT.is_match(&heading_text) {
            continue;
        }

        let (blocks, li_blocks) = collect_sibling_blocks(node, max_items, min_block_len);

        let kind = if !blocks.is_empty()
            && li_blocks as f64 / blocks.len() as f64 >= LISTING_FRACTION
        {
            SectionKind::Listing
        } else {
            SectionKind::Prose
        };

        section_positions.push(positions.get(&node.id).copied().unwrap_or(0));
        sections.push(Section {
            heading: Some(heading_text),
            order: sections.len(),
            kind,
            body_blocks: blocks,
            images: Vec::new(),
            qa_turns: Vec::new(),
        });
    }

    if sections.is_empty() {
        tracing::debug!("no headings found, synthesizing single section");
        return SectionLayout {
            sections: vec![synthesize_section(content, min_block_len)],
            positions: Vec::new(),
            first_heading_position: None,
            synthesized: true,
        };
    }

    let first = section_positions.iter().copied().min();
    SectionLayout {
        sections,
        positions: section_positions,
        first_heading_position: first,
        synthesized: false,
    }
}

/// Accumulate body blocks from the siblings following a heading.
///
/// Returns the blocks and how many of them came from list items. Stops at
/// the next heading, the item cap, or a clearly non-body noise block;
/// merely-short blocks are skipped without stopping.
fn collect_sibling_blocks(
    heading: &NodeRef,
    max_items: usize,
    min_block_len: usize,
) -> (Vec<String>, usize) {
    let mut blocks = Vec::new();
    let mut li_blocks = 0usize;
    let mut current = heading.next_sibling();

    'walk: while let Some(node) = current {
        if blocks.len() >= max_items {
            break;
        }
        if node.is_element() {
            let tag = node
                .node_name()
                .map(|t| t.to_lowercase())
                .unwrap_or_default();
            match tag.as_str() {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => break,
                "p" | "blockquote" => {
                    let text = normalize(&Selection::from(node).text());
                    match classify_block(&text, min_block_len) {
                        BlockClass::Body => blocks.push(text),
                        BlockClass::Noise => break,
                        BlockClass::TooShort => {}
                    }
                }
                "div" => {
                    // Only leaf-like divs contribute a block; structured
                    // wrappers would double-count their children.
                    let sel = Selection::from(node);
                    if sel.select("p, div, ul, ol, h1, h2, h3, h4, h5, h6").nodes().is_empty() {
                        let text = normalize(&sel.text());
                        match classify_block(&text, min_block_len) {
                            BlockClass::Body => blocks.push(text),
                            BlockClass::Noise => break,
                            BlockClass::TooShort => {}
                        }
                    }
                }
                "ul" | "ol" => {
                    for li in Selection::from(node).select("li").nodes() {
                        if blocks.len() >= max_items {
                            break 'walk;
                        }
                        let text = normalize(&Selection::from(*li).text());
                        match classify_block(&text, min_block_len) {
                            BlockClass::Body => {
                                blocks.push(text);
                                li_blocks += 1;
                            }
                            BlockClass::Noise => break 'walk,
                            BlockClass::TooShort => {}
                        }
                    }
                }
                _ => {}
            }
        }
        current = node.next_sibling();
    }

    (blocks, li_blocks)
}

/// Verdict of the lightweight block filter.
enum BlockClass {
    Body,
    /// Author-bio fragment, promotional call-to-action, or navigational
    /// boilerplate; ends the current section.
    Noise,
    /// Below the minimum length with no continuation punctuation; skipped
    /// without ending the section.
    TooShort,
}

fn classify_block(text: &str, min_block_len: usize) -> BlockClass {
    if text.is_empty() {
        return BlockClass::TooShort;
    }
    if PROMO_TEXT.is_match(text) || AUTHOR_BIO_TEXT.is_match(text) {
        return BlockClass::Noise;
    }
    if text.len() < min_block_len && !text.ends_with(CONTINUATION) {
        return BlockClass::TooShort;
    }
    BlockClass::Body
}

/// Build the single heading-less section for a document without headings.
fn synthesize_section(content: &Selection, min_block_len: usize) -> Section {
    let mut blocks = Vec::new();
    for node in content.select("p, li, blockquote").nodes() {
        let text = normalize(&Selection::from(*node).text());
        // Noise blocks are skipped rather than stopping: there is only one
        // section, so a stop would discard the rest of the document.
        if matches!(classify_block(&text, min_block_len), BlockClass::Body) {
            blocks.push(text);
        }
    }
    Section {
        heading: None,
        order: 0,
        kind: SectionKind::Prose,
        body_blocks: blocks,
        images: Vec::new(),
        qa_turns: Vec::new(),
    }
}

pub(crate) fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").to_string()
}
