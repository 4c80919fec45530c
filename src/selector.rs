//! Locating the main content area.
//!
//! Tries semantic containers and well-known content class names first,
//! then falls back to scoring every remaining container by structure and
//! text volume. The winner is the root the rest of the pipeline walks.

use dom_query::{Document, NodeRef, Selection};

/// Selectors tried in order of preference before generic scoring.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=main]",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".main-content",
    ".content-area",
    ".magazine-content",
];

/// Minimum score for a selector-matched candidate to be accepted outright.
const SELECTOR_ACCEPT_SCORE: i64 = 20;

/// Minimum score for a generic `div`/`section` to beat the body fallback.
const GENERIC_ACCEPT_SCORE: i64 = 50;

/// Find the main content area of a pruned document.
///
/// Returns `None` only when the document has no `body` at all.
#[must_use]
pub fn find_main_content(doc: &Document) -> Option<Selection<'_>> {
    let mut best: Option<(NodeRef<'_>, i64)> = None;

    for selector in CONTENT_SELECTORS {
        for node in doc.select(selector).nodes() {
            let score = score_candidate(&Selection::from(*node));
            if score >= SELECTOR_ACCEPT_SCORE && best.is_none_or(|(_, s)| score > s) {
                best = Some((*node, score));
            }
        }
        // A confident semantic match wins without scanning generic divs.
        if let Some((node, _)) = best {
            return Some(Selection::from(node));
        }
    }

    for node in doc.select("div, section").nodes() {
        let score = score_candidate(&Selection::from(*node));
        if score >= GENERIC_ACCEPT_SCORE && best.is_none_or(|(_, s)| score > s) {
            best = Some((*node, score));
        }
    }
    if let Some((node, _)) = best {
        return Some(Selection::from(node));
    }

    let body = doc.select("body");
    if body.nodes().is_empty() {
        None
    } else {
        body.nodes().first().map(|n| Selection::from(*n))
    }
}

/// Score a candidate container by text volume and article structure.
fn score_candidate(sel: &Selection) -> i64 {
    let text = sel.text();
    let text_len = text.trim().len() as i64;

    let mut score = match text_len {
        0..=200 => 0,
        201..=500 => 15,
        501..=1000 => 30,
        _ => 50,
    };

    score += sel.select("p").nodes().len() as i64 * 5;
    score += sel.select("h1, h2, h3").nodes().len() as i64 * 8;
    score += sel.select("ul, ol").nodes().len() as i64 * 5;

    // Link-heavy containers read as navigation, not article body.
    let links = sel.select("a").nodes().len() as i64;
    if links > 15 {
        score -= 30;
    }

    score
}
