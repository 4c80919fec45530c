//! Title, subtitle, byline, and hostname extraction.
//!
//! Runs against the unpruned document: mastheads and standfirsts often
//! live in `<header>` containers that the pruning pass removes before
//! section detection.
//!
//! The title chooser must never pick an eyebrow. Magazine layouts put a
//! section label (`// AUTHOR SPOTLIGHT`, `For Your Entertainment`) in the
//! first heading slot with the real article title beneath it; taking the
//! first `h1` blindly titles the article after the column it ran in.

use dom_query::Document;
use url::Url;

use crate::patterns::{BYLINE_TEXT, EYEBROW_LABEL, TITLE_SITE_SUFFIX};
use crate::sections::normalize;

/// Recurring magazine column labels that are never article titles, even
/// in mixed case where the all-caps eyebrow pattern misses them.
const SECTION_LABELS: &[&str] = &[
    "for your entertainment",
    "inside connection",
    "member connection",
    "buying smart",
    "travel connection",
    "fresh views",
    "tech connection",
];

/// Byline blocks longer than this are article prose that happens to open
/// with the word "by".
const MAX_BYLINE_LENGTH: usize = 80;

/// Document-level fields pulled before pruning.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub byline: Option<String>,
    pub hostname: Option<String>,
}

/// Extract title, subtitle, byline, and hostname from a parsed document.
#[must_use]
pub fn extract(doc: &Document, url: &str) -> DocumentMeta {
    let title = extract_title(doc);
    let subtitle = extract_subtitle(doc, title.as_deref());
    DocumentMeta {
        title,
        subtitle,
        byline: extract_byline(doc),
        hostname: hostname(url),
    }
}

/// First `h1` in document order that is not an eyebrow label; falls back
/// to the `<title>` element with any site-name suffix stripped.
fn extract_title(doc: &Document) -> Option<String> {
    for node in doc.select("h1").nodes() {
        let text = normalize(&dom_query::Selection::from(*node).text());
        if text.len() >= 3 && !is_eyebrow(&text) {
            return Some(text);
        }
    }

    let page_title = normalize(&doc.select("head title").text());
    if page_title.is_empty() {
        return None;
    }
    let stripped = normalize(&TITLE_SITE_SUFFIX.replace(&page_title, ""));
    if stripped.is_empty() {
        Some(page_title)
    } else {
        Some(stripped)
    }
}

fn is_eyebrow(text: &str) -> bool {
    EYEBROW_LABEL.is_match(text) || SECTION_LABELS.contains(&text.to_lowercase().as_str())
}

/// First standfirst-like heading distinct from the title.
fn extract_subtitle(doc: &Document, title: Option<&str>) -> Option<String> {
    for node in doc.select(".subtitle, .dek, .standfirst, h2").nodes() {
        let text = normalize(&dom_query::Selection::from(*node).text());
        if text.len() < 3 || text.len() > 200 || is_eyebrow(&text) {
            continue;
        }
        if title.is_some_and(|t| t.eq_ignore_ascii_case(&text)) {
            continue;
        }
        return Some(text);
    }
    None
}

/// Author name, from byline-marked elements first, then bare paragraphs.
///
/// A class-marked element is trusted as-is; a bare `<p>` opening with
/// "By" must also capture something name-shaped, or sentences like
/// "By the time the doors open..." become bylines.
fn extract_byline(doc: &Document) -> Option<String> {
    for node in doc.select(".byline, .author").nodes() {
        let text = normalize(&dom_query::Selection::from(*node).text());
        if text.is_empty() || text.len() > MAX_BYLINE_LENGTH {
            continue;
        }
        if let Some(name) = byline_capture(&text) {
            return Some(name);
        }
        if is_name_shaped(&text) {
            return Some(text);
        }
    }

    for node in doc.select("p").nodes() {
        let text = normalize(&dom_query::Selection::from(*node).text());
        if text.len() > MAX_BYLINE_LENGTH {
            continue;
        }
        if let Some(name) = byline_capture(&text) {
            if is_name_shaped(&name) {
                return Some(name);
            }
        }
    }
    None
}

fn byline_capture(text: &str) -> Option<String> {
    BYLINE_TEXT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
}

/// Two to four words, each starting with an uppercase letter.
fn is_name_shaped(candidate: &str) -> bool {
    let words: Vec<&str> = candidate.split_whitespace().collect();
    (2..=4).contains(&words.len())
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

fn hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
