//! Boilerplate pruning before section detection.
//!
//! Strips scripts, chrome, cookie banners, and promotional containers so
//! the boundary detector only sees candidate article markup. Mirrors the
//! order of operations the classifier relies on: prune first, then locate
//! the content area, then classify.

use dom_query::{Document, Selection};

use crate::patterns::BOILERPLATE_CLASS;

/// Tags removed wholesale; none of them ever hold article body content.
const STRIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "iframe",
];

/// Short text fragments that identify a container as site chrome even when
/// its class names are unhelpful.
const CHROME_TEXT: &[&str] = &[
    "we use cookies",
    "accept cookies",
    "cookie settings",
    "privacy policy",
    "add to cart",
    "compare products",
];

/// Containers flagged by text content are only removed when they are this
/// short; long containers matching a chrome phrase are more likely article
/// text quoting it.
const MAX_CHROME_WORDS: usize = 20;

/// Remove non-content elements from the document in place.
pub fn prune(doc: &Document) {
    for tag in STRIP_TAGS {
        doc.select(tag).remove();
    }

    // Remove containers whose class or id marks them as boilerplate.
    let mut doomed = Vec::new();
    for node in doc.select("div, section, ul").nodes() {
        let sel = Selection::from(*node);
        let class = sel.attr("class").unwrap_or_default().to_string();
        let id = sel.attr("id").unwrap_or_default().to_string();
        if BOILERPLATE_CLASS.is_match(&class) || BOILERPLATE_CLASS.is_match(&id) {
            doomed.push(*node);
        }
    }
    for node in doomed {
        Selection::from(node).remove();
    }

    // Remove short containers that read as chrome.
    let mut doomed = Vec::new();
    for node in doc.select("div, section, p").nodes() {
        let sel = Selection::from(*node);
        let text = sel.text().to_lowercase();
        if text.split_whitespace().count() < MAX_CHROME_WORDS
            && CHROME_TEXT.iter().any(|phrase| text.contains(phrase))
        {
            doomed.push(*node);
        }
    }
    for node in doomed {
        Selection::from(node).remove();
    }
}
