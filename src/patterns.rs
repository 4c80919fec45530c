//! Compiled regex patterns shared across the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate and noise detection
// =============================================================================

/// Class/id fragments that mark elements as boilerplate to prune before
/// section detection: navigation, chrome, cookie banners, promos, ads.
pub static BOILERPLATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^nav$|^nav[-_]|[-_]nav$|navbar|navigation|\bmenu\b|site[-_]?header|site[-_]?footer|breadcrumb|cookie|consent|gdpr|\bpromo\b|\bbanner\b|^ad$|^ads$|advert|sponsor|popup|overlay|modal)",
    )
    .expect("BOILERPLATE_CLASS regex")
});

/// Promotional call-to-action and navigational boilerplate in running text.
/// A body block matching this is classified as non-body noise and stops
/// section accumulation.
pub static PROMO_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(add to cart|shop now|compare products|download the pdf|sign up now|subscribe today|back to top|all rights reserved|copyright ©|^©)",
    )
    .expect("PROMO_TEXT regex")
});

/// Author-bio fragments that belong to an author box, not the section body.
pub static AUTHOR_BIO_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(author bio|email questions to|consumer reporter|behind[- ]the[- ]scenes look|fills this (month|column))")
        .expect("AUTHOR_BIO_TEXT regex")
});

// =============================================================================
// Title and metadata
// =============================================================================

/// Eyebrow/kicker labels that look like headings but name a magazine section
/// rather than the article: `// AUTHOR SPOTLIGHT`, `FOR YOUR ENTERTAINMENT`,
/// `TRAVEL // CITIES`. These must never be chosen as the document title.
pub static EYEBROW_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(//.+|[A-Z][A-Z\s&]+//.*|[A-Z][A-Z0-9\s&'-]{2,40})\s*$")
        .expect("EYEBROW_LABEL regex")
});

/// Byline at the start of a short text block: `By Andy Penfold`.
pub static BYLINE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^by\s+([^,\n.]{2,60})").expect("BYLINE_TEXT regex")
});

/// Site-name suffix appended to `<title>` text: ` | Some Magazine`,
/// ` - Site`. The separator must be surrounded by whitespace so hyphenated
/// words inside a real title are left alone.
pub static TITLE_SITE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[|\u{2013}\u{2014}-]\s+[^|\u{2013}\u{2014}-]{2,40}$")
        .expect("TITLE_SITE_SUFFIX regex")
});

// =============================================================================
// Image captions and credits
// =============================================================================

/// Credit line markers adjacent to an image.
pub static IMAGE_CREDIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(©|photo:|credit:|courtesy of)").expect("IMAGE_CREDIT regex")
});

/// Filename fragments marking non-content images: chrome, ads, tracking
/// pixels, standard banner dimensions.
pub static NONCONTENT_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(logo|\bnav\b|menu|banner|sidebar|advert|\bad[sx]?\b|promo|pixel|spacer|1x1|16x16|32x32|300x250|728x90)")
        .expect("NONCONTENT_IMAGE regex")
});

// =============================================================================
// Transcript segmentation
// =============================================================================

/// Speaker anchor at the start of a line or segment. A 2-3 letter
/// abbreviation (`CC`, `KS`) may be delimited by a colon or bare
/// whitespace; a `First Last` name or outlet name is only an anchor with
/// an explicit colon, since prose sentences routinely open with a
/// capitalized bigram.
pub static SPEAKER_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:([A-Z]{2,3})[:\s]|([A-Z][a-z]+ [A-Z][a-z]+(?: Connection)?|Connection)\s*:)\s*",
    )
    .expect("SPEAKER_ANCHOR regex")
});

// =============================================================================
// Text normalization
// =============================================================================

/// Runs of whitespace and control characters, collapsed to single spaces.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\u{00A0}]+").expect("WHITESPACE_RUN regex"));
