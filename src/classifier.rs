//! Content-type classification from weighted keyword signals.
//!
//! A pure function of (URL, title, body text) against the injected
//! `ProfileSet`: no DOM access, no I/O. Each profile scores keyword hits
//! weighted by where they matched (URL > title > body), and the best
//! profile that meets its own threshold wins. Nothing here ever fails;
//! a document no profile claims degrades to `Category::General`.

use crate::profiles::{
    Category, ProfileSet, CONTENT_KEYWORD_WEIGHT, TITLE_KEYWORD_WEIGHT, URL_KEYWORD_WEIGHT,
};

/// How many multiples of `required_score` saturate confidence at 1.0.
const CONFIDENCE_SATURATION: u32 = 5;

/// Outcome of classifying one document. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    /// Sum of matched keyword weights.
    pub score: u32,
    /// Score relative to the winning profile's `required_score`,
    /// saturating at 1.0. Zero for `General`.
    pub confidence: f64,
    /// Whether any title keyword matched; title hits are stronger evidence
    /// of intent and break ties between equal scores.
    pub title_matched: bool,
}

impl Classification {
    /// The degraded outcome when no profile meets its threshold.
    #[must_use]
    pub fn general() -> Self {
        Self {
            category: Category::General,
            score: 0,
            confidence: 0.0,
            title_matched: false,
        }
    }
}

/// Classify a document against every profile in the set.
///
/// Inputs are matched case-insensitively by lowercasing once up front.
/// Tie-break between equal top scores prefers the profile whose keywords
/// matched in the title over one that matched only in body content.
#[must_use]
pub fn classify(url: &str, title: &str, body: &str, profiles: &ProfileSet) -> Classification {
    let url_lower = url.to_lowercase();
    let title_lower = title.to_lowercase();
    let body_lower = body.to_lowercase();

    let mut best: Option<Classification> = None;

    for profile in profiles.profiles() {
        let mut score = 0u32;

        for keyword in &profile.url_keywords {
            if url_lower.contains(keyword) {
                score += URL_KEYWORD_WEIGHT;
            }
        }

        let mut title_matched = false;
        for keyword in &profile.title_keywords {
            if title_lower.contains(keyword) {
                score += TITLE_KEYWORD_WEIGHT;
                title_matched = true;
            }
        }

        for keyword in &profile.content_keywords {
            if body_lower.contains(keyword) {
                score += CONTENT_KEYWORD_WEIGHT;
            }
        }

        if score < profile.required_score {
            continue;
        }

        let saturation = profile.required_score.max(1) * CONFIDENCE_SATURATION;
        let candidate = Classification {
            category: profile.category,
            score,
            confidence: (f64::from(score) / f64::from(saturation)).min(1.0),
            title_matched,
        };

        let replaces = match &best {
            None => true,
            Some(current) => {
                candidate.score > current.score
                    || (candidate.score == current.score
                        && candidate.title_matched
                        && !current.title_matched)
            }
        };
        if replaces {
            best = Some(candidate);
        }
    }

    let result = best.unwrap_or_else(Classification::general);
    tracing::debug!(
        category = %result.category,
        score = result.score,
        confidence = result.confidence,
        "classified document"
    );
    result
}
