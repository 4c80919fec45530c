//! Quality scoring over the extracted result.
//!
//! Produces an advisory 0-100 composite from five sub-scores. The score
//! never gates extraction; downstream ranking decides what to do with a
//! low-quality record. Removing a populated field can only lower the
//! score, never raise it.

use crate::classifier::Classification;
use crate::images::AssignmentStats;
use crate::result::ExtractionResult;

/// Sub-score weights; they sum to 1.0.
const COMPLETENESS_WEIGHT: f64 = 0.30;
const STRUCTURE_WEIGHT: f64 = 0.25;
const IMAGE_RELEVANCE_WEIGHT: f64 = 0.20;
const METADATA_WEIGHT: f64 = 0.15;
const CONFIDENCE_WEIGHT: f64 = 0.10;

/// Each structural violation costs this many points of the structure
/// sub-score.
const STRUCTURE_PENALTY: f64 = 20.0;

/// Compute the composite quality score for a finished result.
#[must_use]
pub fn score(
    result: &ExtractionResult,
    classification: &Classification,
    stats: AssignmentStats,
    expects_images: bool,
) -> u8 {
    let composite = completeness(result, expects_images) * COMPLETENESS_WEIGHT
        + structure(result) * STRUCTURE_WEIGHT
        + image_relevance(stats) * IMAGE_RELEVANCE_WEIGHT
        + metadata_richness(result) * METADATA_WEIGHT
        + classification.confidence * 100.0 * CONFIDENCE_WEIGHT;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = composite.round().clamp(0.0, 100.0) as u8;
    rounded
}

/// Fraction of the expected top-level pieces that are present.
fn completeness(result: &ExtractionResult, expects_images: bool) -> f64 {
    let mut expected = 2.0;
    let mut present = 0.0;
    if result.title.is_some() {
        present += 1.0;
    }
    if result.sections.iter().any(|s| !s.is_empty()) {
        present += 1.0;
    }
    if expects_images {
        expected += 1.0;
        if result.image_count() > 0 {
            present += 1.0;
        }
    }
    present / expected * 100.0
}

/// 100 minus a fixed penalty per structural violation, floored at zero.
/// Violations are empty sections and heading-less sections.
fn structure(result: &ExtractionResult) -> f64 {
    let violations = result
        .sections
        .iter()
        .filter(|s| s.is_empty() || s.heading.is_none())
        .count();
    (100.0 - STRUCTURE_PENALTY * violations as f64).max(0.0)
}

/// Fraction of assigned images placed by the semantic tier. A document
/// with no images is vacuously fully relevant.
fn image_relevance(stats: AssignmentStats) -> f64 {
    let total = stats.total();
    if total == 0 {
        return 100.0;
    }
    stats.semantic as f64 / total as f64 * 100.0
}

/// Fraction of the auxiliary fields that are populated.
fn metadata_richness(result: &ExtractionResult) -> f64 {
    let mut present = 0.0;
    if result.metadata.contains_key("byline") {
        present += 1.0;
    }
    if result.subtitle.is_some() {
        present += 1.0;
    }
    if result.metadata.contains_key("hostname") {
        present += 1.0;
    }
    present / 3.0 * 100.0
}
