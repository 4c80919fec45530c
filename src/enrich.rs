//! Optional enrichment seam.
//!
//! An external collaborator (an AI summarizer, a taxonomy service) may
//! replace the extracted record wholesale. The contract is total
//! replacement or nothing: `Some` swaps in the returned result, `None`
//! leaves the extraction untouched. Partial merges are the caller's
//! problem, not this crate's.

use crate::result::ExtractionResult;

/// A post-extraction enrichment collaborator.
pub trait Enrich {
    /// Inspect the result and optionally produce a replacement.
    fn enrich(&self, result: &ExtractionResult) -> Option<ExtractionResult>;
}

/// The identity enricher.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEnrichment;

impl Enrich for NoEnrichment {
    fn enrich(&self, _result: &ExtractionResult) -> Option<ExtractionResult> {
        None
    }
}

/// Apply an enricher, honoring the replace-or-keep contract.
#[must_use]
pub fn apply<E: Enrich>(enricher: &E, result: ExtractionResult) -> ExtractionResult {
    match enricher.enrich(&result) {
        Some(replacement) => replacement,
        None => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Category;

    struct Retitler;

    impl Enrich for Retitler {
        fn enrich(&self, result: &ExtractionResult) -> Option<ExtractionResult> {
            let mut replacement = result.clone();
            replacement.title = Some("Enriched".to_string());
            Some(replacement)
        }
    }

    #[test]
    fn none_keeps_the_original() {
        let mut result = ExtractionResult::new(Category::General);
        result.title = Some("Original".to_string());
        let out = apply(&NoEnrichment, result);
        assert_eq!(out.title.as_deref(), Some("Original"));
    }

    #[test]
    fn some_replaces_wholesale() {
        let result = ExtractionResult::new(Category::General);
        let out = apply(&Retitler, result);
        assert_eq!(out.title.as_deref(), Some("Enriched"));
    }
}
