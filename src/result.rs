//! Structured output types for extraction.
//!
//! `ExtractionResult` is the terminal artifact handed to downstream
//! search/indexing pipelines. It is assembled mutably inside the pipeline
//! and treated as immutable once returned.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profiles::Category;

/// An image extracted from the document.
///
/// Each image is assigned to exactly one section (or the document header)
/// across the whole result; the assigner enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Full image URL (from `src` or `data-src`).
    pub url: String,

    /// Alt text from the `alt` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Caption from an associated `<figcaption>` or adjacent caption line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Photographer/agency credit, split out of the caption when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,

    /// Document-order element index, used for proximity assignment.
    pub position: usize,
}

/// One speaker's utterance in a normalized interview transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaTurn {
    pub speaker: String,
    pub utterance: String,
}

/// Shape of a section's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Free-flowing prose blocks.
    #[default]
    Prose,
    /// Interview transcript; content lives in `qa_turns`.
    Qa,
    /// Short listing items (place blurbs, product entries).
    Listing,
}

/// A contiguous, heading-anchored block of extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text. `None` only for the synthesized section of a
    /// heading-less document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Position in document order, starting at 0.
    pub order: usize,

    #[serde(default)]
    pub kind: SectionKind,

    /// Ordered body text blocks.
    pub body_blocks: Vec<String>,

    /// Images assigned to this section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    /// Interview turns; populated only when `kind` is `Qa`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qa_turns: Vec<QaTurn>,
}

impl Section {
    /// True when the section carries no content at all. Counted as a
    /// boundary violation by the quality scorer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body_blocks.is_empty() && self.images.is_empty() && self.qa_turns.is_empty()
    }
}

/// Result of structured extraction from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The document's primary heading-level text. Exactly one per result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub category: Category,

    /// Advisory 0-100 confidence/quality composite. Not a gate.
    pub quality_score: u8,

    /// Sections in document visual order.
    pub sections: Vec<Section>,

    /// Images assigned to the document header rather than a section
    /// (lead photos, author portraits with no topical target).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_images: Vec<Image>,

    /// Auxiliary fields: byline, hostname, source URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    /// Non-fatal degradations encountered during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// Empty result shell for a category, filled in by the pipeline.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            title: None,
            subtitle: None,
            category,
            quality_score: 0,
            sections: Vec::new(),
            header_images: Vec::new(),
            metadata: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Total number of images across header and all sections.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.header_images.len() + self.sections.iter().map(|s| s.images.len()).sum::<usize>()
    }
}
