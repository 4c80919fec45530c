//! Structured extraction for magazine-article HTML.
//!
//! Turns a magazine article page into a typed, serializable record:
//! classified content type, heading-anchored sections with their body
//! blocks, images assigned to the section they illustrate, normalized
//! interview transcripts, and an advisory quality score. The output feeds
//! search and indexing pipelines downstream.
//!
//! The pipeline runs per document with no shared mutable state. Build one
//! [`ProfileSet`] and share it across threads; each call to [`extract`]
//! is independent.
//!
//! # Example
//!
//! ```
//! let html = r#"<html><body><article>
//!     <h1>Strong Women</h1>
//!     <p>Karin Smirnoff continues the famous series with a new thriller
//!     set in the far north, the author's home ground.</p>
//! </article></body></html>"#;
//!
//! let result = magstruct::extract(html, "https://example.com/entertainment/strong-women")?;
//! assert_eq!(result.title.as_deref(), Some("Strong Women"));
//! assert_eq!(result.sections.len(), 1);
//! # Ok::<(), magstruct::Error>(())
//! ```

pub mod classifier;
pub mod dedup;
pub mod encoding;
pub mod enrich;
mod error;
mod extract;
pub mod images;
pub mod metadata;
mod patterns;
pub mod profiles;
pub mod pruning;
pub mod quality;
pub mod result;
pub mod sections;
pub mod selector;
pub mod transcript;

pub use classifier::Classification;
pub use enrich::{Enrich, NoEnrichment};
pub use error::{Error, Result};
pub use profiles::{Category, CategoryProfile, ProfileSet};
pub use result::{ExtractionResult, Image, QaTurn, Section, SectionKind};

/// Extract a structured record from an HTML document, using the built-in
/// category profiles.
///
/// # Errors
///
/// Returns [`Error::InputMalformed`] when the document is empty or has no
/// processable body. All other degradations surface as
/// [`ExtractionResult::warnings`].
pub fn extract(html: &str, url: &str) -> Result<ExtractionResult> {
    extract_with_profiles(html, url, &ProfileSet::default())
}

/// Extract with an explicit profile set instead of the built-in table.
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_with_profiles(
    html: &str,
    url: &str,
    profiles: &ProfileSet,
) -> Result<ExtractionResult> {
    extract::extract_document(html, url, profiles)
}

/// Extract from raw bytes of unknown charset.
///
/// Decodes via BOM, declared `charset=`, or UTF-8 fallback before running
/// the regular pipeline.
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_bytes(bytes: &[u8], url: &str) -> Result<ExtractionResult> {
    let html = encoding::decode(bytes);
    extract(&html, url)
}
