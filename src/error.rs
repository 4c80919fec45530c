//! Error types for magstruct.
//!
//! Only genuinely unprocessable input aborts a document. Every heuristic
//! failure inside the pipeline (ambiguous classification, missing headings,
//! unsegmentable transcripts) degrades to a lower-quality result and is
//! recorded in `ExtractionResult::warnings` instead.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be processed at all (empty document,
    /// no parseable body). Aborts processing of this one document only.
    #[error("malformed input: {0}")]
    InputMalformed(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
