//! The extraction pipeline.
//!
//! Orchestrates the passes in a fixed order: parse, pull document-level
//! metadata (before pruning removes the masthead), prune boilerplate,
//! locate the content area, classify, detect sections, extract and assign
//! images, normalize transcripts, dedup, score. Each document is processed
//! independently with no shared mutable state, so callers parallelize by
//! running documents on their own threads against one shared `ProfileSet`.

use dom_query::Document;

use crate::error::{Error, Result};
use crate::profiles::ProfileSet;
use crate::result::ExtractionResult;
use crate::sections::SectionLayout;
use crate::{classifier, dedup, images, metadata, pruning, quality, sections, selector, transcript};

pub(crate) fn extract_document(
    html: &str,
    url: &str,
    profiles: &ProfileSet,
) -> Result<ExtractionResult> {
    if html.trim().is_empty() {
        return Err(Error::InputMalformed("empty document".to_string()));
    }

    let doc = Document::from(html);
    let meta = metadata::extract(&doc, url);

    pruning::prune(&doc);

    let Some(content) = selector::find_main_content(&doc) else {
        return Err(Error::InputMalformed("document has no body".to_string()));
    };
    let body_text = sections::normalize(&content.text());
    if body_text.is_empty() && meta.title.is_none() {
        return Err(Error::InputMalformed(
            "document has no textual content".to_string(),
        ));
    }

    let classification = classifier::classify(
        url,
        meta.title.as_deref().unwrap_or(""),
        &body_text,
        profiles,
    );

    let mut result = ExtractionResult::new(classification.category);
    result.title = meta.title;
    result.subtitle = meta.subtitle;
    if let Some(byline) = meta.byline {
        result.metadata.insert("byline".to_string(), byline);
    }
    if let Some(host) = meta.hostname {
        result.metadata.insert("hostname".to_string(), host);
    }
    result.metadata.insert("source_url".to_string(), url.to_string());
    if result.title.is_none() {
        result.warnings.push("no title found".to_string());
    }

    let positions = sections::document_positions(&content);
    let SectionLayout {
        sections: mut section_list,
        positions: section_positions,
        first_heading_position,
        synthesized,
    } = sections::detect(&content, classification.category, profiles, &positions);
    if synthesized {
        result
            .warnings
            .push("no headings found; synthesized a single section".to_string());
    }

    let extracted = images::extract(&content, &positions);
    let stats = images::assign(
        extracted,
        &mut section_list,
        &section_positions,
        first_heading_position,
        &mut result.header_images,
    );

    transcript::normalize_transcripts(
        &mut section_list,
        classification.category,
        &mut result.warnings,
    );
    dedup::dedup_blocks(&mut section_list);
    result.sections = section_list;

    result.quality_score = quality::score(
        &result,
        &classification,
        stats,
        profiles.expects_images(classification.category),
    );

    tracing::debug!(
        category = %result.category,
        sections = result.sections.len(),
        images = result.image_count(),
        quality = result.quality_score,
        "extraction complete"
    );
    Ok(result)
}
