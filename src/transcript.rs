//! Interview transcript normalization.
//!
//! Magazine interviews arrive as loosely formatted prose where speaker
//! changes are marked by abbreviations (`CC`, `KS`), full names, or the
//! outlet name at the start of a segment. This pass re-segments such
//! sections into ordered speaker turns. It only activates for categories
//! that actually publish interviews, and it degrades to plain prose
//! whenever it cannot identify at least two distinct speakers and an
//! actual question among the anchored segments.

use std::collections::HashSet;

use crate::patterns::SPEAKER_ANCHOR;
use crate::profiles::Category;
use crate::result::{QaTurn, Section, SectionKind};
use crate::sections::normalize;

/// Minimum distinct speakers for a section to count as an interview.
const MIN_DISTINCT_SPEAKERS: usize = 2;

/// Re-segment interview sections into speaker turns, in place.
///
/// Sections that convert become `SectionKind::Qa` with their blocks moved
/// into `qa_turns`; text preceding the first speaker anchor stays behind
/// as an intro block. Sections with speaker anchors but fewer than two
/// distinct speakers are left untouched and a warning is recorded.
pub fn normalize_transcripts(
    sections: &mut [Section],
    category: Category,
    warnings: &mut Vec<String>,
) {
    if !matches!(category, Category::Editorial | Category::Lifestyle) {
        return;
    }

    for section in sections.iter_mut() {
        if section.kind != SectionKind::Prose || section.body_blocks.is_empty() {
            continue;
        }

        // Anchors only bind at segment starts, so blocks are joined on
        // newlines to preserve the boundaries the pattern keys off.
        let text = section.body_blocks.join("\n");
        let anchors: Vec<_> = SPEAKER_ANCHOR.captures_iter(&text).collect();
        if anchors.is_empty() {
            continue;
        }

        let distinct: HashSet<&str> = anchors
            .iter()
            .filter_map(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().trim())
            .collect();
        if distinct.len() < MIN_DISTINCT_SPEAKERS {
            let label = section.heading.as_deref().unwrap_or("(untitled)");
            tracing::warn!(section = label, "speaker anchors without a second speaker");
            warnings.push(format!(
                "transcript: only one distinct speaker in section '{label}', kept as prose"
            ));
            continue;
        }

        let mut turns = Vec::with_capacity(anchors.len());
        for (i, caps) in anchors.iter().enumerate() {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let speaker = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let end = anchors
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());
            let utterance = normalize(&text[whole.end..end]);
            if !utterance.is_empty() {
                turns.push(QaTurn { speaker, utterance });
            }
        }
        if turns.is_empty() {
            continue;
        }

        // An interview has questions. Anchored text without a single one
        // is attributed prose (pull quotes, reported speech); converting
        // it would corrupt the section rather than normalize it.
        if !turns.iter().any(|t| t.utterance.contains('?')) {
            let label = section.heading.as_deref().unwrap_or("(untitled)");
            tracing::warn!(section = label, "speaker anchors without an interview question");
            warnings.push(format!(
                "transcript: no interview question in section '{label}', kept as prose"
            ));
            continue;
        }

        // Keep any introduction that ran before the first speaker.
        let intro_end = anchors
            .first()
            .and_then(|c| c.get(0))
            .map_or(0, |m| m.start());
        let intro = normalize(&text[..intro_end]);

        section.kind = SectionKind::Qa;
        section.qa_turns = turns;
        section.body_blocks = if intro.is_empty() { Vec::new() } else { vec![intro] };
        tracing::debug!(
            turns = section.qa_turns.len(),
            "normalized interview section"
        );
    }
}
