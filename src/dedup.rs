//! Cross-section block deduplication.
//!
//! Magazine layouts repeat text in teasers, pull quotes, and syndicated
//! sidebars; when the boundary detector captures both copies the result
//! would index the same sentence twice. A single document-wide scan keeps
//! the first occurrence of each normalized block and drops the rest.

use std::collections::HashSet;

use crate::result::Section;
use crate::sections::normalize;

/// Remove repeated body blocks across all sections, in document order.
///
/// The key is the case-folded, whitespace-collapsed block text, so copies
/// differing only in casing or formatting still collide. Running the pass
/// twice changes nothing.
pub fn dedup_blocks(sections: &mut [Section]) {
    let mut seen: HashSet<String> = HashSet::new();
    for section in sections.iter_mut() {
        section
            .body_blocks
            .retain(|block| seen.insert(normalize(block).to_lowercase()));
    }
}
