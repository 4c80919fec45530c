//! Category profiles: the immutable configuration table driving
//! classification and section detection.
//!
//! One `CategoryProfile` per content type, carrying the weighted keyword
//! signals for the classifier plus the per-category knobs the section
//! detector reads (`max_items_per_section`, `min_block_length`). Profiles
//! are built once and injected; nothing mutates them at runtime, so a
//! `ProfileSet` can be shared across worker threads freely.

use serde::{Deserialize, Serialize};

/// Content category of a magazine article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Recipe,
    Travel,
    Tech,
    Editorial,
    Member,
    Shopping,
    Lifestyle,
    /// Fallback when no profile meets its score threshold.
    General,
}

impl Category {
    /// Stable lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Recipe => "recipe",
            Category::Travel => "travel",
            Category::Tech => "tech",
            Category::Editorial => "editorial",
            Category::Member => "member",
            Category::Shopping => "shopping",
            Category::Lifestyle => "lifestyle",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword signals and tunable thresholds for one content type.
///
/// Keywords are lowercase tokens matched by substring against the
/// lowercased URL, title, and body text respectively.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub category: Category,
    pub url_keywords: Vec<&'static str>,
    pub title_keywords: Vec<&'static str>,
    pub content_keywords: Vec<&'static str>,
    /// Minimum weighted score this profile must reach to win classification.
    pub required_score: u32,
    /// Body blocks accumulated per section before the detector stops.
    pub max_items_per_section: usize,
    /// Blocks shorter than this (chars) are discarded as noise, unless they
    /// end in continuation punctuation.
    pub min_block_length: usize,
    /// Whether a complete extraction for this category should carry at
    /// least one image (feeds the completeness sub-score).
    pub expects_images: bool,
}

/// Keyword match weights, shared by all profiles.
pub const URL_KEYWORD_WEIGHT: u32 = 20;
pub const TITLE_KEYWORD_WEIGHT: u32 = 10;
pub const CONTENT_KEYWORD_WEIGHT: u32 = 5;

/// Default per-section accumulation cap and minimum block length.
pub const DEFAULT_MAX_ITEMS_PER_SECTION: usize = 3;
pub const DEFAULT_MIN_BLOCK_LENGTH: usize = 30;

/// Travel articles run long lists of short place blurbs, so the travel
/// profile loosens both knobs.
pub const TRAVEL_MAX_ITEMS_PER_SECTION: usize = 8;
pub const TRAVEL_MIN_BLOCK_LENGTH: usize = 15;

impl CategoryProfile {
    fn new(
        category: Category,
        url_keywords: Vec<&'static str>,
        title_keywords: Vec<&'static str>,
        content_keywords: Vec<&'static str>,
        required_score: u32,
    ) -> Self {
        Self {
            category,
            url_keywords,
            title_keywords,
            content_keywords,
            required_score,
            max_items_per_section: DEFAULT_MAX_ITEMS_PER_SECTION,
            min_block_length: DEFAULT_MIN_BLOCK_LENGTH,
            expects_images: true,
        }
    }
}

/// The full set of category profiles consulted during classification.
///
/// `ProfileSet::default()` carries the built-in table; tests can construct
/// alternate sets to exercise thresholds without global state.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    profiles: Vec<CategoryProfile>,
}

impl ProfileSet {
    /// Build a profile set from explicit profiles.
    #[must_use]
    pub fn new(profiles: Vec<CategoryProfile>) -> Self {
        Self { profiles }
    }

    /// All profiles, in declaration order.
    #[must_use]
    pub fn profiles(&self) -> &[CategoryProfile] {
        &self.profiles
    }

    /// Look up the profile for a category. `General` has no profile.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryProfile> {
        self.profiles.iter().find(|p| p.category == category)
    }

    /// Section-detector knobs for a category, falling back to the defaults
    /// for `General` and any category without a profile.
    #[must_use]
    pub fn section_limits(&self, category: Category) -> (usize, usize) {
        self.get(category).map_or(
            (DEFAULT_MAX_ITEMS_PER_SECTION, DEFAULT_MIN_BLOCK_LENGTH),
            |p| (p.max_items_per_section, p.min_block_length),
        )
    }

    /// Whether extractions of this category are expected to carry images.
    #[must_use]
    pub fn expects_images(&self, category: Category) -> bool {
        self.get(category).is_none_or(|p| p.expects_images)
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        let mut travel = CategoryProfile::new(
            Category::Travel,
            vec!["travel", "destination", "cities", "tale-of"],
            vec!["travel", "cities", "destination"],
            vec!["destination", "attractions", "visit", "explore", "hotel"],
            3,
        );
        travel.max_items_per_section = TRAVEL_MAX_ITEMS_PER_SECTION;
        travel.min_block_length = TRAVEL_MIN_BLOCK_LENGTH;

        let mut member = CategoryProfile::new(
            Category::Member,
            vec!["member-poll", "member-comments", "community"],
            vec!["member", "poll", "comments"],
            vec!["member", "poll", "survey", "comments", "community"],
            2,
        );
        // Poll/comment roundups are text-only pages.
        member.expects_images = false;

        Self::new(vec![
            CategoryProfile::new(
                Category::Recipe,
                vec!["recipe", "food", "cooking", "kitchen"],
                vec!["recipe", "jam", "crumble", "roll-ups"],
                vec!["ingredients", "directions", "tablespoon", "cup", "cooking"],
                3,
            ),
            travel,
            CategoryProfile::new(
                Category::Tech,
                vec!["tech", "power-up", "technology", "gadget"],
                vec!["tech", "power", "technology"],
                vec!["technology", "device", "features", "review", "smart"],
                3,
            ),
            CategoryProfile::new(
                Category::Editorial,
                vec!["publisher", "note", "editorial", "opinion"],
                vec!["publisher", "note", "editorial"],
                vec!["publisher", "editorial", "opinion", "message", "members"],
                2,
            ),
            member,
            CategoryProfile::new(
                Category::Shopping,
                vec!["treasure-hunt", "buying-smart", "product", "deals"],
                vec!["treasure", "buying", "smart"],
                vec!["product", "buying", "warehouse", "merchandise", "item"],
                2,
            ),
            CategoryProfile::new(
                Category::Lifestyle,
                vec!["lifestyle", "family", "wellness", "pets", "home", "entertainment"],
                vec!["celebrate", "entertainment", "author", "wellness"],
                vec![
                    "lifestyle",
                    "entertainment",
                    "author",
                    "book",
                    "wellness",
                    "health",
                    "interview",
                ],
                2,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_seven_categories() {
        let set = ProfileSet::default();
        assert_eq!(set.profiles().len(), 7);
        assert!(set.get(Category::Recipe).is_some());
        assert!(set.get(Category::General).is_none());
    }

    #[test]
    fn travel_profile_loosens_section_knobs() {
        let set = ProfileSet::default();
        assert_eq!(
            set.section_limits(Category::Travel),
            (TRAVEL_MAX_ITEMS_PER_SECTION, TRAVEL_MIN_BLOCK_LENGTH)
        );
        assert_eq!(
            set.section_limits(Category::Recipe),
            (DEFAULT_MAX_ITEMS_PER_SECTION, DEFAULT_MIN_BLOCK_LENGTH)
        );
        assert_eq!(
            set.section_limits(Category::General),
            (DEFAULT_MAX_ITEMS_PER_SECTION, DEFAULT_MIN_BLOCK_LENGTH)
        );
    }

    #[test]
    fn member_pages_do_not_expect_images() {
        let set = ProfileSet::default();
        assert!(!set.expects_images(Category::Member));
        assert!(set.expects_images(Category::Lifestyle));
        assert!(set.expects_images(Category::General));
    }

    #[test]
    fn category_display_matches_serialized_form() {
        assert_eq!(Category::Lifestyle.to_string(), "lifestyle");
        let json = serde_json::to_string(&Category::Travel).unwrap();
        assert_eq!(json, "\"travel\"");
    }
}
