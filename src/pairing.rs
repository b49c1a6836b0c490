//! Pairing Recommender
//!
//! Suggests dishes that go with a selected item. Every other item in the
//! full catalog is scored with fixed additive rules; the best four with a
//! positive score are returned, ties kept in catalog scan order.
//!
//! ## Scoring rules (all stack)
//! | Selected | Candidate | Points |
//! |----------|-----------|--------|
//! | beverage | food | +3 |
//! | food | beverage | +3 |
//! | dessert | beverage | +2 |
//! | same category | | +1 |
//! | healthy | healthy | +1 |
//! | vegetarian | vegetarian | +1 |
//!
//! Candidates are de-duplicated by image, not by name: the selected item's
//! image seeds the used set, and each scanned candidate claims its image.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::data::{Catalog, MenuItem};
use crate::utils::keywords::{matches_any_lower, BEVERAGE_KEYWORDS, DESSERT_KEYWORDS, FOOD_KEYWORDS};

/// Most suggestions the recommender returns.
pub const PAIRING_LIMIT: usize = 4;

/// How many suggestions the menu card shows.
pub const DISPLAY_LIMIT: usize = 2;

pub const CROSS_COURSE_POINTS: u32 = 3;
pub const DESSERT_DRINK_POINTS: u32 = 2;
pub const SAME_CATEGORY_POINTS: u32 = 1;
pub const SHARED_DIET_POINTS: u32 = 1;

/// Bounded suggestion list.
pub type Pairings<'a> = SmallVec<[&'a MenuItem; PAIRING_LIMIT]>;

/// A candidate with its pairing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPairing<'a> {
    pub item: &'a MenuItem,
    pub score: u32,
}

/// Course keywords an item's name matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CourseProfile {
    beverage: bool,
    food: bool,
    dessert: bool,
}

impl CourseProfile {
    fn of(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self {
            beverage: matches_any_lower(&lower, BEVERAGE_KEYWORDS),
            food: matches_any_lower(&lower, FOOD_KEYWORDS),
            dessert: matches_any_lower(&lower, DESSERT_KEYWORDS),
        }
    }
}

fn pair_score(
    selected: &MenuItem,
    selected_course: CourseProfile,
    candidate: &MenuItem,
    same_category: bool,
) -> u32 {
    let course = CourseProfile::of(&candidate.name);
    let mut score = 0;

    if selected_course.beverage && course.food {
        score += CROSS_COURSE_POINTS;
    }
    if selected_course.food && course.beverage {
        score += CROSS_COURSE_POINTS;
    }
    if selected_course.dessert && course.beverage {
        score += DESSERT_DRINK_POINTS;
    }
    if same_category {
        score += SAME_CATEGORY_POINTS;
    }
    if selected.is_healthy && candidate.is_healthy {
        score += SHARED_DIET_POINTS;
    }
    if selected.is_vegetarian && candidate.is_vegetarian {
        score += SHARED_DIET_POINTS;
    }

    score
}

/// Score every eligible candidate, best first.
///
/// Skips items named like `selected` and items whose image is already used.
/// A category counts as the selected item's own when it lists an item with
/// the selected name. Zero scores are dropped; the sort is stable so ties
/// keep scan order.
pub fn score_candidates<'a>(selected: &MenuItem, catalog: &'a Catalog) -> Vec<ScoredPairing<'a>> {
    let selected_course = CourseProfile::of(&selected.name);

    let mut used_images: FxHashSet<&str> = FxHashSet::default();
    used_images.insert(selected.image.as_str());

    let mut scored: Vec<ScoredPairing<'a>> = Vec::new();

    for category in catalog.categories() {
        let same_category = category.contains_name(&selected.name);

        for candidate in &category.items {
            if candidate.name == selected.name || used_images.contains(candidate.image.as_str()) {
                continue;
            }
            used_images.insert(candidate.image.as_str());

            let score = pair_score(selected, selected_course, candidate, same_category);
            if score > 0 {
                scored.push(ScoredPairing { item: candidate, score });
            }
        }
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Up to four suggested companions for `selected`, best first.
pub fn suggest_pairings<'a>(selected: &MenuItem, catalog: &'a Catalog) -> Pairings<'a> {
    let pairings: Pairings<'a> = score_candidates(selected, catalog)
        .into_iter()
        .take(PAIRING_LIMIT)
        .map(|p| p.item)
        .collect();

    tracing::debug!("{} pairings for '{}'", pairings.len(), selected.name);
    pairings
}

/// The suggestions the menu card actually shows.
pub fn display_pairings<'a, 'b>(pairings: &'b [&'a MenuItem], limit: usize) -> &'b [&'a MenuItem] {
    &pairings[..pairings.len().min(limit)]
}
