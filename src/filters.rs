//! Filter Engine
//!
//! Narrows the catalog to the items matching a free-text query and the
//! user's filter toggles. Active predicates are AND-ed; category and item
//! order are preserved and categories left without items are dropped.
//!
//! The healthy and vegetarian toggles apply their own rules rather than the
//! item's precomputed `is_healthy` / `is_vegetarian` flags:
//! - healthy picks: kcal <= 150 only
//! - vegetarian: veg keyword OR no non-veg keyword

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::{Catalog, MenuCategory, MenuItem};
use crate::utils::classify::HEALTHY_KCAL_THRESHOLD;
use crate::utils::keywords::{
    matches_any_lower, FAVOURITE_KEYWORDS, NON_VEGETARIAN_KEYWORDS, VEGETARIAN_KEYWORDS,
};

/// Favourites admit anything at or above this estimate.
pub const FAVOURITE_KCAL_THRESHOLD: u32 = 200;

/// User filter toggles, persisted between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Upper calorie bound; `None` means unbounded
    pub max_calories: Option<u32>,
    pub healthy_picks: bool,
    pub vegetarian: bool,
    pub favourites: bool,
}

impl FilterState {
    /// True when any field differs from the defaults.
    pub fn any_enabled(&self) -> bool {
        self.max_calories.is_some() || self.healthy_picks || self.vegetarian || self.favourites
    }

    /// Does `item` pass every enabled toggle?
    pub fn admits(&self, item: &MenuItem) -> bool {
        let lower = item.name.to_lowercase();

        if let Some(max) = self.max_calories {
            if item.kcal > max {
                return false;
            }
        }
        if self.healthy_picks && !passes_healthy_picks(item) {
            return false;
        }
        if self.vegetarian && !passes_vegetarian_lower(&lower) {
            return false;
        }
        if self.favourites && !passes_favourites_lower(&lower, item.kcal) {
            return false;
        }
        true
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Healthy-picks rule: low calorie estimate, nothing else.
pub fn passes_healthy_picks(item: &MenuItem) -> bool {
    item.kcal <= HEALTHY_KCAL_THRESHOLD
}

/// Vegetarian-filter rule: veg keyword OR no non-veg keyword.
pub fn passes_vegetarian_filter(item: &MenuItem) -> bool {
    passes_vegetarian_lower(&item.name.to_lowercase())
}

/// Favourites rule: signature keyword OR a hearty estimate.
pub fn passes_favourites(item: &MenuItem) -> bool {
    passes_favourites_lower(&item.name.to_lowercase(), item.kcal)
}

fn passes_vegetarian_lower(lower: &str) -> bool {
    matches_any_lower(lower, VEGETARIAN_KEYWORDS) || !matches_any_lower(lower, NON_VEGETARIAN_KEYWORDS)
}

fn passes_favourites_lower(lower: &str, kcal: u32) -> bool {
    matches_any_lower(lower, FAVOURITE_KEYWORDS) || kcal >= FAVOURITE_KCAL_THRESHOLD
}

/// Query matching: name contains the trimmed query, ignoring case.
/// `needle` must already be trimmed and lower-cased.
fn matches_query(item: &MenuItem, needle: &str) -> bool {
    needle.is_empty() || item.name.to_lowercase().contains(needle)
}

// ============================================================================
// Filtering
// ============================================================================

/// Is any narrowing in effect?
pub fn is_filter_active(query: &str, filters: &FilterState) -> bool {
    !query.trim().is_empty() || filters.any_enabled()
}

/// Apply the query and every enabled toggle to the catalog.
pub fn apply_filters(catalog: &Catalog, query: &str, filters: &FilterState) -> Catalog {
    let needle = query.trim().to_lowercase();

    let categories: Vec<MenuCategory> = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let items: Vec<MenuItem> = category
                .items
                .iter()
                .filter(|item| matches_query(item, &needle) && filters.admits(item))
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(MenuCategory {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    items,
                })
            }
        })
        .collect();

    let filtered = Catalog::new(categories);
    tracing::debug!(
        "Filtered catalog: {} of {} items in {} categories",
        filtered.item_count(),
        catalog.item_count(),
        filtered.categories().len()
    );
    filtered
}

// ============================================================================
// Summary
// ============================================================================

/// "N of M items" banner shown while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub visible: usize,
    pub total: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} items", self.visible, self.total)
    }
}

/// Summary of a filtered view, or `None` when nothing is filtered.
pub fn summarize(
    catalog: &Catalog,
    filtered: &Catalog,
    query: &str,
    filters: &FilterState,
) -> Option<FilterSummary> {
    if !is_filter_active(query, filters) {
        return None;
    }
    Some(FilterSummary {
        visible: filtered.item_count(),
        total: catalog.item_count(),
    })
}

// ============================================================================
// Category Navigation
// ============================================================================

/// Result of jumping to a category in the visible view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum NavigationOutcome {
    /// Category is visible at this position.
    Scrolled { index: usize },
    /// Category has no visible items; show a short "no match" notice.
    NotFound { category_id: String },
}

impl NavigationOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, NavigationOutcome::Scrolled { .. })
    }
}

/// Locate a category among the currently visible ones.
pub fn navigate_to_category(visible: &Catalog, category_id: &str) -> NavigationOutcome {
    match visible.categories().iter().position(|c| c.id == category_id) {
        Some(index) => NavigationOutcome::Scrolled { index },
        None => {
            tracing::debug!("Category '{}' has no visible items", category_id);
            NavigationOutcome::NotFound {
                category_id: category_id.to_string(),
            }
        }
    }
}
