//! Attribute Classifier
//!
//! Derives the calorie estimate and the dietary flags of a menu item from its
//! name and price string. Evaluated once per item when the catalog is built.

use crate::utils::keywords::*;
use crate::utils::price::max_price;

// ============================================================================
// Calorie Estimate
// ============================================================================

/// Base calories before the richness multiplier.
pub const BASE_KCAL: f64 = 60.0;

/// Calories contributed per unit of price.
pub const KCAL_PER_PRICE_UNIT: f64 = 1.1;

pub const MIN_KCAL: u32 = 40;
pub const MAX_KCAL: u32 = 850;

/// Items at or under this estimate count as healthy.
pub const HEALTHY_KCAL_THRESHOLD: u32 = 150;

/// Richness multiplier from the name.
///
/// Tiers are tested rich -> medium -> light; the first match wins:
/// - rich: ×2.2
/// - medium: ×1.6
/// - light: ×0.8
/// - otherwise: ×1.2
pub fn richness_multiplier(name: &str) -> f64 {
    let lower = name.to_lowercase();
    if matches_any_lower(&lower, RICH_KEYWORDS) {
        2.2
    } else if matches_any_lower(&lower, MEDIUM_KEYWORDS) {
        1.6
    } else if matches_any_lower(&lower, LIGHT_KEYWORDS) {
        0.8
    } else {
        1.2
    }
}

/// Estimate calories for an item.
///
/// kcal = round(60 × richness + max_price × 1.1), clamped to [40, 850].
pub fn estimate_calories(name: &str, price: &str) -> u32 {
    let price_num = max_price(price) as f64;
    let kcal = (BASE_KCAL * richness_multiplier(name) + price_num * KCAL_PER_PRICE_UNIT).round();
    kcal.clamp(MIN_KCAL as f64, MAX_KCAL as f64) as u32
}

// ============================================================================
// Dietary Flags
// ============================================================================

/// Healthy when the name names something light OR the estimate is low.
pub fn is_healthy_item(name: &str, kcal: u32) -> bool {
    matches_any(name, HEALTHY_KEYWORDS) || kcal <= HEALTHY_KCAL_THRESHOLD
}

/// Vegetarian unless the name mentions meat, egg or fish.
///
/// Order: non-veg keyword -> false, veg keyword -> true, otherwise true.
pub fn is_vegetarian_item(name: &str) -> bool {
    let lower = name.to_lowercase();
    if matches_any_lower(&lower, NON_VEGETARIAN_KEYWORDS) {
        return false;
    }
    if matches_any_lower(&lower, VEGETARIAN_KEYWORDS) {
        return true;
    }
    true
}
