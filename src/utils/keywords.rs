//! Keyword Tables
//!
//! Fixed keyword sets used to classify menu items by name. Matching is a
//! case-insensitive substring test, so "kit" matches "Kit Kat" and "tea"
//! matches "Iced Tea Classic".

// ============================================================================
// Calorie Richness Tiers
// ============================================================================

/// Rich dishes and drinks (multiplier 2.2).
pub static RICH_KEYWORDS: &[&str] = &[
    "brownie", "mocha", "frappe", "shake", "snickers", "kit", "oreo", "falooda",
    "cheese", "butter", "chocolate", "affogato", "pasta", "pizza", "burger", "wrap",
    "nugget", "loaded", "bbq", "pepperoni", "donut", "fig", "badam", "mixed dry fruit",
];

/// Medium dishes and drinks (multiplier 1.6).
pub static MEDIUM_KEYWORDS: &[&str] = &[
    "latte", "cappuccino", "mayo", "sandwich", "guava", "avocado", "mango", "dates",
    "mocktail", "special", "peri peri", "tikka", "club", "king", "zinger", "exea",
];

/// Light dishes and drinks (multiplier 0.8).
pub static LIGHT_KEYWORDS: &[&str] = &[
    "tea", "espresso", "americano", "lemon", "mint", "water", "tender", "salad",
    "fries", "egg", "chicken strips", "fish finger",
];

// ============================================================================
// Dietary Keywords
// ============================================================================

pub static HEALTHY_KEYWORDS: &[&str] = &[
    "salad", "fruit", "tea", "green tea", "herbal", "ginger", "mint", "lemon",
    "hibiscus", "tulassi", "carrot", "water melon", "pineapple", "grape", "apple",
    "orange", "tender coconut", "fig", "badam", "mixed dry fruit", "litchi",
    "blue berry", "black berry", "strawberry", "passion fruit", "guava", "chikku",
    "dragon", "annar",
];

pub static NON_VEGETARIAN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "egg", "crab", "prawns", "fish", "meat", "burger", "nuggets",
    "strips", "mayo",
];

pub static VEGETARIAN_KEYWORDS: &[&str] = &[
    "veg", "vegetarian", "salad", "fruit", "tea", "coffee", "juice", "shake",
    "mocktail", "falooda", "brownie", "ice cream", "donut", "paneer", "tikka",
    "mashroom", "margarita",
];

/// Names the "favourites" filter admits regardless of calories.
pub static FAVOURITE_KEYWORDS: &[&str] = &[
    "special", "classic", "king", "jumbo", "loaded", "sizzler",
];

// ============================================================================
// Pairing Keywords
// ============================================================================

pub static BEVERAGE_KEYWORDS: &[&str] = &[
    "coffee", "tea", "latte", "cappuccino", "espresso", "americano", "mocha",
    "cortado", "affogato", "frappe", "shake", "juice", "mojito", "café", "cafe",
    "hot chocolate", "caramello", "boost", "tender coconut", "lemon",
];

pub static FOOD_KEYWORDS: &[&str] = &[
    "burger", "sandwich", "wrap", "pizza", "fries", "nugget", "strips", "salad",
    "egg", "fish", "chicken", "beef", "crab", "prawns", "paneer", "omelette", "bowl",
];

pub static DESSERT_KEYWORDS: &[&str] = &[
    "falooda", "donut", "brownie", "ice cream", "black magic", "pista",
];

/// True when the lower-cased `name` contains any keyword.
///
/// Keywords are stored lower-case; `name` is lower-cased here.
pub fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let lower = name.to_lowercase();
    matches_any_lower(&lower, keywords)
}

/// Same as [`matches_any`] for a name that is already lower-case.
pub fn matches_any_lower(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(matches_any("BBQ Chicken Pizza", RICH_KEYWORDS));
        assert!(matches_any("Snickers / Kit Kat / Oreo", RICH_KEYWORDS));
        assert!(!matches_any("Green Salad", RICH_KEYWORDS));
    }

    #[test]
    fn test_substring_semantics() {
        // "tea" inside "steam" counts
        assert!(matches_any("Steam Salad", LIGHT_KEYWORDS));
        assert!(matches_any("Café Mocha", BEVERAGE_KEYWORDS));
    }

    #[test]
    fn test_keyword_tables_are_lowercase() {
        let tables: [&[&str]; 10] = [
            RICH_KEYWORDS, MEDIUM_KEYWORDS, LIGHT_KEYWORDS, HEALTHY_KEYWORDS,
            NON_VEGETARIAN_KEYWORDS, VEGETARIAN_KEYWORDS, FAVOURITE_KEYWORDS,
            BEVERAGE_KEYWORDS, FOOD_KEYWORDS, DESSERT_KEYWORDS,
        ];
        for table in tables {
            for k in table {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }
}
