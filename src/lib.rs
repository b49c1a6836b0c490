//! Café Menu Scorer
//!
//! Core logic of a browser-rendered café menu:
//! - `utils/`: attribute classifier (calories, healthy, vegetarian) and helpers
//! - `data`: catalog model; `menu_table`: the café's embedded menu
//! - `filters`: text search and filter toggles over the catalog
//! - `pairing`: complementary dish suggestions for a selected item
//! - `preferences`: persisted view mode and filter state
//! - `structured_data`: schema.org Menu JSON-LD
//!
//! Everything here is synchronous and pure over an immutable catalog;
//! rendering, scrolling and image loading belong to the presentation layer.

pub mod utils;
pub mod data;
pub mod menu_table;
pub mod filters;
pub mod pairing;
pub mod preferences;
pub mod structured_data;
pub mod config;

// Re-export commonly used types
pub use config::MenuConfig;
pub use data::{Catalog, MenuCategory, MenuItem};
pub use filters::{apply_filters, is_filter_active, navigate_to_category, FilterState, FilterSummary, NavigationOutcome};
pub use pairing::{display_pairings, score_candidates, suggest_pairings, Pairings, ScoredPairing};
pub use preferences::{MemoryStore, PreferenceError, PreferenceStore, Preferences, ViewMode};
pub use structured_data::{menu_document, menu_json_ld};
