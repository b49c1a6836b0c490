//! Utility modules for the menu core
//!
//! Shared functionality used by the catalog, filters and pairing:
//! - Keywords: fixed name keyword tables and matching
//! - Classify: calorie estimate and dietary flags
//! - Price: multi-tier price parsing and display
//! - Imagery: item name -> static image

pub mod keywords;
pub mod classify;
pub mod price;
pub mod imagery;

// Re-export commonly used functions
pub use classify::{estimate_calories, is_healthy_item, is_vegetarian_item, richness_multiplier};
pub use price::{format_price, max_price};
pub use imagery::image_for;
