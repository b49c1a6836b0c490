//! Menu configuration.
//!
//! Explicit settings passed to the components that need them. Defaults match
//! the café deployment; `from_env` lets the binary override a few of them.

use serde::{Deserialize, Serialize};

use crate::pairing::DISPLAY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Name used in the structured-data document
    pub menu_name: String,
    /// ISO currency code for offers
    pub currency: String,
    /// Storage key for the grid/list preference
    pub view_key: String,
    /// Storage key for the filter toggles
    pub filters_key: String,
    /// Pairings shown on the item card
    pub display_pairings: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu_name: "FruitzzUpp Cafe Menu".to_string(),
            currency: "INR".to_string(),
            view_key: "fruitzzUpp:view".to_string(),
            filters_key: "fruitzzUpp:filters".to_string(),
            display_pairings: DISPLAY_LIMIT,
        }
    }
}

impl MenuConfig {
    /// Defaults overridden by `MENU_NAME`, `MENU_CURRENCY` and
    /// `MENU_DISPLAY_PAIRINGS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MenuConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("MENU_NAME") {
            config.menu_name = name;
        }
        if let Some(currency) = lookup("MENU_CURRENCY") {
            config.currency = currency;
        }
        if let Some(raw) = lookup("MENU_DISPLAY_PAIRINGS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.display_pairings = n,
                Err(e) => tracing::warn!(
                    "Ignoring MENU_DISPLAY_PAIRINGS='{}': {}; using {}",
                    raw, e, config.display_pairings
                ),
            }
        }

        config
    }
}
