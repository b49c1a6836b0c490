//! Catalog Data Model
//!
//! Menu items, categories and the catalog that holds them. Items are
//! immutable once built; their calorie estimate and dietary flags are
//! derived by the attribute classifier at construction time.

use serde::{Deserialize, Serialize};

use crate::utils::classify::{estimate_calories, is_healthy_item, is_vegetarian_item};
use crate::utils::imagery::image_for;

/// Category id that is listed first but kept out of the navigation bar.
pub const RECOMMENDED_ID: &str = "recommended";

/// A single dish or drink.
///
/// `name` is unique within its category only; the same dish may appear in
/// several categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    /// Display price, possibly several tiers: "180 / 100"
    pub price: String,
    pub kcal: u32,
    pub image: String,
    pub is_healthy: bool,
    pub is_vegetarian: bool,
}

impl MenuItem {
    /// Build an item, deriving kcal, image and dietary flags from the name
    /// and price.
    pub fn new(name: &str, price: &str) -> Self {
        let kcal = estimate_calories(name, price);
        Self {
            name: name.to_string(),
            price: price.to_string(),
            kcal,
            image: image_for(name).to_string(),
            is_healthy: is_healthy_item(name, kcal),
            is_vegetarian: is_vegetarian_item(name),
        }
    }

    /// Build an item with every attribute given explicitly.
    pub fn with_attributes(
        name: &str,
        price: &str,
        kcal: u32,
        image: &str,
        is_healthy: bool,
        is_vegetarian: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            kcal,
            image: image.to_string(),
            is_healthy,
            is_vegetarian,
        }
    }
}

/// A titled, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Stable slug used for anchors and lookups
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(id: &str, title: &str, items: Vec<MenuItem>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            items,
        }
    }

    /// True if this category lists an item with the given name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }
}

/// Ordered categories of the menu. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Every item in scan order: category order, then item order.
    pub fn items(&self) -> impl Iterator<Item = (&MenuCategory, &MenuItem)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |i| (c, i)))
    }

    /// Number of item entries, counting repeats across categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// First item with this name, in scan order.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.items().map(|(_, i)| i).find(|i| i.name == name)
    }

    /// `(id, title)` for the navigation bar: every category except
    /// "recommended", in catalog order.
    pub fn navigation(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .filter(|c| c.id != RECOMMENDED_ID)
            .map(|c| (c.id.as_str(), c.title.as_str()))
            .collect()
    }
}
