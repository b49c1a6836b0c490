//! schema.org Menu document
//!
//! JSON-LD description of the full catalog for search engines. Always built
//! from the whole catalog, never from a filtered view.

use serde::Serialize;

use crate::config::MenuConfig;
use crate::data::Catalog;

#[derive(Debug, Clone, Serialize)]
pub struct MenuDocument {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "hasMenuSection")]
    pub sections: Vec<MenuSectionDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSectionDoc {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "hasMenuItem")]
    pub items: Vec<MenuItemDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemDoc {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub offers: OfferDoc,
    pub nutrition: NutritionDoc,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDoc {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price_currency: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionDoc {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// e.g. "206 cal"
    pub calories: String,
}

/// Build the document for `catalog`.
pub fn menu_document(catalog: &Catalog, config: &MenuConfig) -> MenuDocument {
    let sections = catalog
        .categories()
        .iter()
        .map(|category| MenuSectionDoc {
            kind: "MenuSection",
            name: category.title.clone(),
            items: category
                .items
                .iter()
                .map(|item| MenuItemDoc {
                    kind: "MenuItem",
                    name: item.name.clone(),
                    offers: OfferDoc {
                        kind: "Offer",
                        price_currency: config.currency.clone(),
                        price: item.price.clone(),
                    },
                    nutrition: NutritionDoc {
                        kind: "NutritionInformation",
                        calories: format!("{} cal", item.kcal),
                    },
                })
                .collect(),
        })
        .collect();

    MenuDocument {
        context: "https://schema.org",
        kind: "Menu",
        name: config.menu_name.clone(),
        sections,
    }
}

/// Serialized JSON-LD, ready for a `<script type="application/ld+json">`.
pub fn menu_json_ld(catalog: &Catalog, config: &MenuConfig) -> serde_json::Result<String> {
    serde_json::to_string(&menu_document(catalog, config))
}
