//! Café Menu Table
//!
//! The café's menu, embedded as literal `(name, price)` rows per category.
//! "Recommended" repeats dishes that also appear in their own category.

use crate::data::{Catalog, MenuCategory, MenuItem, RECOMMENDED_ID};

/// One category of the embedded menu.
pub struct CategoryRows {
    pub id: &'static str,
    pub title: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
}

// ============================================================================
// EMBEDDED MENU
// ============================================================================

pub static MENU_TABLE: &[CategoryRows] = &[
    CategoryRows {
        id: RECOMMENDED_ID,
        title: "Recommended",
        rows: &[
            ("Classic Chicken Burger", "130"),
            ("Cappuccino", "100"),
            ("BBQ Chicken Pizza", "250"),
            ("Vanilla Shake", "120"),
            ("Chicken Mayo Sandwich", "90"),
            ("Special Falooda", "170"),
            ("Coffee Frappe (Cold Coffee)", "130"),
            ("Loaded Fries - L/M", "180 / 100"),
        ],
    },
    CategoryRows {
        id: "hot-beverages",
        title: "Hot beverages",
        rows: &[
            ("Espresso (Single / Double)", "80 / 100"),
            ("Cafe Americano", "70 / 100"),
            ("Cappuccino", "100"),
            ("Café Late", "100"),
            ("Cortado", "130"),
            ("Cappuccino (vanilla/caramel/hazelnut)", "140"),
            ("Café Mocha", "120"),
            ("Café Affogato", "130"),
            ("Spanish Café Latte", "120"),
            ("Classic Coffee", "50"),
            ("Hot Chocolate", "100"),
            ("Hot Butter Scotch", "100"),
            ("Caramello Hot", "100"),
        ],
    },
    CategoryRows {
        id: "tea",
        title: "Tea",
        rows: &[
            ("Black Tea", "40"),
            ("Ginger Tea", "50"),
            ("Honey Ginger Tea", "70"),
            ("Mint Tea", "50"),
            ("Lemon Tea", "50"),
            ("Hibiscus Tea", "50"),
            ("Masala Tea", "50"),
            ("Tulassi Tea", "50"),
            ("Green Tea", "50"),
        ],
    },
    CategoryRows {
        id: "burger",
        title: "Burger",
        rows: &[
            ("Classic Chicken Burger", "130"),
            ("Beef Burger", "160"),
            ("King Burger - Chicken / Beef", "180 / 200"),
            ("Zinger Burger Chicken", "150"),
            ("Mashroom Burger", "140"),
            ("Exea Burger", "250 / 450"),
        ],
    },
    CategoryRows {
        id: "sandwich",
        title: "Sandwich",
        rows: &[
            ("Grill Sandwich Veg / Egg / Chicken", "90 / 100 / 110"),
            ("Club Sandwich Veg / Egg / Chicken", "125 / 130 / 170"),
            ("Paneer Tikka Sandwich", "160"),
            ("Chicken Mayo Sandwich", "90"),
            ("Chicken Mayo Sandwich with Cheese", "100"),
            ("Egg Delight", "90"),
        ],
    },
    CategoryRows {
        id: "wrap",
        title: "Wrap",
        rows: &[
            ("Chicken Wrap", "110"),
            ("Peri Peri Wrap", "130"),
            ("Egg Wrap", "100"),
        ],
    },
    CategoryRows {
        id: "snacks",
        title: "Snacks",
        rows: &[
            ("French Fries - L/M", "150 / 80"),
            ("Loaded Fries - L/M", "180 / 100"),
            ("Cheese Fries - L/M", "150 / 100"),
            ("Peri Peri Fries - L/M", "160 / 120"),
            ("Chicken Cheese Ball", "110"),
            ("Chicken Nuggets", "130"),
            ("Crab Nuggets", "150"),
            ("Prawns Nuggets", "160"),
            ("Fish Finger", "140"),
            ("Egg (Boiled / Bulls Eye / Omelette)", "20 / 30 / 50"),
            ("Chicken Strips", "150"),
            ("Chicken Strips Honey", "160"),
            ("Chicken Strips Spicy", "140"),
        ],
    },
    CategoryRows {
        id: "salads",
        title: "Salads",
        rows: &[
            ("Green Salad", "120"),
            ("Steam Salad", "160"),
            ("Mayo Salad", "190"),
            ("Fruit Bowl - L/M", "150 / 100"),
        ],
    },
    CategoryRows {
        id: "pizza",
        title: "Pizza",
        rows: &[
            ("BBQ Chicken Pizza", "250"),
            ("Chicken Pepperoni Pizza", "265"),
            ("Mashroom Pizza", "245"),
            ("Margarita Pizza Veg / Chicken", "120 / 139"),
        ],
    },
    CategoryRows {
        id: "ice-cream",
        title: "Ice cream",
        rows: &[
            ("Vanilla", "50"),
            ("Butter Scotch / Strawberry / Mango / Chocolate", "60"),
        ],
    },
    CategoryRows {
        id: "cold-beverages",
        title: "Cold beverages",
        rows: &[
            ("Coffee Frappe (Cold Coffee)", "130"),
            ("Vanilla Frappe", "130"),
            ("Caramel Frappe", "150"),
            ("Hazelnut Frappe", "150"),
            ("Iced Spanish Café Latte", "120"),
            ("Iced Americano", "100"),
            ("Cold Boost Coffee", "90"),
            ("Iced Tea Classic", "90"),
        ],
    },
    CategoryRows {
        id: "juices-shakes",
        title: "Juices & shakes",
        rows: &[
            ("ABC / CAP", "120"),
            ("Carrot", "100"),
            ("Carrot Ginger", "110"),
            ("Water Melon", "90"),
            ("Pineapple", "90"),
            ("Grape", "80"),
            ("Apple", "100"),
            ("Annar", "100"),
            ("Mango", "110"),
            ("Guava", "90"),
            ("Avocado", "110"),
            ("Chikku", "110"),
            ("Dragon", "110"),
            ("Orange", "90"),
            ("Tender Coconut", "110"),
            ("Tender Coconut Chikku", "130"),
            ("Tender Coconut Mango", "130"),
            ("Tender Coconut Grape", "130"),
            ("Tender Coconut Cashew", "150"),
            ("Dates", "120"),
            ("Dates Mango", "130"),
            ("Badam Shake", "140"),
            ("Mixed Dry Fruit Shake", "160"),
            ("Fig Shake", "160"),
            ("Litchi Shake", "140"),
            ("Blue Berry Shake", "150"),
            ("Black Berry Shake", "150"),
            ("Strawberry Shake", "140"),
            ("Butter Scotch Shake", "140"),
            ("Vanilla Shake", "120"),
            ("Chocolate Shake", "140"),
            ("Caramel White", "160"),
            ("Coffee Blast", "160"),
            ("Snickers / Kit Kat / Oreo / Dark Fantasy", "140"),
            ("Brownie Shake", "150"),
            ("Sharjah Shake", "140"),
        ],
    },
    CategoryRows {
        id: "mojitos",
        title: "Mojitos",
        rows: &[
            ("Passion Fruit", "120"),
            ("Electric Lemon", "120"),
            ("Apple Kiwi", "120"),
            ("Green Apple", "120"),
            ("Litchi", "120"),
            ("Blueberry / Strawberry / Black Currant", "120"),
            ("Guava", "120"),
            ("Guava Salt", "130"),
            ("Spicy", "130"),
            ("Bubble Gum", "130"),
            ("Chikku", "130"),
            ("Water Melon", "120"),
            ("Tender Coconut", "130"),
            ("Butter Scotch", "130"),
        ],
    },
    CategoryRows {
        id: "desserts",
        title: "Desserts",
        rows: &[
            ("Special Falooda", "170"),
            ("Butter Scotch Falooda", "140"),
            ("Fruits Salad with Ice Cream", "120"),
            ("Chocolate Donut with Ice Cream", "120"),
            ("Strawberry Donut with Ice Cream", "110"),
            ("Vanilla Donut with Ice Cream", "100"),
            ("Pista Donut with Ice Cream", "150"),
            ("Black Magic (Brownie)", "150"),
        ],
    },
];

impl Catalog {
    /// Build the café's catalog from the embedded table.
    pub fn cafe_menu() -> Self {
        let categories: Vec<MenuCategory> = MENU_TABLE
            .iter()
            .map(|c| {
                let items = c
                    .rows
                    .iter()
                    .map(|(name, price)| MenuItem::new(name, price))
                    .collect();
                MenuCategory::new(c.id, c.title, items)
            })
            .collect();

        let catalog = Catalog::new(categories);
        tracing::info!(
            "Built café catalog ({} categories, {} items)",
            catalog.categories().len(),
            catalog.item_count()
        );
        catalog
    }
}
