//! Image Routing
//!
//! Maps an item name to one of a small set of static photos. Rules are
//! checked in table order and the first rule with a matching keyword wins.

const ESPRESSO: &str = "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?w=600&h=400&fit=crop";
const CAPPUCCINO: &str = "https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=600&h=400&fit=crop";
const MOCHA: &str = "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=600&h=400&fit=crop";
const HOT_CHOCOLATE: &str = "https://images.unsplash.com/photo-1542990253-0d0f5be5f0ed?w=600&h=400&fit=crop";
const CLASSIC_COFFEE: &str = "https://images.unsplash.com/photo-1501339847302-ac426a4a7cce?w=600&h=400&fit=crop";
const TEA: &str = "https://images.unsplash.com/photo-1544787219-7f47ccb76574?w=600&h=400&fit=crop";
const BURGER: &str = "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=600&h=400&fit=crop";
const SANDWICH: &str = "https://images.unsplash.com/photo-1528735602786-4692e6e44e94?w=600&h=400&fit=crop";
const WRAP: &str = "https://images.unsplash.com/photo-1626700051175-6818013e1d4f?w=600&h=400&fit=crop";
const FRIES: &str = "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=600&h=400&fit=crop";
const FRIED_BITES: &str = "https://images.unsplash.com/photo-1562967914-608f82629710?w=600&h=400&fit=crop";
const EGG: &str = "https://images.unsplash.com/photo-1482049016688-2d3e1b311543?w=600&h=400&fit=crop";
const SALAD: &str = "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=600&h=400&fit=crop";
const PIZZA: &str = "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=600&h=400&fit=crop";
const DESSERT: &str = "https://images.unsplash.com/photo-1563805042-7684c019e1cb?w=600&h=400&fit=crop";
const ICED_COFFEE: &str = "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=600&h=400&fit=crop";
const JUICE: &str = "https://images.unsplash.com/photo-1621506289937-a8e4df240d0b?w=600&h=400&fit=crop";
const SHAKE: &str = "https://images.unsplash.com/photo-1553530666-ba11a7da3888?w=600&h=400&fit=crop";

/// Image shown when no rule matches.
pub const DEFAULT_IMAGE: &str = PIZZA;

/// A single routing rule: any keyword -> image.
#[derive(Debug, Clone, Copy)]
pub struct ImageRule {
    pub keywords: &'static [&'static str],
    pub image: &'static str,
}

// ============================================================================
// ROUTING TABLE (order matters)
// ============================================================================

static IMAGE_RULES: &[ImageRule] = &[
    // Hot beverages
    ImageRule { keywords: &["espresso", "americano"], image: ESPRESSO },
    ImageRule { keywords: &["cappuccino", "latte"], image: CAPPUCCINO },
    ImageRule { keywords: &["mocha", "affogato", "cortado"], image: MOCHA },
    ImageRule { keywords: &["hot chocolate", "butter scotch", "caramello"], image: HOT_CHOCOLATE },
    ImageRule { keywords: &["classic coffee"], image: CLASSIC_COFFEE },
    ImageRule { keywords: &["spanish"], image: CAPPUCCINO },
    // Tea
    ImageRule {
        keywords: &["tea", "ginger", "mint", "lemon", "hibiscus", "masala", "tulassi", "green", "black", "honey"],
        image: TEA,
    },
    // Burgers
    ImageRule { keywords: &["burger", "beef", "chicken", "zinger", "king", "exea"], image: BURGER },
    ImageRule { keywords: &["mashroom"], image: BURGER },
    // Sandwiches
    ImageRule { keywords: &["sandwich", "club", "grill", "paneer", "tikka", "mayo", "delight"], image: SANDWICH },
    // Wraps
    ImageRule { keywords: &["wrap", "peri peri"], image: WRAP },
    // Snacks
    ImageRule { keywords: &["fries", "loaded", "cheese"], image: FRIES },
    ImageRule { keywords: &["nuggets", "chicken strips", "fish finger"], image: FRIED_BITES },
    ImageRule { keywords: &["egg", "boiled", "bulls eye", "omelette"], image: EGG },
    ImageRule { keywords: &["crab", "prawns"], image: FRIED_BITES },
    // Salads
    ImageRule { keywords: &["salad", "bowl"], image: SALAD },
    ImageRule { keywords: &["steam"], image: SALAD },
    // Pizza
    ImageRule { keywords: &["pizza", "bbq", "pepperoni", "margarita"], image: PIZZA },
    // Ice cream
    ImageRule { keywords: &["ice cream", "vanilla", "strawberry", "mango", "chocolate"], image: DESSERT },
    // Cold beverages
    ImageRule { keywords: &["frappe", "cold coffee", "iced", "boost"], image: ICED_COFFEE },
    // Juices and shakes
    ImageRule {
        keywords: &[
            "juice", "shake", "carrot", "water melon", "pineapple", "grape", "apple", "annar",
            "guava", "avocado", "chikku", "dragon", "orange", "abc", "cap",
        ],
        image: JUICE,
    },
    ImageRule { keywords: &["tender coconut"], image: WRAP },
    ImageRule {
        keywords: &[
            "dates", "badam", "mixed dry fruit", "fig", "litchi", "berry", "caramel",
            "coffee blast", "snickers", "kit kat", "oreo", "dark fantasy", "brownie", "sharjah",
        ],
        image: SHAKE,
    },
    // Mojitos
    ImageRule {
        keywords: &["mojito", "passion fruit", "electric", "kiwi", "black currant", "bubble gum", "spicy", "salt"],
        image: JUICE,
    },
    // Desserts
    ImageRule { keywords: &["falooda", "donut", "black magic", "pista"], image: DESSERT },
];

/// Image URL for an item name.
pub fn image_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    IMAGE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.image)
        .unwrap_or(DEFAULT_IMAGE)
}
