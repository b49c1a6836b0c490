//! Menu Integration Tests
//!
//! Runs the filter engine and the pairing recommender over the café's real
//! catalog and over small hand-built catalogs with known scores.

use menu_scorer_rust::filters::{passes_healthy_picks, passes_vegetarian_filter, summarize};
use menu_scorer_rust::utils::classify::{MAX_KCAL, MIN_KCAL};
use menu_scorer_rust::{
    apply_filters, navigate_to_category, score_candidates, suggest_pairings, Catalog, FilterState,
    MemoryStore, MenuCategory, MenuConfig, MenuItem, NavigationOutcome, Preferences,
};

fn item(name: &str, kcal: u32, image: &str) -> MenuItem {
    MenuItem::with_attributes(name, "100", kcal, image, kcal <= 150, true)
}

fn names<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<&'a str> {
    items.into_iter().map(|i| i.name.as_str()).collect()
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_cappuccino_pairs_with_burger() {
    let cappuccino = MenuItem::with_attributes("Cappuccino", "100", 100, "img/cappuccino", true, true);
    let burger = MenuItem::with_attributes("Classic Burger", "130", 300, "img/burger", false, false);
    let catalog = Catalog::new(vec![MenuCategory::new(
        "a",
        "A",
        vec![cappuccino.clone(), burger],
    )]);

    let filtered = apply_filters(&catalog, "", &FilterState::default());
    assert_eq!(filtered, catalog);

    let pairings = suggest_pairings(&cappuccino, &catalog);
    assert_eq!(names(pairings.iter().copied()), vec!["Classic Burger"]);
}

// ============================================================================
// Filter engine over the café menu
// ============================================================================

#[test]
fn test_every_item_kcal_in_range() {
    for (_, i) in Catalog::cafe_menu().items() {
        assert!((MIN_KCAL..=MAX_KCAL).contains(&i.kcal), "{} = {}", i.name, i.kcal);
    }
}

#[test]
fn test_unfiltered_view_equals_catalog() {
    let catalog = Catalog::cafe_menu();
    let filtered = apply_filters(&catalog, "", &FilterState::default());
    assert_eq!(filtered, catalog);
    assert_eq!(summarize(&catalog, &filtered, "", &FilterState::default()), None);
}

#[test]
fn test_no_match_query() {
    let catalog = Catalog::cafe_menu();
    assert!(apply_filters(&catalog, "zzz-no-match", &FilterState::default()).is_empty());
}

#[test]
fn test_calorie_cap_150() {
    let catalog = Catalog::cafe_menu();
    let filters = FilterState { max_calories: Some(150), ..Default::default() };
    let filtered = apply_filters(&catalog, "", &filters);

    assert!(!filtered.is_empty());
    for category in filtered.categories() {
        assert!(!category.items.is_empty());
        for i in &category.items {
            assert!(i.kcal <= 150, "{} = {}", i.name, i.kcal);
        }
    }

    // Nothing low-calorie was lost
    let expected = catalog.items().filter(|(_, i)| i.kcal <= 150).count();
    assert_eq!(filtered.item_count(), expected);
}

#[test]
fn test_healthy_and_vegetarian_conjunction() {
    let catalog = Catalog::cafe_menu();
    let filters = FilterState { healthy_picks: true, vegetarian: true, ..Default::default() };
    let filtered = apply_filters(&catalog, "", &filters);

    assert!(filtered.item_count() > 0);
    for (_, i) in filtered.items() {
        assert!(passes_healthy_picks(i), "{} not a healthy pick", i.name);
        assert!(passes_vegetarian_filter(i), "{} not vegetarian", i.name);
    }
}

#[test]
fn test_filtering_preserves_order() {
    let catalog = Catalog::cafe_menu();
    let filtered = apply_filters(&catalog, "tea", &FilterState::default());

    let order: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
    let mut last = 0;
    for category in filtered.categories() {
        let pos = order.iter().position(|id| *id == category.id).unwrap();
        assert!(pos >= last);
        last = pos;

        let source = catalog.category(&category.id).unwrap();
        let source_names: Vec<&str> = source
            .items
            .iter()
            .filter(|i| i.name.to_lowercase().contains("tea"))
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names(&category.items), source_names);
    }
}

#[test]
fn test_navigation_to_filtered_out_category() {
    let catalog = Catalog::cafe_menu();
    let filtered = apply_filters(&catalog, "pizza", &FilterState::default());

    assert!(navigate_to_category(&filtered, "pizza").is_found());
    assert_eq!(
        navigate_to_category(&filtered, "tea"),
        NavigationOutcome::NotFound { category_id: "tea".to_string() }
    );
}

// ============================================================================
// Pairing recommender
// ============================================================================

#[test]
fn test_pairings_never_repeat_selected() {
    let catalog = Catalog::cafe_menu();
    for (_, selected) in catalog.items() {
        let pairings = suggest_pairings(selected, &catalog);
        assert!(pairings.len() <= 4);
        for p in &pairings {
            assert_ne!(p.name, selected.name);
            assert_ne!(p.image, selected.image);
        }
    }
}

#[test]
fn test_pairings_have_distinct_images() {
    let catalog = Catalog::cafe_menu();
    for (_, selected) in catalog.items() {
        let pairings = suggest_pairings(selected, &catalog);
        for (n, a) in pairings.iter().enumerate() {
            for b in pairings.iter().skip(n + 1) {
                assert_ne!(a.image, b.image);
            }
        }
    }
}

#[test]
fn test_pairings_deterministic() {
    let catalog = Catalog::cafe_menu();
    let selected = catalog.find_item("Cappuccino").unwrap();
    let first = suggest_pairings(selected, &catalog);
    let second = suggest_pairings(selected, &catalog);
    assert_eq!(first, second);
}

#[test]
fn test_scores_sorted_descending() {
    let catalog = Catalog::cafe_menu();
    for (_, selected) in catalog.items() {
        let scored = score_candidates(selected, &catalog);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(scored.iter().all(|s| s.score > 0));
    }
}

#[test]
fn test_hand_computed_scores() {
    // Selected: vegetarian, healthy beverage in "drinks"
    let tea = item("Mint Tea", 60, "img/tea");
    let catalog = Catalog::new(vec![
        MenuCategory::new(
            "drinks",
            "Drinks",
            vec![tea.clone(), item("Orange Juice", 120, "img/juice")],
        ),
        MenuCategory::new(
            "food",
            "Food",
            vec![
                item("Veg Sandwich", 140, "img/sandwich"),
                MenuItem::with_attributes("Beef Wrap", "150", 420, "img/wrap", false, false),
            ],
        ),
    ]);

    let scored: Vec<(&str, u32)> = score_candidates(&tea, &catalog)
        .iter()
        .map(|s| (s.item.name.as_str(), s.score))
        .collect();

    assert_eq!(
        scored,
        vec![
            ("Veg Sandwich", 5), // food 3 + healthy 1 + veg 1
            ("Orange Juice", 3), // category 1 + healthy 1 + veg 1
            ("Beef Wrap", 3),    // food 3
        ]
    );
}

#[test]
fn test_beverage_ranks_food_above_beverage() {
    let latte = item("Latte", 200, "img/latte");
    let catalog = Catalog::new(vec![
        MenuCategory::new("drinks", "Drinks", vec![item("Americano", 200, "img/americano")]),
        MenuCategory::new("food", "Food", vec![item("Chicken Burger", 400, "img/burger")]),
    ]);

    let pairings = suggest_pairings(&latte, &catalog);
    assert_eq!(pairings[0].name, "Chicken Burger");
}

#[test]
fn test_isolated_item_gets_no_pairings() {
    let lone = MenuItem::with_attributes("Gift Card", "500", 850, "img/card", false, false);
    let catalog = Catalog::new(vec![
        MenuCategory::new("misc", "Misc", vec![lone.clone()]),
        MenuCategory::new(
            "food",
            "Food",
            vec![MenuItem::with_attributes("Beef Burger", "160", 308, "img/burger", false, false)],
        ),
    ]);
    assert!(suggest_pairings(&lone, &catalog).is_empty());
}

// ============================================================================
// Preferences feeding the filter engine
// ============================================================================

#[test]
fn test_persisted_filters_round_trip_into_view() {
    let config = MenuConfig::default();
    let catalog = Catalog::cafe_menu();

    let mut prefs = Preferences::new(MemoryStore::new(), &config);
    prefs.save_filters(&FilterState { max_calories: Some(120), ..Default::default() });

    // A later visit reads them back from the same store
    let prefs = Preferences::new(prefs.into_inner(), &config);
    let filters = prefs.load_filters();
    let filtered = apply_filters(&catalog, "", &filters);

    assert!(filtered.items().all(|(_, i)| i.kcal <= 120));
    let summary = summarize(&catalog, &filtered, "", &filters).unwrap();
    assert_eq!(summary.total, catalog.item_count());
    assert_eq!(summary.visible, filtered.item_count());
}
