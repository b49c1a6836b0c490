// Writes the schema.org Menu JSON-LD for the café's built-in catalog.
//
// Usage: cargo run --bin generate_menu_jsonld [-- OUTPUT_PATH]
// Without a path the document goes to stdout.

use anyhow::{Context, Result};
use menu_scorer_rust::{menu_json_ld, suggest_pairings, Catalog, MenuConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = MenuConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  MENU_NAME: {}", config.menu_name);
    tracing::info!("  MENU_CURRENCY: {}", config.currency);

    let catalog = Catalog::cafe_menu();

    let healthy = catalog.items().filter(|(_, i)| i.is_healthy).count();
    let vegetarian = catalog.items().filter(|(_, i)| i.is_vegetarian).count();
    tracing::info!(
        "{} items: {} healthy, {} vegetarian",
        catalog.item_count(),
        healthy,
        vegetarian
    );

    let without_pairings = catalog
        .items()
        .filter(|(_, i)| suggest_pairings(i, &catalog).is_empty())
        .count();
    tracing::info!("{} items have no pairing suggestions", without_pairings);

    let json = menu_json_ld(&catalog, &config).context("Failed to serialize menu document")?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write menu document: {}", path))?;
            tracing::info!("Wrote {} bytes to {}", json.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
