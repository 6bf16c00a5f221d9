//! Book catalog - prints the configured catalog file

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_catalog::{config::AppConfig, Catalog, LoadOutcome};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_catalog={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting book catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = Catalog::with_policy(config.catalog.id_policy);
    let outcome = catalog
        .load(&config.catalog.path)
        .with_context(|| format!("Failed to load {}", config.catalog.path.display()))?;

    if outcome == LoadOutcome::Malformed {
        tracing::warn!("Showing an empty catalog");
    }

    catalog.display();

    Ok(())
}
