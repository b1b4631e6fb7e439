//! Academy Redirects Worker
//!
//! Batch job run once per build/deploy cycle. Fetches content-asset and
//! alias data from the academy API and writes the redirect tables the web
//! server's routing layer reads at request time:
//! - `public/redirects-from-api.json`
//! - `public/alias-redirects.json`
//!
//! Individual fetch failures degrade to empty collections; anything that
//! escapes the generator (serialization, file writes) exits nonzero.

use academy_redirects::RedirectGenerator;
use academy_shared::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    info!("Starting redirects worker");

    let config = AppConfig::from_env();
    info!(
        api_host = %config.api_host,
        academy = %config.academy,
        white_label = config.white_label,
        "Configuration loaded"
    );

    let summary = RedirectGenerator::new(config).run().await?;

    if summary.skipped {
        info!("Run skipped (white-label academy)");
    } else {
        info!(
            asset_redirects = summary.asset_redirects,
            alias_redirects = summary.alias_redirects,
            "Run complete"
        );
    }

    Ok(())
}
