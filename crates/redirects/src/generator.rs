//! Redirect generation orchestration.
//!
//! Runs once per build/deploy cycle: fetches the asset collections and the
//! alias map concurrently, maps them to redirects, and writes the two JSON
//! artifacts. Individual fetch failures degrade to empty collections; only
//! serialization or file-write failures abort the run.

use std::future::Future;
use std::path::Path;

use academy_shared::AppConfig;

use crate::assets::{normalize_difficulties, Asset, AssetType};
use crate::client::ContentClient;
use crate::error::{RedirectError, RedirectResult};
use crate::mapper::{generate_alias_redirects, generate_asset_redirects};

/// File name of the asset-redirect artifact.
pub const ASSET_REDIRECTS_FILE: &str = "redirects-from-api.json";

/// File name of the alias-redirect artifact.
pub const ALIAS_REDIRECTS_FILE: &str = "alias-redirects.json";

/// What a generation run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// True when the run was skipped (white-label deployment).
    pub skipped: bool,
    pub asset_redirects: usize,
    pub alias_redirects: usize,
}

async fn or_empty<T: Default>(
    collection: &'static str,
    fut: impl Future<Output = RedirectResult<T>>,
) -> T {
    match fut.await {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(
                collection = collection,
                error = %err,
                "fetch failed; continuing with empty collection"
            );
            T::default()
        }
    }
}

/// Produces the redirect artifacts for the web server's routing layer.
#[derive(Debug, Clone)]
pub struct RedirectGenerator {
    client: ContentClient,
    config: AppConfig,
}

impl RedirectGenerator {
    pub fn new(config: AppConfig) -> Self {
        let client = ContentClient::new(&config);
        Self { client, config }
    }

    /// Fetch, map, and persist both redirect tables.
    pub async fn run(&self) -> RedirectResult<GenerationSummary> {
        if self.config.white_label {
            tracing::info!("redirects not generated: white-label academy");
            return Ok(GenerationSummary {
                skipped: true,
                asset_redirects: 0,
                alias_redirects: 0,
            });
        }

        tracing::info!("generating redirects");

        let (lessons, exercises, mut projects, how_to_pool, events, aliases) = tokio::join!(
            or_empty(
                "lessons",
                self.client
                    .get_assets("LESSON,ARTICLE", Some("how-to,como")),
            ),
            or_empty("exercises", self.client.get_assets("EXERCISE", None)),
            or_empty("projects", self.client.get_assets("PROJECT", None)),
            or_empty("how-to", self.client.get_assets("LESSON,ARTICLE", None)),
            or_empty("events", self.client.get_events()),
            or_empty("alias-redirects", self.client.get_alias_redirects()),
        );

        normalize_difficulties(&mut projects);

        let how_to: Vec<Asset> = how_to_pool
            .into_iter()
            .filter(Asset::is_how_to)
            .collect();

        let mut asset_redirects = generate_asset_redirects(&lessons, None);
        asset_redirects.extend(generate_asset_redirects(&exercises, None));
        asset_redirects.extend(generate_asset_redirects(&projects, None));
        asset_redirects.extend(generate_asset_redirects(&how_to, None));
        asset_redirects.extend(generate_asset_redirects(&events, Some(AssetType::Event)));

        let alias_redirects = generate_alias_redirects(&aliases, &projects);

        let output_dir = Path::new(&self.config.output_dir);
        std::fs::create_dir_all(output_dir).map_err(|source| RedirectError::Write {
            path: self.config.output_dir.clone(),
            source,
        })?;

        write_pretty_json(&output_dir.join(ASSET_REDIRECTS_FILE), &asset_redirects)?;
        write_pretty_json(&output_dir.join(ALIAS_REDIRECTS_FILE), &alias_redirects)?;

        tracing::info!(
            asset_redirects = asset_redirects.len(),
            alias_redirects = alias_redirects.len(),
            output_dir = %self.config.output_dir,
            "redirects generated"
        );

        Ok(GenerationSummary {
            skipped: false,
            asset_redirects: asset_redirects.len(),
            alias_redirects: alias_redirects.len(),
        })
    }
}

fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> RedirectResult<()> {
    let body = serde_json::to_string_pretty(value)?;
    std::fs::write(path, body).map_err(|source| RedirectError::Write {
        path: path.display().to_string(),
        source,
    })
}
