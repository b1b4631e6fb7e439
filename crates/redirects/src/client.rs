//! HTTP client for the content endpoints of the academy API.

use std::collections::BTreeMap;

use academy_shared::AppConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::assets::Asset;
use crate::error::{RedirectError, RedirectResult};

/// Target of a short-slug alias, keyed by the alias itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasTarget {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Alias records keyed by short slug. A `BTreeMap` keeps iteration (and so
/// the generated files) deterministic.
pub type AliasMap = BTreeMap<String, AliasTarget>;

/// Thin wrapper over `reqwest` for the registry and events endpoints.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    api_host: String,
    academy: String,
}

impl ContentClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_host: config.api_host.clone(),
            academy: config.academy.clone(),
        }
    }

    /// Search registry assets by type, optionally excluding categories.
    ///
    /// `asset_types` is a comma-separated list as accepted by the API,
    /// e.g. `"LESSON,ARTICLE"`.
    pub async fn get_assets(
        &self,
        asset_types: &str,
        exclude_category: Option<&str>,
    ) -> RedirectResult<Vec<Asset>> {
        let mut params = vec![("asset_type", asset_types)];
        if let Some(excluded) = exclude_category {
            params.push(("exclude_category", excluded));
        }
        let url = Url::parse_with_params(
            &format!("{}/v1/registry/asset", self.api_host),
            &params,
        )?;
        self.get_json(url).await
    }

    /// Fetch all published events.
    pub async fn get_events(&self) -> RedirectResult<Vec<Asset>> {
        let url = Url::parse(&format!("{}/v1/events/all", self.api_host))?;
        self.get_json(url).await
    }

    /// Fetch the alias-redirect map for the configured academy scope.
    pub async fn get_alias_redirects(&self) -> RedirectResult<AliasMap> {
        let url = Url::parse_with_params(
            &format!("{}/v1/registry/alias/redirect", self.api_host),
            &[("academy", self.academy.as_str())],
        )?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> RedirectResult<T> {
        let endpoint = url.path().to_string();
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| RedirectError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedirectError::UnexpectedStatus { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| RedirectError::Decode { endpoint, source })
    }
}
