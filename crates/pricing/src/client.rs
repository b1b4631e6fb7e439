//! HTTP client for the billing endpoints of the academy API.

use academy_shared::AppConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{PricingError, PricingResult};
use crate::offers::PlanOffer;

/// Thin wrapper over `reqwest` for the payment endpoints.
///
/// No retries and no timeouts are applied here; callers that need them must
/// add their own.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: reqwest::Client,
    api_host: String,
    academy: String,
}

impl PaymentsClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_host: config.api_host.clone(),
            academy: config.academy.clone(),
        }
    }

    /// Fetch the supplementary "featured info" properties for a plan.
    ///
    /// Returns the raw property objects; their shape is owned by the web
    /// layer and passed through untouched.
    pub async fn get_plan_props(&self, plan_slug: &str) -> PricingResult<Vec<Value>> {
        let url = Url::parse_with_params(
            &format!("{}/v1/payments/serviceitems", self.api_host),
            &[("plan", plan_slug)],
        )?;
        self.get_json(url).await
    }

    /// Fetch all plan offers for the academy catalog that target
    /// `original_plan`.
    pub async fn get_plan_offers(&self, original_plan: &str) -> PricingResult<Vec<PlanOffer>> {
        let url = Url::parse_with_params(
            &format!("{}/v1/payments/planoffer", self.api_host),
            &[("original_plan", original_plan), ("academy", &self.academy)],
        )?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> PricingResult<T> {
        let endpoint = url.path().to_string();
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| PricingError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::UnexpectedStatus { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| PricingError::Decode { endpoint, source })
    }
}
