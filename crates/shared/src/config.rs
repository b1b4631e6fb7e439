//! Environment-derived configuration.
//!
//! The services read three knobs from the environment:
//!
//! - `ACADEMY_API_HOST`: base URL of the content/billing API. Defaults to the
//!   staging deployment so local runs work without any setup.
//! - `WHITE_LABEL_ACADEMY`: when set, the deployment serves a single tenant
//!   under a custom domain. Cross-tenant features (redirect generation) are
//!   disabled and API queries are scoped to that academy.
//! - `REDIRECTS_OUTPUT_DIR`: where the redirect artifacts are written.

use std::env;

/// Fallback API host used when `ACADEMY_API_HOST` is unset.
pub const DEFAULT_API_HOST: &str = "https://academy-api-staging.herokuapp.com";

/// Academy scope used for alias-redirect queries on the main deployment.
pub const DEFAULT_ACADEMY_SCOPE: &str = "4";

/// Default directory for the generated redirect files.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the content/billing API, without a trailing slash.
    pub api_host: String,
    /// Academy id(s) scoping alias-redirect and offer queries.
    pub academy: String,
    /// True when running as a white-label (single-tenant) deployment.
    pub white_label: bool,
    /// Directory the redirect artifacts are written to.
    pub output_dir: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        let api_host = env::var("ACADEMY_API_HOST")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let api_host = api_host.trim_end_matches('/').to_string();

        let white_label_academy = env::var("WHITE_LABEL_ACADEMY")
            .ok()
            .filter(|v| !v.is_empty());

        let (academy, white_label) = match white_label_academy {
            Some(id) => (id, true),
            None => (DEFAULT_ACADEMY_SCOPE.to_string(), false),
        };

        let output_dir = env::var("REDIRECTS_OUTPUT_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Self {
            api_host,
            academy,
            white_label,
            output_dir,
        }
    }

    /// Build a config directly, mainly for tests.
    pub fn new(api_host: impl Into<String>, academy: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into().trim_end_matches('/').to_string(),
            academy: academy.into(),
            white_label: false,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let config = AppConfig::new("https://api.example.com/", "4");
        assert_eq!(config.api_host, "https://api.example.com");
    }

    #[test]
    fn defaults_are_not_white_label() {
        let config = AppConfig::new(DEFAULT_API_HOST, DEFAULT_ACADEMY_SCOPE);
        assert!(!config.white_label);
        assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
    }
}
