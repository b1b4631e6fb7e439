// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Academy Redirects Module
//!
//! Pre-computes SEO redirects from content-asset metadata. The generator
//! fetches asset collections and alias records from the content API, maps
//! them to localized URL redirects, and writes two static JSON files the
//! web server's routing layer reads at request time:
//!
//! - `redirects-from-api.json`: `{source, destination, permanent}` entries
//!   pointing language-specific assets at their language-prefixed paths
//! - `alias-redirects.json`: `{source, type, destination}` entries resolving
//!   short alias slugs and legacy `/project/` paths
//!
//! The run is best-effort: each failed fetch degrades to an empty
//! collection instead of aborting.

pub mod assets;
pub mod client;
pub mod error;
pub mod generator;
pub mod mapper;

pub use assets::{Asset, AssetType, Difficulty};
pub use client::{AliasMap, AliasTarget, ContentClient};
pub use error::{RedirectError, RedirectResult};
pub use generator::{GenerationSummary, RedirectGenerator, ALIAS_REDIRECTS_FILE, ASSET_REDIRECTS_FILE};
pub use mapper::{generate_alias_redirects, generate_asset_redirects, AliasRedirect, AssetRedirect};
