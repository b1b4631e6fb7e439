#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shared configuration and helpers for the academy web services.
//!
//! Everything here is consumed by both the pricing and redirects crates:
//! the environment-derived [`AppConfig`] and a couple of small text
//! utilities used when rendering plan titles.

pub mod config;
pub mod text;

pub use config::AppConfig;
pub use text::unslugify_capitalize;
