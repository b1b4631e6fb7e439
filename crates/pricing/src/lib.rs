// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Academy Pricing Module
//!
//! Reshapes billing-plan data fetched from the backend API into view-ready
//! plan lists for the pricing pages.
//!
//! ## Features
//!
//! - **Plan Normalization**: Turn a raw plan record into an ordered list of
//!   purchasable tiers (free/trial, monthly, quarterly, half-yearly, yearly,
//!   financing installments)
//! - **Suggested Plans**: Resolve the upsell offer paired with a plan and
//!   normalize both sides of it
//! - **Display Copy**: English default labels with pluralized trial-period
//!   wording, overridable per locale

pub mod client;
pub mod error;
pub mod offers;
pub mod plans;
pub mod translations;

#[cfg(test)]
mod edge_case_tests;

// Client
pub use client::PaymentsClient;

// Error
pub use error::{PricingError, PricingResult};

// Offers
pub use offers::{OfferService, PlanOffer, SuggestedPlanOutcome, SuggestedPlanPair, SuggestedPlans};

// Plans
pub use plans::{
    normalize_plans, FinancingOption, NormalizedPlan, NormalizedPlanList, PlanOptions, PlanPeriod,
    PlanService, PlanSource, PlanType,
};

// Translations
pub use translations::PlanCopy;
