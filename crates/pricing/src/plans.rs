//! Plan normalization.
//!
//! Takes a raw plan record from the billing API and produces the ordered
//! list of purchasable tiers the pricing pages render: free/trial, monthly,
//! quarterly, half-yearly, yearly, and one entry per financing installment.
//!
//! [`normalize_plans`] is a pure function of its inputs so every emission
//! rule is unit-testable; [`PlanService::process_plans`] performs the one
//! supplementary fetch (featured info) and delegates to it.

use std::cmp::Ordering;

use academy_shared::unslugify_capitalize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::PaymentsClient;
use crate::error::PricingResult;
use crate::translations::PlanCopy;

/// Raw plan/pricing record as returned by the billing API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanSource {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub currency: Option<Value>,
    #[serde(default)]
    pub price_per_month: f64,
    #[serde(default)]
    pub price_per_quarter: f64,
    #[serde(default)]
    pub price_per_half: f64,
    #[serde(default)]
    pub price_per_year: f64,
    #[serde(default)]
    pub trial_duration: u32,
    #[serde(default)]
    pub trial_duration_unit: String,
    #[serde(default)]
    pub financing_options: Vec<FinancingOption>,
    /// Nested plan records; the first one, when present, supplies the
    /// canonical slug/currency/title/trial fields.
    #[serde(default)]
    pub plans: Vec<PlanSource>,
}

impl PlanSource {
    /// The record whose identity fields (slug, currency, title, trial)
    /// describe this plan. Per-period prices always come from `self`.
    fn canonical(&self) -> &PlanSource {
        self.plans.first().unwrap_or(self)
    }
}

/// An installment-payment variant of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FinancingOption {
    pub monthly_price: f64,
    pub how_many_months: u32,
}

/// Billing period of a normalized plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanPeriod {
    Free,
    Trial,
    Month,
    Quarter,
    Half,
    Year,
    Financing,
}

/// Broad category of a normalized plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    Free,
    Trial,
    Payment,
}

/// A single purchasable tier, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlan {
    pub plan_slug: Option<String>,
    pub currency: Option<Value>,
    pub featured_info: Vec<Value>,
    pub trial_duration: u32,
    pub trial_duration_unit: String,
    /// Provenance marker: `"original"`, `"suggested"`, or empty.
    pub tag: String,
    pub title: String,
    pub price: f64,
    #[serde(rename = "priceText")]
    pub price_text: String,
    /// Derived key, unique within one normalized list and stable for
    /// identical input: `p-<price>`, `p-<trial_duration>-trial`, or
    /// `f-<price>-<months>`.
    pub plan_id: String,
    pub period: PlanPeriod,
    pub period_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_many_months: Option<u32>,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    #[serde(rename = "isFree")]
    pub is_free: bool,
}

/// Result of normalizing one plan record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlanList {
    pub slug: Option<String>,
    /// True when the plan has no paid tier at all: no positive per-period
    /// price and no financing options.
    #[serde(rename = "isTrial")]
    pub is_trial: bool,
    pub plans: Vec<NormalizedPlan>,
    pub featured_info: Vec<Value>,
}

/// Inclusion flags and provenance tag for normalization.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub monthly: bool,
    pub quarterly: bool,
    pub half_yearly: bool,
    pub yearly: bool,
    pub tag: String,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            monthly: true,
            quarterly: true,
            half_yearly: true,
            yearly: true,
            tag: String::new(),
        }
    }
}

impl PlanOptions {
    /// Options used for both sides of a suggested-plan offer: monthly and
    /// yearly tiers only, tagged with the side's provenance.
    pub fn for_offer(tag: &str) -> Self {
        Self {
            quarterly: false,
            half_yearly: false,
            tag: tag.to_string(),
            ..Self::default()
        }
    }
}

fn sorted_by_price(options: impl Iterator<Item = FinancingOption>) -> Vec<FinancingOption> {
    let mut list: Vec<FinancingOption> = options.collect();
    list.sort_by(|a, b| {
        a.monthly_price
            .partial_cmp(&b.monthly_price)
            .unwrap_or(Ordering::Equal)
    });
    list
}

// Prices come from the API as JSON numbers; `{}` on f64 renders `50`
// for whole values and `49.99` otherwise, matching the web layer's ids.
fn format_price(price: f64) -> String {
    format!("{price}")
}

/// Normalize a raw plan record into its display tiers.
///
/// Pure: all network input (`featured_info`) is passed in by the caller.
pub fn normalize_plans(
    source: &PlanSource,
    options: &PlanOptions,
    copy: &PlanCopy,
    featured_info: Vec<Value>,
) -> NormalizedPlanList {
    let canonical = source.canonical();

    let is_not_trial = source.price_per_month > 0.0
        || source.price_per_quarter > 0.0
        || source.price_per_half > 0.0
        || source.price_per_year > 0.0;
    let financing_exists = !source.financing_options.is_empty();
    let is_totally_free = !is_not_trial && canonical.trial_duration == 0 && !financing_exists;

    let many_months = sorted_by_price(
        source
            .financing_options
            .iter()
            .copied()
            .filter(|o| o.monthly_price > 0.0 && o.how_many_months > 1),
    );
    let one_payment = sorted_by_price(
        source
            .financing_options
            .iter()
            .copied()
            .filter(|o| o.monthly_price > 0.0 && o.how_many_months == 1),
    );

    let base = |tag: &str| NormalizedPlan {
        plan_slug: canonical.slug.clone(),
        currency: canonical.currency.clone(),
        featured_info: featured_info.clone(),
        trial_duration: canonical.trial_duration,
        trial_duration_unit: canonical.trial_duration_unit.clone(),
        tag: tag.to_string(),
        title: String::new(),
        price: 0.0,
        price_text: String::new(),
        plan_id: String::new(),
        period: PlanPeriod::Free,
        period_label: String::new(),
        how_many_months: None,
        plan_type: PlanType::Free,
        is_free: false,
    };

    // Title falls back to the canonical title when the API provides one.
    let titled = |fallback: String| canonical.title.clone().unwrap_or(fallback);

    let mut plans: Vec<NormalizedPlan> = Vec::new();

    // Free/trial tier: only when nothing is purchasable at a flat price and
    // no financing exists.
    if !financing_exists && !is_not_trial {
        let slug_title =
            unslugify_capitalize(canonical.slug.as_deref().unwrap_or_default());
        plans.push(NormalizedPlan {
            title: titled(slug_title),
            price: 0.0,
            price_text: if is_totally_free {
                copy.totally_free.clone()
            } else {
                copy.free_trial.clone()
            },
            plan_id: format!("p-{}-trial", canonical.trial_duration),
            period: if is_totally_free {
                PlanPeriod::Free
            } else {
                PlanPeriod::Trial
            },
            period_label: if is_totally_free {
                copy.totally_free.clone()
            } else {
                copy.free_trial_period(canonical.trial_duration, &canonical.trial_duration_unit)
            },
            plan_type: if is_totally_free {
                PlanType::Free
            } else {
                PlanType::Trial
            },
            is_free: true,
            ..base(&options.tag)
        });
    }

    // Monthly slot: a one-payment financing option substitutes for the
    // monthly tier entirely. The two never coexist.
    if options.monthly && one_payment.is_empty() && source.price_per_month > 0.0 {
        plans.push(NormalizedPlan {
            title: titled(copy.monthly_payment.clone()),
            price: source.price_per_month,
            price_text: format!("${}", format_price(source.price_per_month)),
            plan_id: format!("p-{}", format_price(source.price_per_month)),
            period: PlanPeriod::Month,
            period_label: copy.monthly.clone(),
            plan_type: PlanType::Payment,
            ..base(&options.tag)
        });
    } else {
        for option in &one_payment {
            plans.push(NormalizedPlan {
                title: copy.one_payment.clone(),
                price: option.monthly_price,
                price_text: format!("${}", format_price(option.monthly_price)),
                plan_id: format!(
                    "f-{}-{}",
                    format_price(option.monthly_price),
                    option.how_many_months
                ),
                period: PlanPeriod::Financing,
                period_label: copy.financing.clone(),
                how_many_months: Some(option.how_many_months),
                plan_type: PlanType::Payment,
                ..base(&options.tag)
            });
        }
    }

    let flat_tiers = [
        (
            options.quarterly,
            source.price_per_quarter,
            PlanPeriod::Quarter,
            copy.quarterly.clone(),
            copy.quarterly_payment.clone(),
        ),
        (
            options.half_yearly,
            source.price_per_half,
            PlanPeriod::Half,
            copy.half_yearly.clone(),
            copy.half_yearly_payment.clone(),
        ),
        (
            options.yearly,
            source.price_per_year,
            PlanPeriod::Year,
            copy.yearly.clone(),
            copy.yearly_payment.clone(),
        ),
    ];
    for (enabled, price, period, label, fallback_title) in flat_tiers {
        if enabled && price > 0.0 {
            plans.push(NormalizedPlan {
                title: titled(fallback_title),
                price,
                price_text: format!("${}", format_price(price)),
                plan_id: format!("p-{}", format_price(price)),
                period,
                period_label: label,
                plan_type: PlanType::Payment,
                ..base(&options.tag)
            });
        }
    }

    for option in &many_months {
        let fallback_title = if option.how_many_months == 1 {
            copy.one_payment.clone()
        } else {
            copy.many_months_payment(option.how_many_months)
        };
        plans.push(NormalizedPlan {
            title: titled(fallback_title),
            price: option.monthly_price,
            price_text: format!(
                "${} x {}",
                format_price(option.monthly_price),
                option.how_many_months
            ),
            plan_id: format!(
                "f-{}-{}",
                format_price(option.monthly_price),
                option.how_many_months
            ),
            period: PlanPeriod::Financing,
            period_label: copy.financing.clone(),
            how_many_months: Some(option.how_many_months),
            plan_type: PlanType::Payment,
            ..base(&options.tag)
        });
    }

    NormalizedPlanList {
        slug: source.slug.clone(),
        is_trial: !is_not_trial && !financing_exists,
        plans,
        featured_info,
    }
}

/// Fetch-and-normalize service for plan records.
#[derive(Debug, Clone)]
pub struct PlanService {
    client: PaymentsClient,
}

impl PlanService {
    pub fn new(client: PaymentsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PaymentsClient {
        &self.client
    }

    /// Fetch the plan's featured info and normalize it into display tiers.
    ///
    /// A failed featured-info fetch propagates; there is no local recovery.
    pub async fn process_plans(
        &self,
        source: &PlanSource,
        options: &PlanOptions,
        copy: &PlanCopy,
    ) -> PricingResult<NormalizedPlanList> {
        let slug = source.slug.as_deref().unwrap_or_default();
        let featured_info = self.client.get_plan_props(slug).await?;

        tracing::debug!(
            slug = %slug,
            featured_props = featured_info.len(),
            "normalizing plan"
        );

        Ok(normalize_plans(source, options, copy, featured_info))
    }
}
