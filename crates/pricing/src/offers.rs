//! Suggested-plan (upsell) resolution.
//!
//! An offer pairs the plan a visitor is looking at (`original_plan`) with an
//! up-tier alternative (`suggested_plan`). Resolution fetches the offer list
//! for the academy catalog, picks the first entry matching the requested
//! slug, and normalizes both sides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PricingResult;
use crate::plans::{NormalizedPlanList, PlanOptions, PlanService, PlanSource};
use crate::translations::PlanCopy;

/// One upsell offer as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanOffer {
    pub original_plan: Option<PlanSource>,
    pub suggested_plan: Option<PlanSource>,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Both sides of a resolved offer, normalized.
///
/// A side is `None` when the offer carried no slug for it; the normalizer is
/// not invoked in that case.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedPlanPair {
    pub original_plan: Option<NormalizedPlanList>,
    pub suggested_plan: Option<NormalizedPlanList>,
}

/// A successfully resolved offer.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedPlans {
    pub plans: SuggestedPlanPair,
    pub details: Option<Value>,
    pub title: Option<String>,
}

/// Outcome of resolving a suggested plan.
///
/// "No matching offer" is data, not an error: callers render a different
/// page state for it, so it gets its own variant rather than an `Err`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SuggestedPlanOutcome {
    Found(SuggestedPlans),
    NotFound { status_code: u16, detail: String },
}

/// Resolves suggested-plan offers against the academy catalog.
#[derive(Debug, Clone)]
pub struct OfferService {
    plans: PlanService,
}

impl OfferService {
    pub fn new(plans: PlanService) -> Self {
        Self { plans }
    }

    /// Resolve the offer targeting `slug` and normalize both of its sides.
    ///
    /// Quarterly and half-yearly tiers are excluded on offer pages; the
    /// sides are tagged `"original"` and `"suggested"` for provenance.
    pub async fn resolve(
        &self,
        slug: &str,
        copy: &PlanCopy,
    ) -> PricingResult<SuggestedPlanOutcome> {
        let offers = self.plans.client().get_plan_offers(slug).await?;

        let matched = offers.into_iter().find(|offer| {
            offer
                .original_plan
                .as_ref()
                .and_then(|plan| plan.slug.as_deref())
                == Some(slug)
        });

        let Some(offer) = matched else {
            tracing::info!(slug = %slug, "no suggested plan offer matched");
            return Ok(SuggestedPlanOutcome::NotFound {
                status_code: 404,
                detail: "No suggested plan found".to_string(),
            });
        };

        let original_plan = self
            .normalize_side(offer.original_plan, "original", copy)
            .await?;
        let suggested_plan = self
            .normalize_side(offer.suggested_plan, "suggested", copy)
            .await?;

        let title = offer
            .details
            .as_ref()
            .and_then(|details| details.get("title"))
            .and_then(Value::as_str)
            .map(String::from);

        Ok(SuggestedPlanOutcome::Found(SuggestedPlans {
            plans: SuggestedPlanPair {
                original_plan,
                suggested_plan,
            },
            details: offer.details,
            title,
        }))
    }

    async fn normalize_side(
        &self,
        side: Option<PlanSource>,
        tag: &str,
        copy: &PlanCopy,
    ) -> PricingResult<Option<NormalizedPlanList>> {
        match side.filter(|plan| plan.slug.is_some()) {
            Some(plan) => {
                let normalized = self
                    .plans
                    .process_plans(&plan, &PlanOptions::for_offer(tag), copy)
                    .await?;
                Ok(Some(normalized))
            }
            None => Ok(None),
        }
    }

    /// Best-effort wrapper around [`resolve`](Self::resolve): any fetch or
    /// normalization error is logged and collapsed to `None` so callers
    /// treat it as "no data" rather than a valid empty plan.
    pub async fn fetch_suggested_plan(
        &self,
        slug: &str,
        copy: &PlanCopy,
    ) -> Option<SuggestedPlanOutcome> {
        match self.resolve(slug, copy).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                tracing::error!(slug = %slug, error = %err, "failed to resolve suggested plan");
                None
            }
        }
    }
}
