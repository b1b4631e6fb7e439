// Test file - these are expected patterns in test code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Edge Case Tests for Plan Normalization
//!
//! Covers the boundary conditions of tier emission:
//! - free/trial detection and labeling
//! - monthly vs one-payment-financing exclusivity
//! - financing ordering and ids
//! - option flags and provenance tags

#[cfg(test)]
mod normalization_tests {
    use serde_json::json;

    use crate::plans::*;
    use crate::translations::PlanCopy;

    fn normalize(source: &PlanSource, options: &PlanOptions) -> NormalizedPlanList {
        normalize_plans(source, options, &PlanCopy::default(), Vec::new())
    }

    fn financing(monthly_price: f64, how_many_months: u32) -> FinancingOption {
        FinancingOption {
            monthly_price,
            how_many_months,
        }
    }

    #[test]
    fn totally_free_plan_emits_single_free_tier() {
        let source = PlanSource {
            slug: Some("coding-intro".to_string()),
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(result.is_trial);
        assert_eq!(result.plans.len(), 1);
        let plan = &result.plans[0];
        assert_eq!(plan.plan_type, PlanType::Free);
        assert_eq!(plan.period, PlanPeriod::Free);
        assert_eq!(plan.price_text, "Totally free");
        assert_eq!(plan.plan_id, "p-0-trial");
        assert!(plan.is_free);
        // No explicit title falls back to the unslugified slug
        assert_eq!(plan.title, "Coding Intro");
    }

    #[test]
    fn trial_plan_uses_pluralized_period_label() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            trial_duration: 2,
            trial_duration_unit: "WEEK".to_string(),
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(result.is_trial);
        let plan = &result.plans[0];
        assert_eq!(plan.plan_type, PlanType::Trial);
        assert_eq!(plan.period, PlanPeriod::Trial);
        assert_eq!(plan.price_text, "Free trial");
        assert_eq!(plan.period_label, "Free trial for 2 weeks");
        assert_eq!(plan.plan_id, "p-2-trial");
    }

    #[test]
    fn monthly_price_emits_single_month_tier() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(!result.is_trial);
        assert_eq!(result.plans.len(), 1);
        let plan = &result.plans[0];
        assert_eq!(plan.period, PlanPeriod::Month);
        assert_eq!(plan.price, 50.0);
        assert_eq!(plan.plan_id, "p-50");
        assert_eq!(plan.price_text, "$50");
        assert_eq!(plan.plan_type, PlanType::Payment);
    }

    #[test]
    fn one_payment_financing_suppresses_monthly_tier() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            financing_options: vec![financing(30.0, 1)],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(!result.is_trial);
        assert_eq!(result.plans.len(), 1);
        let plan = &result.plans[0];
        assert_eq!(plan.period, PlanPeriod::Financing);
        assert_eq!(plan.plan_id, "f-30-1");
        assert_eq!(plan.price_text, "$30");
        assert_eq!(plan.how_many_months, Some(1));
        assert_eq!(plan.title, "One payment");
        assert!(!result.plans.iter().any(|p| p.period == PlanPeriod::Month));
    }

    #[test]
    fn financing_options_sorted_ascending_by_monthly_price() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            financing_options: vec![financing(90.0, 6), financing(40.0, 12), financing(60.0, 3)],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        let ids: Vec<&str> = result.plans.iter().map(|p| p.plan_id.as_str()).collect();
        assert_eq!(ids, vec!["f-40-12", "f-60-3", "f-90-6"]);
        assert_eq!(result.plans[0].price_text, "$40 x 12");
        assert_eq!(result.plans[0].title, "Payment for 12 months");
    }

    #[test]
    fn financing_presence_disables_trial_and_is_trial_flag() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            financing_options: vec![financing(25.0, 4)],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(!result.is_trial);
        assert!(result.plans.iter().all(|p| !p.is_free));
    }

    #[test]
    fn zero_price_financing_options_are_ignored_for_tiers() {
        // An option with a non-positive price never becomes a tier, but its
        // presence still blocks the trial slot.
        let source = PlanSource {
            slug: Some("basic".to_string()),
            financing_options: vec![financing(0.0, 6)],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert!(result.plans.is_empty());
        assert!(!result.is_trial);
    }

    #[test]
    fn all_flat_tiers_emitted_independently() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            price_per_quarter: 140.0,
            price_per_half: 260.0,
            price_per_year: 480.0,
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        let periods: Vec<PlanPeriod> = result.plans.iter().map(|p| p.period).collect();
        assert_eq!(
            periods,
            vec![
                PlanPeriod::Month,
                PlanPeriod::Quarter,
                PlanPeriod::Half,
                PlanPeriod::Year
            ]
        );
        assert_eq!(result.plans[3].plan_id, "p-480");
    }

    #[test]
    fn option_flags_gate_their_tiers() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            price_per_quarter: 140.0,
            price_per_half: 260.0,
            price_per_year: 480.0,
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::for_offer("original"));

        let periods: Vec<PlanPeriod> = result.plans.iter().map(|p| p.period).collect();
        assert_eq!(periods, vec![PlanPeriod::Month, PlanPeriod::Year]);
        assert!(result.plans.iter().all(|p| p.tag == "original"));
    }

    #[test]
    fn disabled_monthly_without_financing_emits_nothing_for_the_slot() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            ..Default::default()
        };
        let options = PlanOptions {
            monthly: false,
            ..Default::default()
        };

        let result = normalize(&source, &options);

        assert!(result.plans.is_empty());
        assert!(!result.is_trial);
    }

    #[test]
    fn nested_plan_supplies_identity_fields_prices_stay_outer() {
        let source = PlanSource {
            slug: Some("bundle".to_string()),
            price_per_month: 75.0,
            plans: vec![PlanSource {
                slug: Some("bundle-inner".to_string()),
                title: Some("The Bundle".to_string()),
                currency: Some(serde_json::json!({"code": "USD"})),
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert_eq!(result.slug.as_deref(), Some("bundle"));
        let plan = &result.plans[0];
        assert_eq!(plan.plan_slug.as_deref(), Some("bundle-inner"));
        assert_eq!(plan.title, "The Bundle");
        assert_eq!(plan.currency, Some(serde_json::json!({"code": "USD"})));
        assert_eq!(plan.price, 75.0);
    }

    #[test]
    fn fractional_prices_keep_decimals_in_ids_and_text() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 49.99,
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        assert_eq!(result.plans[0].plan_id, "p-49.99");
        assert_eq!(result.plans[0].price_text, "$49.99");
    }

    #[test]
    fn featured_info_attached_to_list_and_every_plan() {
        let featured = vec![json!({"service": "mentorship"})];
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            price_per_year: 480.0,
            ..Default::default()
        };

        let result =
            normalize_plans(&source, &PlanOptions::default(), &PlanCopy::default(), featured.clone());

        assert_eq!(result.featured_info, featured);
        assert!(result.plans.iter().all(|p| p.featured_info == featured));
    }

    #[test]
    fn plan_ids_unique_within_list() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            price_per_quarter: 140.0,
            price_per_year: 480.0,
            financing_options: vec![financing(40.0, 12), financing(60.0, 6)],
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());

        let mut ids: Vec<&str> = result.plans.iter().map(|p| p.plan_id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn serialized_plan_uses_view_field_names() {
        let source = PlanSource {
            slug: Some("basic".to_string()),
            price_per_month: 50.0,
            ..Default::default()
        };

        let result = normalize(&source, &PlanOptions::default());
        let value = serde_json::to_value(&result.plans[0]).unwrap();

        assert_eq!(value["priceText"], "$50");
        assert_eq!(value["type"], "PAYMENT");
        assert_eq!(value["period"], "MONTH");
        assert!(value.get("how_many_months").is_none());
    }
}
