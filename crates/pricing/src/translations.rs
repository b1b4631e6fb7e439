//! Display copy for normalized plans.
//!
//! Translation loading is handled by the web layer; the services only need a
//! table of already-resolved strings. [`PlanCopy::default`] carries the
//! English wording so the normalizer works without any i18n plumbing.

/// Localized (or default English) labels used when building plan lists.
///
/// Templates use a `{qty}` placeholder where a number is interpolated.
#[derive(Debug, Clone)]
pub struct PlanCopy {
    pub free: String,
    pub totally_free: String,
    pub free_trial: String,
    pub one_payment: String,
    pub monthly_payment: String,
    pub quarterly_payment: String,
    pub half_yearly_payment: String,
    pub yearly_payment: String,
    pub monthly: String,
    pub quarterly: String,
    pub half_yearly: String,
    pub yearly: String,
    pub financing: String,
    /// Template for installment titles, e.g. `"Payment for {qty} months"`.
    pub many_months_payment_template: String,
    /// Template for trial labels, e.g. `"Free trial for {qty} {period}"`.
    pub free_trial_period_template: String,
}

impl Default for PlanCopy {
    fn default() -> Self {
        Self {
            free: "Free".to_string(),
            totally_free: "Totally free".to_string(),
            free_trial: "Free trial".to_string(),
            one_payment: "One payment".to_string(),
            monthly_payment: "Monthly payment".to_string(),
            quarterly_payment: "Quarterly payment".to_string(),
            half_yearly_payment: "Half yearly payment".to_string(),
            yearly_payment: "Yearly payment".to_string(),
            monthly: "Monthly".to_string(),
            quarterly: "Quarterly".to_string(),
            half_yearly: "Half yearly".to_string(),
            yearly: "Yearly".to_string(),
            financing: "Financing".to_string(),
            many_months_payment_template: "Payment for {qty} months".to_string(),
            free_trial_period_template: "Free trial for {qty} {period}".to_string(),
        }
    }
}

impl PlanCopy {
    /// Title for an installment plan spanning `qty` months.
    pub fn many_months_payment(&self, qty: u32) -> String {
        self.many_months_payment_template
            .replace("{qty}", &qty.to_string())
    }

    /// Label for a free trial of `qty` units, pluralizing the unit word.
    ///
    /// `unit` is the raw `trial_duration_unit` from the API
    /// (`DAY`/`WEEK`/`MONTH`/`YEAR`, any casing).
    pub fn free_trial_period(&self, qty: u32, unit: &str) -> String {
        let unit = unit.to_lowercase();
        let period = match (unit.as_str(), qty > 1) {
            ("day", false) => "day".to_string(),
            ("day", true) => "days".to_string(),
            ("week", false) => "week".to_string(),
            ("week", true) => "weeks".to_string(),
            ("month", false) => "month".to_string(),
            ("month", true) => "months".to_string(),
            ("year", false) => "year".to_string(),
            ("year", true) => "years".to_string(),
            _ => unit,
        };
        self.free_trial_period_template
            .replace("{qty}", &qty.to_string())
            .replace("{period}", &period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_period_pluralizes_above_one() {
        let copy = PlanCopy::default();
        assert_eq!(copy.free_trial_period(1, "WEEK"), "Free trial for 1 week");
        assert_eq!(copy.free_trial_period(2, "WEEK"), "Free trial for 2 weeks");
        assert_eq!(copy.free_trial_period(7, "day"), "Free trial for 7 days");
    }

    #[test]
    fn unknown_unit_passes_through_lowercased() {
        let copy = PlanCopy::default();
        assert_eq!(
            copy.free_trial_period(3, "FORTNIGHT"),
            "Free trial for 3 fortnight"
        );
    }

    #[test]
    fn many_months_title_interpolates_quantity() {
        let copy = PlanCopy::default();
        assert_eq!(copy.many_months_payment(6), "Payment for 6 months");
    }
}
