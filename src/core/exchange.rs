use super::analysis::{compute_tax_analysis, TaxAnalysis};
use super::comparison::{compare_candidates, ReplacementComparison};
use super::identification::{
    validate_three_property_rule, validate_two_hundred_percent_rule, ThreePropertyCheck,
    TwoHundredPercentCheck,
};
use super::input::{ExchangeInput, InputError};
use super::requirements::{compute_minimum_requirements, ReplacementRequirements};
use super::timeline::{compute_timeline, TimelineStatus};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Everything computed for one exchange
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relinquished_address: Option<String>,
    pub timeline: TimelineStatus,
    pub tax: TaxAnalysis,
    pub requirements: ReplacementRequirements,
    pub three_property_rule: ThreePropertyCheck,
    pub two_hundred_percent_rule: TwoHundredPercentCheck,
    pub comparisons: Vec<ReplacementComparison>,
}

/// Validate `input` and run every calculation against the reference instant `now`
pub fn analyze_exchange(
    input: &ExchangeInput,
    now: NaiveDateTime,
) -> Result<ExchangeAnalysis, InputError> {
    input.validate()?;

    let relinquished = &input.relinquished;
    let candidates = &input.identified_properties;

    let timeline = compute_timeline(input.sale_close_date, now);
    let tax = compute_tax_analysis(relinquished, input.replacement(), &input.tax_rates);
    let requirements = compute_minimum_requirements(relinquished);
    let three_property_rule = validate_three_property_rule(candidates);
    let two_hundred_percent_rule =
        validate_two_hundred_percent_rule(candidates, relinquished.sale_price);
    let comparisons = compare_candidates(relinquished, &input.tax_rates, candidates);

    log::info!(
        "Analyzed exchange {}: status={}, savings={}, {} candidates",
        input.name.as_deref().unwrap_or("(unnamed)"),
        timeline.status,
        tax.tax_savings.round_dp(2),
        comparisons.len()
    );

    Ok(ExchangeAnalysis {
        name: input.name.clone(),
        relinquished_address: input.relinquished_address.clone(),
        timeline,
        tax,
        requirements,
        three_property_rule,
        two_hundred_percent_rule,
        comparisons,
    })
}
