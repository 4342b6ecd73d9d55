use super::analysis::compute_tax_analysis;
use super::property::{IdentifiedProperty, RelinquishedProperty, ReplacementProperty};
use super::rates::TaxRates;
use super::requirements::compute_minimum_requirements;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Closing costs assumed for a candidate, as a fraction of its value
pub const ESTIMATED_CLOSING_COST_RATE: Decimal = dec!(0.02);
/// Boot below this fraction of the sale price rates `Good`
pub const GOOD_BOOT_THRESHOLD: Decimal = dec!(0.10);
/// Boot below this fraction of the sale price rates `Acceptable`
pub const ACCEPTABLE_BOOT_THRESHOLD: Decimal = dec!(0.25);

/// Ordered best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Excellent,
    Good,
    Acceptable,
    NotRecommended,
}

impl Recommendation {
    pub fn display(&self) -> &'static str {
        match self {
            Recommendation::Excellent => "Excellent",
            Recommendation::Good => "Good",
            Recommendation::Acceptable => "Acceptable",
            Recommendation::NotRecommended => "Not Recommended",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementComparison {
    pub property: IdentifiedProperty,
    pub meets_minimum_price: bool,
    pub estimated_boot: Decimal,
    pub estimated_tax_savings: Decimal,
    pub recommendation: Recommendation,
}

/// Score each candidate as a replacement for `relinquished`.
///
/// Output order matches `candidates`. Each candidate is assumed to carry the
/// same debt as the relinquished property and closing costs of 2% of value.
pub fn compare_candidates(
    relinquished: &RelinquishedProperty,
    rates: &TaxRates,
    candidates: &[IdentifiedProperty],
) -> Vec<ReplacementComparison> {
    let requirements = compute_minimum_requirements(relinquished);

    candidates
        .iter()
        .map(|property| {
            let meets_minimum_price =
                property.estimated_value >= requirements.minimum_purchase_price;
            let estimated_boot =
                (relinquished.sale_price - property.estimated_value).max(Decimal::ZERO);

            let assumed = ReplacementProperty {
                purchase_price: property.estimated_value,
                new_mortgage: relinquished.existing_mortgage,
                closing_costs: property.estimated_value * ESTIMATED_CLOSING_COST_RATE,
            };
            let estimated_tax_savings =
                compute_tax_analysis(relinquished, Some(&assumed), rates).tax_savings;

            let recommendation = recommend(
                meets_minimum_price,
                estimated_boot,
                relinquished.sale_price,
            );

            log::debug!(
                "Candidate {} ({}): boot={}, savings={}, {}",
                property.id,
                property.address,
                estimated_boot,
                estimated_tax_savings,
                recommendation
            );

            ReplacementComparison {
                property: property.clone(),
                meets_minimum_price,
                estimated_boot,
                estimated_tax_savings,
                recommendation,
            }
        })
        .collect()
}

fn recommend(meets_minimum_price: bool, boot: Decimal, sale_price: Decimal) -> Recommendation {
    if meets_minimum_price && boot.is_zero() {
        Recommendation::Excellent
    } else if boot < sale_price * GOOD_BOOT_THRESHOLD {
        Recommendation::Good
    } else if boot < sale_price * ACCEPTABLE_BOOT_THRESHOLD {
        Recommendation::Acceptable
    } else {
        Recommendation::NotRecommended
    }
}

/// Best-first view of `comparisons`: recommendation tier, then lower boot,
/// then higher tax savings. Ties keep their input order.
pub fn rank_comparisons(comparisons: &[ReplacementComparison]) -> Vec<&ReplacementComparison> {
    let mut ranked: Vec<_> = comparisons.iter().collect();
    ranked.sort_by(|a, b| {
        a.recommendation
            .cmp(&b.recommendation)
            .then(a.estimated_boot.cmp(&b.estimated_boot))
            .then(b.estimated_tax_savings.cmp(&a.estimated_tax_savings))
    });
    ranked
}
