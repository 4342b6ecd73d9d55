use super::boot::compute_boot;
use super::gain::compute_gain_and_tax;
use super::property::{RelinquishedProperty, ReplacementProperty};
use super::rates::TaxRates;
use rust_decimal::Decimal;
use serde::Serialize;

/// Full tax picture of an exchange, with and without the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxAnalysis {
    pub adjusted_basis: Decimal,
    pub realized_gain: Decimal,
    pub capital_gain: Decimal,
    pub depreciation_recapture: Decimal,

    pub federal_capital_gains_tax: Decimal,
    pub state_capital_gains_tax: Decimal,
    pub depreciation_recapture_tax: Decimal,
    pub net_investment_income_tax: Decimal,
    pub total_tax_without_exchange: Decimal,

    pub cash_boot: Decimal,
    pub mortgage_boot: Decimal,
    pub total_boot: Decimal,
    pub taxable_gain_from_boot: Decimal,
    pub tax_with_exchange: Decimal,

    pub tax_savings: Decimal,
    pub deferred_gain: Decimal,
    pub new_property_basis: Decimal,
}

pub fn compute_tax_analysis(
    relinquished: &RelinquishedProperty,
    replacement: Option<&ReplacementProperty>,
    rates: &TaxRates,
) -> TaxAnalysis {
    let gain = compute_gain_and_tax(relinquished, rates);
    let boot = compute_boot(relinquished, replacement, &gain, rates);

    TaxAnalysis {
        adjusted_basis: gain.adjusted_basis,
        realized_gain: gain.realized_gain,
        capital_gain: gain.capital_gain,
        depreciation_recapture: gain.depreciation_recapture,
        federal_capital_gains_tax: gain.taxes.federal_capital_gains_tax,
        state_capital_gains_tax: gain.taxes.state_capital_gains_tax,
        depreciation_recapture_tax: gain.taxes.depreciation_recapture_tax,
        net_investment_income_tax: gain.taxes.net_investment_income_tax,
        total_tax_without_exchange: gain.total_tax_without_exchange,
        cash_boot: boot.cash_boot,
        mortgage_boot: boot.mortgage_boot,
        total_boot: boot.total_boot,
        taxable_gain_from_boot: boot.taxable_gain_from_boot,
        tax_with_exchange: boot.tax_with_exchange,
        tax_savings: gain.total_tax_without_exchange - boot.tax_with_exchange,
        deferred_gain: boot.deferred_gain,
        new_property_basis: boot.new_property_basis,
    }
}
