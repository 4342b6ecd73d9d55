use super::gain::{GainAnalysis, TaxComponents};
use super::property::{RelinquishedProperty, ReplacementProperty};
use super::rates::TaxRates;
use rust_decimal::Decimal;
use serde::Serialize;

/// Boot received in an exchange and the tax it triggers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootAnalysis {
    /// Equity taken out of the exchange instead of reinvested
    pub cash_boot: Decimal,
    /// Debt paid off and not replaced by new debt
    pub mortgage_boot: Decimal,
    pub total_boot: Decimal,
    /// Portion of the realized gain recognized because of boot
    pub taxable_gain_from_boot: Decimal,
    pub tax_with_exchange: Decimal,
    pub deferred_gain: Decimal,
    pub new_property_basis: Decimal,
}

/// Compute cash and mortgage boot for an exchange into `replacement`.
///
/// With no replacement nothing has been exchanged: boot and tax are zero and
/// the basis carried is the relinquished adjusted basis.
pub fn compute_boot(
    relinquished: &RelinquishedProperty,
    replacement: Option<&ReplacementProperty>,
    gain: &GainAnalysis,
    rates: &TaxRates,
) -> BootAnalysis {
    let Some(replacement) = replacement else {
        return BootAnalysis {
            cash_boot: Decimal::ZERO,
            mortgage_boot: Decimal::ZERO,
            total_boot: Decimal::ZERO,
            taxable_gain_from_boot: Decimal::ZERO,
            tax_with_exchange: Decimal::ZERO,
            deferred_gain: gain.realized_gain,
            new_property_basis: gain.adjusted_basis,
        };
    };

    let cash_boot = (relinquished.net_equity() - replacement.cash_needed()).max(Decimal::ZERO);
    let mortgage_boot =
        (relinquished.existing_mortgage - replacement.new_mortgage).max(Decimal::ZERO);
    let total_boot = cash_boot + mortgage_boot;

    // Boot is only recognized up to the gain actually realized
    let taxable_gain_from_boot = total_boot.min(gain.realized_gain);

    let tax_with_exchange = if taxable_gain_from_boot > Decimal::ZERO
        && gain.realized_gain > Decimal::ZERO
    {
        let ratio = taxable_gain_from_boot / gain.realized_gain;
        TaxComponents::assess(
            gain.capital_gain * ratio,
            gain.depreciation_recapture * ratio,
            taxable_gain_from_boot,
            rates,
        )
        .total()
    } else {
        Decimal::ZERO
    };

    let deferred_gain = gain.realized_gain - taxable_gain_from_boot;
    let new_property_basis = replacement.purchase_price - deferred_gain + replacement.closing_costs;

    log::debug!(
        "Boot: cash={}, mortgage={}, taxable={}, tax={}, deferred={}, new basis={}",
        cash_boot,
        mortgage_boot,
        taxable_gain_from_boot,
        tax_with_exchange,
        deferred_gain,
        new_property_basis
    );

    BootAnalysis {
        cash_boot,
        mortgage_boot,
        total_boot,
        taxable_gain_from_boot,
        tax_with_exchange,
        deferred_gain,
        new_property_basis,
    }
}
