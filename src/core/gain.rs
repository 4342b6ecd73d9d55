use super::property::RelinquishedProperty;
use super::rates::TaxRates;
use rust_decimal::Decimal;
use serde::Serialize;

/// Federal, state, recapture and net investment income tax on a slice of gain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaxComponents {
    pub federal_capital_gains_tax: Decimal,
    pub state_capital_gains_tax: Decimal,
    pub depreciation_recapture_tax: Decimal,
    pub net_investment_income_tax: Decimal,
}

impl TaxComponents {
    /// Tax a gain already split into capital gain and depreciation recapture.
    ///
    /// State tax applies to both slices; federal capital gains tax only to the
    /// capital gain. NIIT applies to `niit_base` when it is positive.
    pub fn assess(
        capital_gain: Decimal,
        depreciation_recapture: Decimal,
        niit_base: Decimal,
        rates: &TaxRates,
    ) -> Self {
        let net_investment_income_tax = if niit_base > Decimal::ZERO {
            niit_base * rates.niit()
        } else {
            Decimal::ZERO
        };
        TaxComponents {
            federal_capital_gains_tax: capital_gain * rates.federal(),
            state_capital_gains_tax: (capital_gain + depreciation_recapture) * rates.state(),
            depreciation_recapture_tax: depreciation_recapture * rates.recapture(),
            net_investment_income_tax,
        }
    }

    pub fn total(&self) -> Decimal {
        self.federal_capital_gains_tax
            + self.state_capital_gains_tax
            + self.depreciation_recapture_tax
            + self.net_investment_income_tax
    }
}

/// Gain on the relinquished property and the tax owed if it is sold outright
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GainAnalysis {
    pub adjusted_basis: Decimal,
    pub amount_realized: Decimal,
    /// Negative when the sale is at a loss
    pub realized_gain: Decimal,
    pub capital_gain: Decimal,
    pub depreciation_recapture: Decimal,
    #[serde(flatten)]
    pub taxes: TaxComponents,
    pub total_tax_without_exchange: Decimal,
}

/// Split the realized gain into recapture and capital gain and tax it
pub fn compute_gain_and_tax(relinquished: &RelinquishedProperty, rates: &TaxRates) -> GainAnalysis {
    let adjusted_basis = relinquished.original_basis - relinquished.accumulated_depreciation;
    let amount_realized = relinquished.amount_realized();
    let realized_gain = amount_realized - adjusted_basis;

    // Recapture is capped by both the depreciation taken and the gain realized
    let depreciation_recapture = relinquished
        .accumulated_depreciation
        .min(realized_gain.max(Decimal::ZERO));
    let capital_gain = (realized_gain - depreciation_recapture).max(Decimal::ZERO);

    let taxes = TaxComponents::assess(capital_gain, depreciation_recapture, realized_gain, rates);
    let total_tax_without_exchange = taxes.total();

    log::debug!(
        "Gain: realized={}, basis={}, capital={}, recapture={}, tax={}",
        realized_gain,
        adjusted_basis,
        capital_gain,
        depreciation_recapture,
        total_tax_without_exchange
    );

    GainAnalysis {
        adjusted_basis,
        amount_realized,
        realized_gain,
        capital_gain,
        depreciation_recapture,
        taxes,
        total_tax_without_exchange,
    }
}
