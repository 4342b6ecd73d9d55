use super::input::InputError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tax rates for a single analysis, as percentages (e.g. 20 for 20%).
///
/// Rates vary by jurisdiction and year, so there are no defaults: the caller
/// always supplies the full bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxRates {
    /// Federal long-term capital gains rate
    #[schemars(with = "f64")]
    pub federal_capital_gains_rate: Decimal,
    /// State capital gains rate, applied to capital gain and recapture alike
    #[schemars(with = "f64")]
    pub state_capital_gains_rate: Decimal,
    /// Unrecaptured section 1250 gain rate
    #[schemars(with = "f64")]
    pub depreciation_recapture_rate: Decimal,
    /// Net investment income tax rate
    #[schemars(with = "f64")]
    pub net_investment_income_tax_rate: Decimal,
}

impl TaxRates {
    pub fn federal(&self) -> Decimal {
        fraction(self.federal_capital_gains_rate)
    }

    pub fn state(&self) -> Decimal {
        fraction(self.state_capital_gains_rate)
    }

    pub fn recapture(&self) -> Decimal {
        fraction(self.depreciation_recapture_rate)
    }

    pub fn niit(&self) -> Decimal {
        fraction(self.net_investment_income_tax_rate)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        in_range(
            "tax_rates.federal_capital_gains_rate",
            self.federal_capital_gains_rate,
        )?;
        in_range(
            "tax_rates.state_capital_gains_rate",
            self.state_capital_gains_rate,
        )?;
        in_range(
            "tax_rates.depreciation_recapture_rate",
            self.depreciation_recapture_rate,
        )?;
        in_range(
            "tax_rates.net_investment_income_tax_rate",
            self.net_investment_income_tax_rate,
        )
    }
}

fn fraction(pct: Decimal) -> Decimal {
    pct / dec!(100)
}

fn in_range(field: &str, value: Decimal) -> Result<(), InputError> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(InputError::RateOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
