use super::input::InputError;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The property being sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelinquishedProperty {
    #[schemars(with = "f64")]
    pub sale_price: Decimal,
    /// Original purchase price plus capital improvements
    #[schemars(with = "f64")]
    pub original_basis: Decimal,
    #[schemars(with = "f64")]
    pub accumulated_depreciation: Decimal,
    #[schemars(with = "f64")]
    pub selling_costs: Decimal,
    #[schemars(with = "f64")]
    pub existing_mortgage: Decimal,
}

impl RelinquishedProperty {
    /// Sale price less selling costs
    pub fn amount_realized(&self) -> Decimal {
        self.sale_price - self.selling_costs
    }

    /// Cash the seller walks away with once the existing mortgage is paid off
    pub fn net_equity(&self) -> Decimal {
        self.sale_price - self.selling_costs - self.existing_mortgage
    }

    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("relinquished.sale_price", self.sale_price)?;
        non_negative("relinquished.original_basis", self.original_basis)?;
        non_negative(
            "relinquished.accumulated_depreciation",
            self.accumulated_depreciation,
        )?;
        non_negative("relinquished.selling_costs", self.selling_costs)?;
        non_negative("relinquished.existing_mortgage", self.existing_mortgage)?;

        if self.accumulated_depreciation > self.original_basis {
            return Err(InputError::DepreciationExceedsBasis {
                depreciation: self.accumulated_depreciation,
                basis: self.original_basis,
            });
        }
        Ok(())
    }
}

/// The property being acquired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplacementProperty {
    #[schemars(with = "f64")]
    pub purchase_price: Decimal,
    #[schemars(with = "f64")]
    pub new_mortgage: Decimal,
    #[schemars(with = "f64")]
    pub closing_costs: Decimal,
}

impl ReplacementProperty {
    /// Cash the buyer has to bring to closing
    pub fn cash_needed(&self) -> Decimal {
        self.purchase_price - self.new_mortgage + self.closing_costs
    }

    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("replacement.purchase_price", self.purchase_price)?;
        non_negative("replacement.new_mortgage", self.new_mortgage)?;
        non_negative("replacement.closing_costs", self.closing_costs)
    }
}

/// A candidate replacement named during the identification period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IdentifiedProperty {
    /// Identifier for linking back to the caller's records
    pub id: String,
    /// Street address of the candidate
    pub address: String,
    /// Listed asking price
    #[schemars(with = "f64")]
    pub asking_price: Decimal,
    /// Estimated market value, used by the identification rules
    #[schemars(with = "f64")]
    pub estimated_value: Decimal,
    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl IdentifiedProperty {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.id.trim().is_empty() {
            return Err(InputError::MissingField("identified_properties.id".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(InputError::MissingField(format!(
                "identified_properties[{}].address",
                self.id
            )));
        }
        non_negative(
            &format!("identified_properties[{}].asking_price", self.id),
            self.asking_price,
        )?;
        non_negative(
            &format!("identified_properties[{}].estimated_value", self.id),
            self.estimated_value,
        )
    }
}

pub(crate) fn non_negative(field: &str, value: Decimal) -> Result<(), InputError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn relinquished() -> RelinquishedProperty {
        RelinquishedProperty {
            sale_price: dec!(500000),
            original_basis: dec!(300000),
            accumulated_depreciation: dec!(50000),
            selling_costs: dec!(30000),
            existing_mortgage: dec!(150000),
        }
    }

    #[test]
    fn net_equity_deducts_costs_and_mortgage() {
        let p = relinquished();
        assert_eq!(p.amount_realized(), dec!(470000));
        assert_eq!(p.net_equity(), dec!(320000));
    }

    #[test]
    fn cash_needed_for_replacement() {
        let r = ReplacementProperty {
            purchase_price: dec!(500000),
            new_mortgage: dec!(150000),
            closing_costs: dec!(10000),
        };
        assert_eq!(r.cash_needed(), dec!(360000));
    }

    #[test]
    fn negative_value_rejected_with_field_name() {
        let p = RelinquishedProperty {
            selling_costs: dec!(-1),
            ..relinquished()
        };
        let err = p.validate().unwrap_err();
        assert_eq!(
            err,
            InputError::Negative {
                field: "relinquished.selling_costs".to_string(),
                value: dec!(-1),
            }
        );
    }

    #[test]
    fn depreciation_above_basis_rejected() {
        let p = RelinquishedProperty {
            accumulated_depreciation: dec!(300001),
            ..relinquished()
        };
        assert!(matches!(
            p.validate(),
            Err(InputError::DepreciationExceedsBasis { .. })
        ));
    }

    #[test]
    fn depreciation_equal_to_basis_allowed() {
        let p = RelinquishedProperty {
            accumulated_depreciation: dec!(300000),
            ..relinquished()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_zero_is_not_negative() {
        assert!(non_negative("x", -dec!(0)).is_ok());
    }

    #[test]
    fn candidate_requires_address() {
        let c = IdentifiedProperty {
            id: "a".to_string(),
            address: "  ".to_string(),
            asking_price: dec!(1),
            estimated_value: dec!(1),
            notes: None,
        };
        assert_eq!(
            c.validate(),
            Err(InputError::MissingField(
                "identified_properties[a].address".to_string()
            ))
        );
    }
}
