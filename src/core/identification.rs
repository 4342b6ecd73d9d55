//! Identification rules for replacement candidates.
//!
//! The Three Property Rule and the 200% Rule are alternatives: a taxpayer
//! needs to satisfy only one. Each is checked on its own and the caller picks.

use super::money::format_usd;
use super::property::IdentifiedProperty;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Most properties that may be identified regardless of value
pub const MAX_IDENTIFIED_PROPERTIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreePropertyCheck {
    pub valid: bool,
    pub message: String,
    pub count: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoHundredPercentCheck {
    pub valid: bool,
    pub message: String,
    pub total_value: Decimal,
    pub max_value: Decimal,
}

pub fn validate_three_property_rule(properties: &[IdentifiedProperty]) -> ThreePropertyCheck {
    let count = properties.len();
    let (valid, message) = if count == 0 {
        (false, "No properties identified".to_string())
    } else if count <= MAX_IDENTIFIED_PROPERTIES {
        (
            true,
            format!(
                "{} of {} allowed properties identified",
                count, MAX_IDENTIFIED_PROPERTIES
            ),
        )
    } else {
        (
            false,
            format!(
                "Too many properties identified ({}). Maximum is {} under the Three Property Rule.",
                count, MAX_IDENTIFIED_PROPERTIES
            ),
        )
    };

    ThreePropertyCheck {
        valid,
        message,
        count,
        limit: MAX_IDENTIFIED_PROPERTIES,
    }
}

pub fn validate_two_hundred_percent_rule(
    properties: &[IdentifiedProperty],
    relinquished_sale_price: Decimal,
) -> TwoHundredPercentCheck {
    // Saturate rather than overflow on absurd values
    let total_value = properties
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.estimated_value));
    let max_value = relinquished_sale_price.saturating_mul(dec!(2));

    let valid = total_value <= max_value;
    let message = if valid {
        format!(
            "Total value {} is within 200% limit ({})",
            format_usd(total_value),
            format_usd(max_value)
        )
    } else {
        format!(
            "Total value {} exceeds 200% limit ({})",
            format_usd(total_value),
            format_usd(max_value)
        )
    };

    TwoHundredPercentCheck {
        valid,
        message,
        total_value,
        max_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, value: Decimal) -> IdentifiedProperty {
        IdentifiedProperty {
            id: id.to_string(),
            address: format!("{id} Main St"),
            asking_price: value,
            estimated_value: value,
            notes: None,
        }
    }

    fn candidates(n: usize) -> Vec<IdentifiedProperty> {
        (1..=n)
            .map(|i| candidate(&i.to_string(), dec!(100000)))
            .collect()
    }

    #[test]
    fn no_properties_is_invalid() {
        let check = validate_three_property_rule(&[]);
        assert!(!check.valid);
        assert_eq!(check.message, "No properties identified");
    }

    #[test]
    fn up_to_three_is_valid() {
        let check = validate_three_property_rule(&candidates(1));
        assert!(check.valid);
        assert_eq!(check.message, "1 of 3 allowed properties identified");

        let check = validate_three_property_rule(&candidates(3));
        assert!(check.valid);
        assert_eq!(check.count, 3);
    }

    #[test]
    fn four_is_too_many() {
        let check = validate_three_property_rule(&candidates(4));
        assert!(!check.valid);
        assert_eq!(
            check.message,
            "Too many properties identified (4). Maximum is 3 under the Three Property Rule."
        );
    }

    #[test]
    fn exactly_two_hundred_percent_is_valid() {
        let props = vec![candidate("a", dec!(600000)), candidate("b", dec!(400000))];
        let check = validate_two_hundred_percent_rule(&props, dec!(500000));
        assert!(check.valid);
        assert_eq!(check.total_value, dec!(1000000));
        assert_eq!(check.max_value, dec!(1000000));
        assert_eq!(
            check.message,
            "Total value $1,000,000 is within 200% limit ($1,000,000)"
        );
    }

    #[test]
    fn one_dollar_over_is_invalid() {
        let props = vec![candidate("a", dec!(600001)), candidate("b", dec!(400000))];
        let check = validate_two_hundred_percent_rule(&props, dec!(500000));
        assert!(!check.valid);
        assert_eq!(
            check.message,
            "Total value $1,000,001 exceeds 200% limit ($1,000,000)"
        );
    }

    #[test]
    fn many_cheap_properties_pass_two_hundred_percent() {
        let check = validate_two_hundred_percent_rule(&candidates(6), dec!(500000));
        assert!(check.valid);
        assert!(!validate_three_property_rule(&candidates(6)).valid);
    }

    #[test]
    fn empty_list_passes_two_hundred_percent() {
        let check = validate_two_hundred_percent_rule(&[], dec!(500000));
        assert!(check.valid);
        assert_eq!(check.total_value, dec!(0));
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let properties = vec![candidate("a", Decimal::MAX), candidate("b", Decimal::MAX)];
        let check = validate_two_hundred_percent_rule(&properties, dec!(500000));
        assert!(!check.valid);
        assert_eq!(check.total_value, Decimal::MAX);

        let check = validate_two_hundred_percent_rule(&candidates(1), Decimal::MAX);
        assert!(check.valid);
        assert_eq!(check.max_value, Decimal::MAX);
    }
}
