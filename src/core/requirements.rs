use super::property::RelinquishedProperty;
use rust_decimal::Decimal;
use serde::Serialize;

/// What a replacement must carry to defer all of the gain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRequirements {
    /// Trade up or equal in value
    pub minimum_purchase_price: Decimal,
    /// Reinvest all net equity
    pub minimum_equity: Decimal,
    /// Replace all debt paid off
    pub minimum_debt: Decimal,
    pub net_equity_from_sale: Decimal,
}

pub fn compute_minimum_requirements(
    relinquished: &RelinquishedProperty,
) -> ReplacementRequirements {
    let net_equity_from_sale = relinquished.net_equity();
    ReplacementRequirements {
        minimum_purchase_price: relinquished.sale_price,
        minimum_equity: net_equity_from_sale,
        minimum_debt: relinquished.existing_mortgage,
        net_equity_from_sale,
    }
}
