use serde::{Deserialize, Serialize};

use crate::{Money, Rate, ServiceCategory};

/// Itemized result of pricing one service.
///
/// Always satisfies `total == subtotal + taxes == base_price - discount + taxes`
/// with every amount non-negative and `discount <= base_price`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub service_id: String,
    /// Mirrors `service_id`; use `display_name` for the catalog name.
    pub service_name: String,
    pub display_name: String,
    pub category: ServiceCategory,
    pub base_price: Money,
    /// Effective discount rate that produced `discount`.
    pub discount_rate: Rate,
    /// Normalized promo code, set only when it beat the standing discount.
    pub promo_code: Option<String>,
    pub discount: Money,
    pub subtotal: Money,
    pub taxes: Money,
    pub total: Money,
}
