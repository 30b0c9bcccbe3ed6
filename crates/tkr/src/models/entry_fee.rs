use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Amount a team owes before and after discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeeBreakdown {
    pub original: Decimal,
    pub discount: Decimal,
    #[serde(rename = "final")]
    pub final_fee: Decimal,
}
