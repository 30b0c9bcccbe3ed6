use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tournament_config::EntryFee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrizePool {
    pub total_registrations: u32,
    pub base_entry_fee: EntryFee,
    pub total_collected: Decimal,
    pub host_cut: Decimal,
    pub final_pool: Decimal,
}
