use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub registration_id: Uuid,
    pub team_name: String,
    pub total_kills: i64,
    pub total_score: Decimal,
    pub games_submitted: u32,
    pub games_counted: u32,
    pub average_kills: Decimal,
    pub average_placement: Decimal,
}
