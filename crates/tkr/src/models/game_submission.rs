use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// Score of one game, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreBreakdown {
    pub base_score: Decimal,
    pub bonus_points: Decimal,
    pub final_score: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameSubmission {
    pub submission_id: Uuid,
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub game_number: i32,
    pub kills: i32,
    pub placement: i32,
    pub vod_url: String,
    /// Position of the result screen inside the VOD, e.g. `1:23:45`.
    pub timestamp: String,
    pub base_score: Decimal,
    pub bonus_points: Decimal,
    pub final_score: Decimal,
    pub status: SubmissionStatus,
    pub verified_by: Option<String>,
    pub verification_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl GameSubmission {
    /// Pending and verified submissions occupy a slot; rejected ones do not.
    pub fn is_active(&self) -> bool {
        self.status != SubmissionStatus::Rejected
    }
}
