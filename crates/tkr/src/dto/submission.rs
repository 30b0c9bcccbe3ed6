use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::SubmissionStatus;

/// Request payload for submitting one game result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitGameRequest {
    #[validate(range(min = 1, message = "Game number must be at least 1"))]
    pub game_number: i32,

    #[validate(range(min = 0, message = "Kills cannot be negative"))]
    pub kills: i32,

    #[validate(range(min = 1, message = "Placement must be at least 1"))]
    pub placement: i32,

    #[validate(url(message = "VOD reference must be an absolute URL"))]
    pub vod_url: String,

    #[validate(length(
        min = 1,
        max = 32,
        message = "Timestamp must be between 1 and 32 characters"
    ))]
    pub timestamp: String,
}

/// Request payload for a host verifying or rejecting a submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VerifySubmissionRequest {
    #[validate(custom(function = "validate_verdict"))]
    pub status: SubmissionStatus,

    #[validate(length(min = 1, max = 64))]
    pub verified_by: String,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

fn validate_verdict(status: &SubmissionStatus) -> Result<(), validator::ValidationError> {
    match status {
        SubmissionStatus::Verified | SubmissionStatus::Rejected => Ok(()),
        SubmissionStatus::Pending => Err(validator::ValidationError::new("invalid_verdict")),
    }
}
