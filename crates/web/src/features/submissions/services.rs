use chrono::Utc;
use tkr::{
    Store,
    dto::submission::{SubmitGameRequest, VerifySubmissionRequest},
    error::Result,
    models::GameSubmission,
    repository::submission::SubmissionRepository,
    services::submission_window::Eligibility,
};
use uuid::Uuid;

/// Check whether a team may submit right now
pub async fn check_eligibility(store: &Store, registration_id: Uuid) -> Result<Eligibility> {
    let repo = SubmissionRepository::new(store);
    repo.eligibility(registration_id, Utc::now()).await
}

/// Submit a game result
pub async fn submit_game(
    store: &Store,
    registration_id: Uuid,
    request: &SubmitGameRequest,
) -> Result<GameSubmission> {
    let repo = SubmissionRepository::new(store);
    repo.submit(registration_id, request, Utc::now()).await
}

/// List a team's submissions in every status
pub async fn list_team_submissions(store: &Store, registration_id: Uuid) -> Result<Vec<GameSubmission>> {
    let repo = SubmissionRepository::new(store);
    repo.list_for_team(registration_id).await
}

/// Get a submission by ID
pub async fn get_submission(store: &Store, submission_id: Uuid) -> Result<GameSubmission> {
    let repo = SubmissionRepository::new(store);
    repo.find(submission_id).await
}

/// Record a host verdict and rebuild the leaderboard
pub async fn verify_submission(
    store: &Store,
    submission_id: Uuid,
    request: &VerifySubmissionRequest,
) -> Result<GameSubmission> {
    let repo = SubmissionRepository::new(store);
    repo.verify(submission_id, request, Utc::now()).await
}

/// Withdraw an unverified submission
pub async fn delete_submission(store: &Store, submission_id: Uuid) -> Result<()> {
    let repo = SubmissionRepository::new(store);
    repo.delete(submission_id).await
}
