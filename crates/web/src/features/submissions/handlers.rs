use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tkr::{
    Store,
    dto::submission::{SubmitGameRequest, VerifySubmissionRequest},
    models::GameSubmission,
    services::submission_window::Eligibility,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/registrations/{registration_id}/eligibility",
    params(
        ("registration_id" = Uuid, Path, description = "Team registration ID")
    ),
    responses(
        (status = 200, description = "Current submission window state", body = Eligibility),
        (status = 404, description = "Registration not found")
    ),
    tag = "submissions"
)]
pub async fn check_eligibility(
    State(store): State<Store>,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let eligibility = services::check_eligibility(&store, registration_id).await?;

    Ok(Json(eligibility).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{registration_id}/submissions",
    params(
        ("registration_id" = Uuid, Path, description = "Team registration ID")
    ),
    request_body = SubmitGameRequest,
    responses(
        (status = 201, description = "Game accepted and scored, pending verification", body = GameSubmission),
        (status = 400, description = "Malformed submission"),
        (status = 403, description = "Outside the team's submission window"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Duplicate game number or submission limit reached")
    ),
    tag = "submissions"
)]
pub async fn submit_game(
    State(store): State<Store>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<SubmitGameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let submission = services::submit_game(&store, registration_id, &req).await?;

    Ok((StatusCode::CREATED, Json(submission)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{registration_id}/submissions",
    params(
        ("registration_id" = Uuid, Path, description = "Team registration ID")
    ),
    responses(
        (status = 200, description = "Team submissions ordered by game number", body = Vec<GameSubmission>),
        (status = 404, description = "Registration not found")
    ),
    tag = "submissions"
)]
pub async fn list_team_submissions(
    State(store): State<Store>,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submissions = services::list_team_submissions(&store, registration_id).await?;

    Ok(Json(submissions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions/{submission_id}",
    params(
        ("submission_id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission found", body = GameSubmission),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions"
)]
pub async fn get_submission(
    State(store): State<Store>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let submission = services::get_submission(&store, submission_id).await?;

    Ok(Json(submission).into_response())
}

#[utoipa::path(
    put,
    path = "/api/submissions/{submission_id}/verification",
    params(
        ("submission_id" = Uuid, Path, description = "Submission ID")
    ),
    request_body = VerifySubmissionRequest,
    responses(
        (status = 200, description = "Verdict recorded, leaderboard rebuilt", body = GameSubmission),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions"
)]
pub async fn verify_submission(
    State(store): State<Store>,
    Path(submission_id): Path<Uuid>,
    Json(req): Json<VerifySubmissionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let submission = services::verify_submission(&store, submission_id, &req).await?;

    Ok(Json(submission).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/submissions/{submission_id}",
    params(
        ("submission_id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 204, description = "Submission withdrawn"),
        (status = 404, description = "Submission not found"),
        (status = 409, description = "Verified submissions cannot be withdrawn")
    ),
    tag = "submissions"
)]
pub async fn delete_submission(
    State(store): State<Store>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_submission(&store, submission_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
