use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tkr::{
    Store,
    dto::registration::{CreateRegistrationRequest, UpdatePaymentRequest},
    models::TeamRegistration,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/registrations",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Registered teams", body = Vec<TeamRegistration>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registrations = services::list_registrations(&store, tournament_id).await?;

    Ok(Json(registrations).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{tournament_id}/registrations",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Team registered", body = TeamRegistration),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Team name already registered"),
        (status = 422, description = "Team rank does not match the roster")
    ),
    tag = "registrations"
)]
pub async fn register_team(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::register_team(&store, tournament_id, req).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{registration_id}",
    params(
        ("registration_id" = Uuid, Path, description = "Team registration ID")
    ),
    responses(
        (status = 200, description = "Registration found", body = TeamRegistration),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(store): State<Store>,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::get_registration(&store, registration_id).await?;

    Ok(Json(registration).into_response())
}

#[utoipa::path(
    put,
    path = "/api/registrations/{registration_id}/payment",
    params(
        ("registration_id" = Uuid, Path, description = "Team registration ID")
    ),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment record updated", body = TeamRegistration),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn update_payment(
    State(store): State<Store>,
    Path(registration_id): Path<Uuid>,
    Json(req): Json<UpdatePaymentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::update_payment(&store, registration_id, &req).await?;

    Ok(Json(registration).into_response())
}
