use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tkr::{Store, dto::tournament::TournamentConfigRequest, models::TournamentConfig};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments successfully", body = Vec<TournamentConfig>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(store): State<Store>,
) -> Result<Json<Vec<TournamentConfig>>, WebError> {
    let tournaments = services::list_tournaments(&store).await?;

    Ok(Json(tournaments))
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament configuration", body = TournamentConfig),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_config(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let config = services::get_config(&store, tournament_id).await?;

    Ok(Json(config).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = TournamentConfigRequest,
    responses(
        (status = 201, description = "Tournament created successfully", body = TournamentConfig),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Invalid scoring configuration")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(store): State<Store>,
    Json(req): Json<TournamentConfigRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let config = services::create_tournament(&store, req).await?;

    Ok((StatusCode::CREATED, Json(config)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = TournamentConfigRequest,
    responses(
        (status = 200, description = "Configuration replaced; existing scores are kept", body = TournamentConfig),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tournament not found"),
        (status = 422, description = "Invalid scoring configuration, or a team size change after teams registered")
    ),
    tag = "tournaments"
)]
pub async fn update_config(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<TournamentConfigRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let config = services::update_config(&store, tournament_id, req).await?;

    Ok(Json(config).into_response())
}
