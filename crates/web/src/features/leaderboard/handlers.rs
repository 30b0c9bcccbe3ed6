use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tkr::{
    Store,
    models::{LeaderboardEntry, PrizePool},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/leaderboard",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Last published standings", body = Vec<LeaderboardEntry>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entries = services::get_leaderboard(&store, tournament_id).await?;

    Ok(Json(entries.as_slice()).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{tournament_id}/leaderboard/refresh",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Freshly rebuilt standings", body = Vec<LeaderboardEntry>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "leaderboard"
)]
pub async fn refresh_leaderboard(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entries = services::refresh_leaderboard(&store, tournament_id).await?;

    Ok(Json(entries.as_slice()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/prize-pool",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Prize pool after host cut", body = PrizePool),
        (status = 404, description = "Tournament not found or prize pool hidden")
    ),
    tag = "leaderboard"
)]
pub async fn get_prize_pool(
    State(store): State<Store>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let pool = services::get_prize_pool(&store, tournament_id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(pool).into_response())
}
