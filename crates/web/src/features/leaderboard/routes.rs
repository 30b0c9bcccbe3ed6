use axum::{
    Router,
    routing::{get, post},
};
use tkr::Store;

use super::handlers::{get_leaderboard, get_prize_pool, refresh_leaderboard};

/// Mounted under `/tournaments`.
pub fn routes() -> Router<Store> {
    Router::new()
        .route("/:tournament_id/leaderboard", get(get_leaderboard))
        .route("/:tournament_id/leaderboard/refresh", post(refresh_leaderboard))
        .route("/:tournament_id/prize-pool", get(get_prize_pool))
}
