use axum::{
    Router,
    routing::{get, put},
};
use tkr::Store;

use super::handlers::{get_registration, list_registrations, register_team, update_payment};

/// Mounted under `/tournaments`.
pub fn tournament_routes() -> Router<Store> {
    Router::new().route(
        "/:tournament_id/registrations",
        get(list_registrations).post(register_team),
    )
}

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/:registration_id", get(get_registration))
        .route("/:registration_id/payment", put(update_payment))
}
