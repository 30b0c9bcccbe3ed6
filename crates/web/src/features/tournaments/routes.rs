use axum::{
    Router,
    routing::get,
};
use tkr::Store;

use super::handlers::{create_tournament, get_config, list_tournaments, update_config};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/", get(list_tournaments).post(create_tournament))
        .route("/:tournament_id", get(get_config).put(update_config))
}
