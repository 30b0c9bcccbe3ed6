use axum::{Router, routing::get};
use tkr::Store;

use super::handlers::calculate_entry_fee;

pub fn routes() -> Router<Store> {
    Router::new().route("/entry-fee", get(calculate_entry_fee))
}
