use axum::{
    Router,
    routing::{get, put},
};
use tkr::Store;

use super::handlers::{
    check_eligibility, delete_submission, get_submission, list_team_submissions, submit_game,
    verify_submission,
};

/// Mounted under `/registrations`.
pub fn registration_routes() -> Router<Store> {
    Router::new()
        .route("/:registration_id/eligibility", get(check_eligibility))
        .route(
            "/:registration_id/submissions",
            get(list_team_submissions).post(submit_game),
        )
}

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/:submission_id", get(get_submission).delete(delete_submission))
        .route("/:submission_id/verification", put(verify_submission))
}
