use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use tkr::{dto::fee::EntryFeeQuery, models::FeeBreakdown};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/entry-fee",
    params(EntryFeeQuery),
    responses(
        (status = 200, description = "Fee after rerun and free-entry discounts", body = FeeBreakdown),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "fees"
)]
pub async fn calculate_entry_fee(Query(query): Query<EntryFeeQuery>) -> Result<Response, WebError> {
    query.validate()?;

    let base_fee = query.base_fee().map_err(WebError::BadRequest)?;
    let team_size = query.team_size().map_err(WebError::BadRequest)?;

    let fee = services::calculate_entry_fee(
        base_fee,
        query.is_rerunning,
        query.free_entry_count,
        team_size,
    );

    Ok(Json(fee).into_response())
}
