use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tkr::error::{EngineError, ValidationError as EngineValidation};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Engine(EngineError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "Engine error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

fn engine_status(error: &EngineError) -> StatusCode {
    match error {
        EngineError::NotFound => StatusCode::NOT_FOUND,
        EngineError::Configuration(_) | EngineError::Consistency { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::Eligibility(_) => StatusCode::FORBIDDEN,
        EngineError::Validation(
            EngineValidation::DuplicateGameNumber(_)
            | EngineValidation::DuplicateTeamName(_)
            | EngineValidation::SubmissionCapReached { .. }
            | EngineValidation::SubmissionLocked,
        ) => StatusCode::CONFLICT,
        EngineError::Validation(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Engine(e) => engine_status(e),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Engine(EngineError::NotFound) | Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Engine(EngineError::Eligibility(e)) => {
                tracing::debug!("Submission outside window: {}", e);
                json!({
                    "error": e.to_string(),
                    "deadline": e.deadline()
                })
            }
            Self::Engine(e) if e.is_user_facing() => {
                tracing::debug!("Submission rejected: {}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::Engine(e) => {
                tracing::warn!("Rejected at boundary: {}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<EngineError> for WebError {
    fn from(error: EngineError) -> Self {
        Self::Engine(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tkr::error::EligibilityError;

    fn status_of(error: EngineError) -> StatusCode {
        WebError::from(error).into_response().status()
    }

    #[test]
    fn maps_engine_errors_to_statuses() {
        assert_eq!(status_of(EngineError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(EngineError::Configuration("no multipliers".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(EngineError::Consistency {
                declared: 10,
                actual: 9
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(EngineValidation::DuplicateGameNumber(3).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(EngineValidation::InvalidPlacement(0).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn eligibility_maps_to_forbidden() {
        let opens_at = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(
            status_of(EligibilityError::NotYetOpen { opens_at }.into()),
            StatusCode::FORBIDDEN
        );
    }
}
