use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use larder_core::domain::common::entities::app_errors::CoreError;

/// Transport-level error. Domain error kinds map onto these via `From`;
/// handlers only ever add context, never status codes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RecipeNotFound(_)
            | CoreError::IngredientNotFound(_)
            | CoreError::NutritionDataNotFound(_) => Self::NotFound(err.to_string()),
            CoreError::IncompatibleUnits { .. } => Self::BadRequest(err.to_string()),
            CoreError::Llm(_) => Self::BadGateway(err.to_string()),
            CoreError::NutritionConversion(_) | CoreError::Cache(_) | CoreError::Internal(_) => {
                Self::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ApiErrorBody {
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::domain::nutrition::units::IngredientUnit;

    #[test]
    fn not_found_kinds_map_to_404() {
        for err in [
            CoreError::RecipeNotFound(1),
            CoreError::IngredientNotFound(2),
            CoreError::NutritionDataNotFound("basil".into()),
        ] {
            let api: ApiError = err.into();
            assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn incompatible_units_are_a_client_error() {
        let api: ApiError = CoreError::IncompatibleUnits {
            from: IngredientUnit::Piece,
            to: IngredientUnit::G,
        }
        .into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api, ApiError::BadRequest("cannot convert between piece and g".into()));
    }

    #[test]
    fn conversion_faults_are_server_errors() {
        let api: ApiError = CoreError::NutritionConversion("basil".into()).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn llm_faults_are_bad_gateway() {
        let api: ApiError = CoreError::Llm("timeout".into()).into();
        assert_eq!(api.status_code(), StatusCode::BAD_GATEWAY);
    }
}
