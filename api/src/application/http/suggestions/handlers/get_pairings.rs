use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    suggestions::validators::GetPairingsParams,
};
use larder_core::domain::suggestions::{
    entities::PairingSuggestion, ports::SuggestionService, value_objects::GetPairingsInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PairingSuggestionsResponse {
    pub recipe_id: i64,
    pub pairing_suggestions: Vec<PairingSuggestion>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/pairings",
    tag = "suggestions",
    summary = "Get pairing suggestions for a recipe",
    params(
        ("recipe_id" = i64, Path, description = "Recipe ID"),
        GetPairingsParams,
    ),
    responses(
        (status = 200, body = PairingSuggestionsResponse),
        (status = 404, description = "Unknown recipe"),
        (status = 502, description = "Suggestion backend unavailable"),
    ),
)]
pub async fn get_pairings(
    Path(recipe_id): Path<i64>,
    Query(params): Query<GetPairingsParams>,
    State(state): State<AppState>,
) -> Result<Response<PairingSuggestionsResponse>, ApiError> {
    let limit = params.validated_limit()?;

    let pairing_suggestions = state
        .service
        .suggest_pairings(GetPairingsInput { recipe_id, limit })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PairingSuggestionsResponse {
        recipe_id,
        count: pairing_suggestions.len(),
        pairing_suggestions,
    }))
}
