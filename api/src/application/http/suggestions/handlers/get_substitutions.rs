use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    suggestions::validators::GetSubstitutionsParams,
};
use larder_core::domain::suggestions::{
    entities::SubstitutionSuggestion, ports::SuggestionService,
    value_objects::GetSubstitutionsInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendedSubstitutionsResponse {
    pub ingredient_id: i64,
    pub substitutions: Vec<SubstitutionSuggestion>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}/substitutions",
    tag = "suggestions",
    summary = "Get substitution suggestions for an ingredient",
    description = "Returns LLM-generated substitutes for the ingredient, with replacement amounts when a quantity is supplied.",
    params(
        ("ingredient_id" = i64, Path, description = "Ingredient ID"),
        GetSubstitutionsParams,
    ),
    responses(
        (status = 200, body = RecommendedSubstitutionsResponse),
        (status = 404, description = "Unknown ingredient"),
        (status = 502, description = "Suggestion backend unavailable"),
    ),
)]
pub async fn get_substitutions(
    Path(ingredient_id): Path<i64>,
    Query(params): Query<GetSubstitutionsParams>,
    State(state): State<AppState>,
) -> Result<Response<RecommendedSubstitutionsResponse>, ApiError> {
    let (quantity, limit) = params.into_parts()?;

    let substitutions = state
        .service
        .suggest_substitutions(GetSubstitutionsInput {
            ingredient_id,
            quantity,
            limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendedSubstitutionsResponse {
        ingredient_id,
        count: substitutions.len(),
        substitutions,
    }))
}
