use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use larder_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            created_at: ingredient.created_at,
            updated_at: ingredient.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Get an ingredient",
    params(
        ("ingredient_id" = i64, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = IngredientResponse),
        (status = 404, description = "Unknown ingredient"),
    ),
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<IngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IngredientResponse::from(ingredient)))
}
