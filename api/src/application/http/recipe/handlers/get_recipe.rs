use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use larder_core::domain::recipe::{
    entities::{Recipe, RecipeIngredient},
    ports::RecipeService,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub servings: Option<i32>,
    pub ingredients: Vec<RecipeIngredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            servings: recipe.servings,
            ingredients: recipe.ingredients,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get a recipe",
    description = "Returns the recipe with its ingredient entries in recipe order.",
    params(
        ("recipe_id" = i64, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 404, description = "Unknown recipe"),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse::from(recipe)))
}
