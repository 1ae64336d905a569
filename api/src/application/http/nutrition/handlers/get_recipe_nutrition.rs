use axum::extract::{Path, Query, State};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::{
        handlers::get_ingredient_nutrition::IngredientNutritionalInfoResponse,
        validators::GetRecipeNutritionParams,
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::nutrition::{
    ports::NutritionService,
    value_objects::{GetRecipeNutritionInput, RecipeNutritionalInfo},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeNutritionalInfoResponse {
    /// Per-ingredient nutritional data, in recipe order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<IndexMap<i64, IngredientNutritionalInfoResponse>>,
    /// Ingredient IDs whose data could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_ingredients: Option<Vec<i64>>,
    /// Aggregated totals over the resolvable ingredients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<IngredientNutritionalInfoResponse>,
}

impl From<RecipeNutritionalInfo> for RecipeNutritionalInfoResponse {
    fn from(info: RecipeNutritionalInfo) -> Self {
        Self {
            ingredients: info.ingredients.map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, entry)| (id, entry.into()))
                    .collect()
            }),
            missing_ingredients: info.missing_ingredients,
            total: info.total.map(Into::into),
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/nutritional-info",
    tag = "nutritional-info",
    summary = "Get nutritional info for a recipe",
    description = "Returns nutritional info for all ingredients in the recipe and/or their aggregated total. Answers 206 with X-Partial-Content when some ingredients could not be resolved.",
    params(
        ("recipe_id" = i64, Path, description = "Recipe ID"),
        GetRecipeNutritionParams,
    ),
    responses(
        (status = 200, body = RecipeNutritionalInfoResponse),
        (status = 206, body = RecipeNutritionalInfoResponse, description = "Some ingredients missing"),
        (status = 400, description = "Both include flags false"),
        (status = 404, description = "Unknown recipe"),
    ),
)]
pub async fn get_recipe_nutrition(
    Path(recipe_id): Path<i64>,
    Query(params): Query<GetRecipeNutritionParams>,
    State(state): State<AppState>,
) -> Result<Response<RecipeNutritionalInfoResponse>, ApiError> {
    params.validate_flags()?;

    let result = state
        .service
        .get_recipe_nutrition(GetRecipeNutritionInput {
            recipe_id,
            include_total: params.include_total,
            include_ingredients: params.include_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    let partial = result.is_partial();
    let body = RecipeNutritionalInfoResponse::from(result);
    if partial {
        Ok(Response::PartialContent(body))
    } else {
        Ok(Response::OK(body))
    }
}
