use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::GetIngredientNutritionParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use larder_core::domain::nutrition::{
    entities::{Classification, IngredientNutritionalInfo, MacroNutrients, Minerals, Vitamins},
    ports::NutritionService,
    value_objects::GetIngredientNutritionInput,
};

/// Nutritional info scaled to the requested quantity. The reference basis
/// stays server-side; the body mirrors what was asked for.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IngredientNutritionalInfoResponse {
    pub classification: Classification,
    pub macro_nutrients: MacroNutrients,
    pub vitamins: Vitamins,
    pub minerals: Minerals,
}

impl From<IngredientNutritionalInfo> for IngredientNutritionalInfoResponse {
    fn from(info: IngredientNutritionalInfo) -> Self {
        Self {
            classification: info.classification,
            macro_nutrients: info.macro_nutrients,
            vitamins: info.vitamins,
            minerals: info.minerals,
        }
    }
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}/nutritional-info",
    tag = "nutritional-info",
    summary = "Get nutritional info for an ingredient",
    description = "Returns all nutritional info for the given ingredient, scaled to the requested quantity when one is supplied.",
    params(
        ("ingredient_id" = i64, Path, description = "Ingredient ID"),
        GetIngredientNutritionParams,
    ),
    responses(
        (status = 200, body = IngredientNutritionalInfoResponse),
        (status = 400, description = "Half-supplied quantity or incompatible units"),
        (status = 404, description = "Unknown ingredient or no nutrition data"),
        (status = 500, description = "Malformed stored nutrition data"),
    ),
)]
pub async fn get_ingredient_nutrition(
    Path(ingredient_id): Path<i64>,
    Query(params): Query<GetIngredientNutritionParams>,
    State(state): State<AppState>,
) -> Result<Response<IngredientNutritionalInfoResponse>, ApiError> {
    let quantity = params.into_quantity()?;

    let info = state
        .service
        .get_ingredient_nutrition(GetIngredientNutritionInput {
            ingredient_id,
            quantity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IngredientNutritionalInfoResponse::from(info)))
}
