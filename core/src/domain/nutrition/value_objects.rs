use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::entities::IngredientNutritionalInfo;
use crate::domain::nutrition::units::Quantity;

#[derive(Debug, Clone)]
pub struct GetIngredientNutritionInput {
    pub ingredient_id: i64,
    /// Absent means "as stored" (per the reference basis).
    pub quantity: Option<Quantity>,
}

#[derive(Debug, Clone)]
pub struct GetRecipeNutritionInput {
    pub recipe_id: i64,
    /// At least one of the two flags is true; the HTTP layer rejects the
    /// all-false combination before this input is built.
    pub include_total: bool,
    pub include_ingredients: bool,
}

/// Aggregation result for one recipe. Per-ingredient entries and the missing
/// list keep recipe order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeNutritionalInfo {
    pub ingredients: Option<IndexMap<i64, IngredientNutritionalInfo>>,
    pub missing_ingredients: Option<Vec<i64>>,
    pub total: Option<IngredientNutritionalInfo>,
}

impl RecipeNutritionalInfo {
    /// True when at least one ingredient could not be resolved; the HTTP
    /// layer answers 206 instead of 200 in that case.
    pub fn is_partial(&self) -> bool {
        self.missing_ingredients
            .as_ref()
            .is_some_and(|missing| !missing.is_empty())
    }
}
