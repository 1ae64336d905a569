use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{IngredientNutritionalInfo, NutritionRecord},
        value_objects::{GetIngredientNutritionInput, GetRecipeNutritionInput, RecipeNutritionalInfo},
    },
};

/// Repository trait for persisted nutrition rows. Both lookups are
/// case-insensitive substring matches; the store decides which row wins when
/// several match.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync {
    fn find_by_product_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<NutritionRecord>, CoreError>> + Send;

    fn find_by_generic_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<NutritionRecord>, CoreError>> + Send;
}

/// Read-through cache in front of the nutrition store. Failures are reported
/// but callers must treat them as misses, never as request failures.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionCacheRepository: Send + Sync {
    fn get(
        &self,
        key: String,
    ) -> impl Future<Output = Result<Option<NutritionRecord>, CoreError>> + Send;

    fn set(
        &self,
        key: String,
        record: NutritionRecord,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for nutrition resolution and aggregation.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn get_ingredient_nutrition(
        &self,
        input: GetIngredientNutritionInput,
    ) -> impl Future<Output = Result<IngredientNutritionalInfo, CoreError>> + Send;

    fn get_recipe_nutrition(
        &self,
        input: GetRecipeNutritionInput,
    ) -> impl Future<Output = Result<RecipeNutritionalInfo, CoreError>> + Send;
}
