use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
    },
    nutrition::ports::{NutritionCacheRepository, NutritionRepository},
    recipe::ports::RecipeRepository,
    suggestions::ports::LlmClient,
};

impl<R, I, N, C, H, L> IngredientService for Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn get_ingredient(&self, ingredient_id: i64) -> Result<Ingredient, CoreError> {
        info!(ingredient_id, "getting ingredient");
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::IngredientNotFound(ingredient_id))
    }
}
