use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrition::ports::{NutritionCacheRepository, NutritionRepository},
    recipe::{
        entities::Recipe,
        ports::{RecipeRepository, RecipeService},
    },
    suggestions::ports::LlmClient,
};

impl<R, I, N, C, H, L> RecipeService for Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe, CoreError> {
        info!(recipe_id, "getting recipe");
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::RecipeNotFound(recipe_id))
    }
}
