use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    nutrition::ports::{NutritionCacheRepository, NutritionRepository},
    recipe::ports::RecipeRepository,
    suggestions::ports::LlmClient,
};

impl<R, I, N, C, H, L> HealthCheckService for Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.ping().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
