use crate::domain::common::{LarderConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    ingredient::PostgresIngredientRepository,
    llm::GeminiLlmClient,
    nutrition::{InMemoryNutritionCache, PostgresNutritionRepository},
    recipe::PostgresRecipeRepository,
};

pub type LarderService = Service<
    PostgresRecipeRepository,
    PostgresIngredientRepository,
    PostgresNutritionRepository,
    InMemoryNutritionCache,
    PostgresHealthCheckRepository,
    GeminiLlmClient,
>;

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;

    Ok(Service::new(
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresNutritionRepository::new(postgres.get_db()),
        InMemoryNutritionCache::default(),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        GeminiLlmClient::new(config.llm.gemini_api_key, config.llm.gemini_model),
    ))
}
