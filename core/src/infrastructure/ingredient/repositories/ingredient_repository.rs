use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository},
    },
    entity::ingredients::Entity,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn get_by_id(&self, ingredient_id: i64) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient {ingredient_id}: {e}");
                CoreError::Internal("ingredient lookup failed".into())
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }
}
