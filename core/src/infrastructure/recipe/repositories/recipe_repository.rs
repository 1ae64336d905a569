use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::{ingredients, recipe_ingredients, recipes},
    infrastructure::recipe::mappers::to_recipe_ingredient,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_by_id(&self, recipe_id: i64) -> Result<Option<Recipe>, CoreError> {
        let Some(recipe) = recipes::Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe {recipe_id}: {e}");
                CoreError::Internal("recipe lookup failed".into())
            })?
        else {
            return Ok(None);
        };

        let entries = recipe_ingredients::Entity::find()
            .find_also_related(ingredients::Entity)
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .order_by(recipe_ingredients::Column::Position, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredients of recipe {recipe_id}: {e}");
                CoreError::Internal("recipe ingredient lookup failed".into())
            })?;

        Ok(Some(Recipe {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            servings: recipe.servings,
            created_at: recipe.created_at.to_utc(),
            updated_at: recipe.updated_at.to_utc(),
            ingredients: entries
                .iter()
                .map(|(row, ingredient)| to_recipe_ingredient(row, ingredient.as_ref()))
                .collect(),
        }))
    }
}
