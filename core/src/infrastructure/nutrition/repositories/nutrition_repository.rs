use sea_orm::{
    DatabaseConnection, EntityTrait, QueryFilter,
    prelude::Expr,
    sea_query::extension::postgres::PgExpr,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition::{entities::NutritionRecord, ports::NutritionRepository},
    },
    entity::nutritional_info::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresNutritionRepository {
    pub db: DatabaseConnection,
}

impl PostgresNutritionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive substring match on one name column. The store gives
    /// no ordering guarantee among multiple matches; the first row wins.
    async fn find_by_column(
        &self,
        column: Column,
        name: &str,
    ) -> Result<Option<NutritionRecord>, CoreError> {
        let record = Entity::find()
            .filter(Expr::col(column).ilike(format!("%{name}%")))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search nutrition rows for '{name}': {e}");
                CoreError::Internal("nutrition lookup failed".into())
            })?
            .map(NutritionRecord::from);

        Ok(record)
    }
}

impl NutritionRepository for PostgresNutritionRepository {
    async fn find_by_product_name(&self, name: String) -> Result<Option<NutritionRecord>, CoreError> {
        self.find_by_column(Column::ProductName, &name).await
    }

    async fn find_by_generic_name(&self, name: String) -> Result<Option<NutritionRecord>, CoreError> {
        self.find_by_column(Column::GenericName, &name).await
    }
}
