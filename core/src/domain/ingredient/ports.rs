use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::entities::Ingredient};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn get_by_id(
        &self,
        ingredient_id: i64,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn get_ingredient(
        &self,
        ingredient_id: i64,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}
