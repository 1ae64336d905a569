use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_by_id(
        &self,
        recipe_id: i64,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipe(&self, recipe_id: i64)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
