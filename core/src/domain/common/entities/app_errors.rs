use thiserror::Error;

use crate::domain::nutrition::units::IngredientUnit;

/// Domain-level error kinds, mapped to transport statuses at the API boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("recipe {0} not found")]
    RecipeNotFound(i64),

    #[error("ingredient {0} not found")]
    IngredientNotFound(i64),

    #[error("no nutritional data found for ingredient '{0}'")]
    NutritionDataNotFound(String),

    #[error("cannot convert between {from} and {to}")]
    IncompatibleUnits {
        from: IngredientUnit,
        to: IngredientUnit,
    },

    #[error("malformed nutritional record for ingredient '{0}'")]
    NutritionConversion(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("llm error: {0}")]
    Llm(String),

    #[error("internal error: {0}")]
    Internal(String),
}
