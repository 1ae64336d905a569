use rust_decimal::prelude::ToPrimitive;

use crate::{
    domain::{
        nutrition::units::{IngredientUnit, Quantity},
        recipe::entities::RecipeIngredient,
    },
    entity::{ingredients, recipe_ingredients},
};

/// Joins a recipe-ingredient row with its ingredient row. A dangling
/// ingredient reference keeps the entry (with an empty name) so the
/// aggregator can record it as missing instead of silently dropping it.
pub fn to_recipe_ingredient(
    row: &recipe_ingredients::Model,
    ingredient: Option<&ingredients::Model>,
) -> RecipeIngredient {
    RecipeIngredient {
        ingredient_id: row.ingredient_id,
        name: ingredient.map(|i| i.name.clone()).unwrap_or_default(),
        position: row.position,
        quantity: to_quantity(row),
    }
}

/// A stored amount without a parsable unit falls back to the dimensionless
/// count unit; no amount at all means "resolve as stored".
fn to_quantity(row: &recipe_ingredients::Model) -> Option<Quantity> {
    let amount = row.amount.as_ref().and_then(|a| a.to_f64())?;
    let measurement = row
        .measurement
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(IngredientUnit::Unit);
    Some(Quantity::new(amount, measurement))
}
