pub mod get_ingredient_nutrition;
pub mod get_recipe_nutrition;
