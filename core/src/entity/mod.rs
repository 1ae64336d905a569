pub mod ingredients;
pub mod nutritional_info;
pub mod recipe_ingredients;
pub mod recipes;
