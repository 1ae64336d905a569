pub mod allergen;
pub mod nutritional_info;
pub mod record;

pub use allergen::Allergen;
pub use nutritional_info::{
    Classification, Fats, Fibers, IngredientNutritionalInfo, MacroNutrients, Minerals, Sugars,
    Vitamins,
};
pub use record::NutritionRecord;
