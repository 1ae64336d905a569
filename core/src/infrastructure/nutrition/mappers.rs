use crate::{domain::nutrition::entities::NutritionRecord, entity::nutritional_info};

impl From<&nutritional_info::Model> for NutritionRecord {
    fn from(model: &nutritional_info::Model) -> Self {
        Self {
            code: model.code.clone(),
            product_name: model.product_name.clone(),
            generic_name: model.generic_name.clone(),
            allergens: model.allergens.clone().unwrap_or_default(),
            food_groups: model.food_groups.clone(),
            nutri_score: model.nutriscore_score,
            nutri_score_grade: model.nutriscore_grade.clone(),
            energy_kcal_100g: model.energy_kcal_100g,
            carbohydrates_100g: model.carbohydrates_100g,
            cholesterol_100g: model.cholesterol_100g,
            proteins_100g: model.proteins_100g,
            sugars_100g: model.sugars_100g,
            added_sugars_100g: model.added_sugars_100g,
            fat_100g: model.fat_100g,
            saturated_fat_100g: model.saturated_fat_100g,
            monounsaturated_fat_100g: model.monounsaturated_fat_100g,
            polyunsaturated_fat_100g: model.polyunsaturated_fat_100g,
            omega_3_fat_100g: model.omega_3_fat_100g,
            omega_6_fat_100g: model.omega_6_fat_100g,
            trans_fat_100g: model.trans_fat_100g,
            fiber_100g: model.fiber_100g,
            soluble_fiber_100g: model.soluble_fiber_100g,
            insoluble_fiber_100g: model.insoluble_fiber_100g,
            vitamin_a_100g: model.vitamin_a_100g,
            vitamin_b6_100g: model.vitamin_b6_100g,
            vitamin_b12_100g: model.vitamin_b12_100g,
            vitamin_c_100g: model.vitamin_c_100g,
            vitamin_d_100g: model.vitamin_d_100g,
            vitamin_e_100g: model.vitamin_e_100g,
            vitamin_k_100g: model.vitamin_k_100g,
            calcium_100g: model.calcium_100g,
            iron_100g: model.iron_100g,
            magnesium_100g: model.magnesium_100g,
            potassium_100g: model.potassium_100g,
            sodium_100g: model.sodium_100g,
            zinc_100g: model.zinc_100g,
        }
    }
}

impl From<nutritional_info::Model> for NutritionRecord {
    fn from(model: nutritional_info::Model) -> Self {
        Self::from(&model)
    }
}
