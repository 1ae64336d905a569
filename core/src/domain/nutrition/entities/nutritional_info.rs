//! Nutrient value objects and their combination algebra.
//!
//! Every numeric field is optional; `None` is "unknown" and survives
//! combination and scaling without ever being coerced to zero. Each type
//! forms a commutative monoid under `combine` with `Default` (all fields
//! absent) as the identity, which makes the recipe-total fold safe in any
//! order.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::nutrition::aggregate::{
    combine_grades_optional, mean_rounded, round_nutrient, sum_f64_optional, sum_int_optional,
    sum_set_optional,
};
use crate::domain::nutrition::entities::Allergen;
use crate::domain::nutrition::units::{self, Quantity};

fn scale_opt(value: Option<f64>, factor: f64) -> Option<f64> {
    value.map(|v| round_nutrient(v * factor))
}

/// Sugar breakdown, in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sugars {
    pub sugar_g: Option<f64>,
    pub added_sugar_g: Option<f64>,
}

impl Sugars {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            sugar_g: sum_f64_optional(self.sugar_g, other.sugar_g),
            added_sugar_g: sum_f64_optional(self.added_sugar_g, other.added_sugar_g),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            sugar_g: scale_opt(self.sugar_g, factor),
            added_sugar_g: scale_opt(self.added_sugar_g, factor),
        }
    }
}

/// Fat breakdown, in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Fats {
    pub fat_g: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub monounsaturated_fat_g: Option<f64>,
    pub polyunsaturated_fat_g: Option<f64>,
    pub omega_3_fat_g: Option<f64>,
    pub omega_6_fat_g: Option<f64>,
    pub trans_fat_g: Option<f64>,
}

impl Fats {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            fat_g: sum_f64_optional(self.fat_g, other.fat_g),
            saturated_fat_g: sum_f64_optional(self.saturated_fat_g, other.saturated_fat_g),
            monounsaturated_fat_g: sum_f64_optional(
                self.monounsaturated_fat_g,
                other.monounsaturated_fat_g,
            ),
            polyunsaturated_fat_g: sum_f64_optional(
                self.polyunsaturated_fat_g,
                other.polyunsaturated_fat_g,
            ),
            omega_3_fat_g: sum_f64_optional(self.omega_3_fat_g, other.omega_3_fat_g),
            omega_6_fat_g: sum_f64_optional(self.omega_6_fat_g, other.omega_6_fat_g),
            trans_fat_g: sum_f64_optional(self.trans_fat_g, other.trans_fat_g),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            fat_g: scale_opt(self.fat_g, factor),
            saturated_fat_g: scale_opt(self.saturated_fat_g, factor),
            monounsaturated_fat_g: scale_opt(self.monounsaturated_fat_g, factor),
            polyunsaturated_fat_g: scale_opt(self.polyunsaturated_fat_g, factor),
            omega_3_fat_g: scale_opt(self.omega_3_fat_g, factor),
            omega_6_fat_g: scale_opt(self.omega_6_fat_g, factor),
            trans_fat_g: scale_opt(self.trans_fat_g, factor),
        }
    }
}

/// Fiber breakdown, in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Fibers {
    pub fiber_g: Option<f64>,
    pub soluble_fiber_g: Option<f64>,
    pub insoluble_fiber_g: Option<f64>,
}

impl Fibers {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            fiber_g: sum_f64_optional(self.fiber_g, other.fiber_g),
            soluble_fiber_g: sum_f64_optional(self.soluble_fiber_g, other.soluble_fiber_g),
            insoluble_fiber_g: sum_f64_optional(self.insoluble_fiber_g, other.insoluble_fiber_g),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            fiber_g: scale_opt(self.fiber_g, factor),
            soluble_fiber_g: scale_opt(self.soluble_fiber_g, factor),
            insoluble_fiber_g: scale_opt(self.insoluble_fiber_g, factor),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroNutrients {
    /// Kilocalories.
    pub calories: Option<u32>,
    pub carbs_g: Option<f64>,
    pub cholesterol_mg: Option<f64>,
    pub protein_g: Option<f64>,
    pub sugars: Sugars,
    pub fats: Fats,
    pub fibers: Fibers,
}

impl MacroNutrients {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            calories: sum_int_optional(self.calories, other.calories),
            carbs_g: sum_f64_optional(self.carbs_g, other.carbs_g),
            cholesterol_mg: sum_f64_optional(self.cholesterol_mg, other.cholesterol_mg),
            protein_g: sum_f64_optional(self.protein_g, other.protein_g),
            sugars: self.sugars.combine(&other.sugars),
            fats: self.fats.combine(&other.fats),
            fibers: self.fibers.combine(&other.fibers),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self
                .calories
                .map(|kcal| (f64::from(kcal) * factor).round() as u32),
            carbs_g: scale_opt(self.carbs_g, factor),
            cholesterol_mg: scale_opt(self.cholesterol_mg, factor),
            protein_g: scale_opt(self.protein_g, factor),
            sugars: self.sugars.scaled(factor),
            fats: self.fats.scaled(factor),
            fibers: self.fibers.scaled(factor),
        }
    }
}

/// Vitamin content, each in its conventional unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vitamins {
    pub vitamin_a_mcg: Option<f64>,
    pub vitamin_b6_mg: Option<f64>,
    pub vitamin_b12_mcg: Option<f64>,
    pub vitamin_c_mg: Option<f64>,
    pub vitamin_d_mcg: Option<f64>,
    pub vitamin_e_mg: Option<f64>,
    pub vitamin_k_mcg: Option<f64>,
}

impl Vitamins {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            vitamin_a_mcg: sum_f64_optional(self.vitamin_a_mcg, other.vitamin_a_mcg),
            vitamin_b6_mg: sum_f64_optional(self.vitamin_b6_mg, other.vitamin_b6_mg),
            vitamin_b12_mcg: sum_f64_optional(self.vitamin_b12_mcg, other.vitamin_b12_mcg),
            vitamin_c_mg: sum_f64_optional(self.vitamin_c_mg, other.vitamin_c_mg),
            vitamin_d_mcg: sum_f64_optional(self.vitamin_d_mcg, other.vitamin_d_mcg),
            vitamin_e_mg: sum_f64_optional(self.vitamin_e_mg, other.vitamin_e_mg),
            vitamin_k_mcg: sum_f64_optional(self.vitamin_k_mcg, other.vitamin_k_mcg),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            vitamin_a_mcg: scale_opt(self.vitamin_a_mcg, factor),
            vitamin_b6_mg: scale_opt(self.vitamin_b6_mg, factor),
            vitamin_b12_mcg: scale_opt(self.vitamin_b12_mcg, factor),
            vitamin_c_mg: scale_opt(self.vitamin_c_mg, factor),
            vitamin_d_mcg: scale_opt(self.vitamin_d_mcg, factor),
            vitamin_e_mg: scale_opt(self.vitamin_e_mg, factor),
            vitamin_k_mcg: scale_opt(self.vitamin_k_mcg, factor),
        }
    }
}

/// Mineral content, all in milligrams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Minerals {
    pub calcium_mg: Option<f64>,
    pub iron_mg: Option<f64>,
    pub magnesium_mg: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub zinc_mg: Option<f64>,
}

impl Minerals {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            calcium_mg: sum_f64_optional(self.calcium_mg, other.calcium_mg),
            iron_mg: sum_f64_optional(self.iron_mg, other.iron_mg),
            magnesium_mg: sum_f64_optional(self.magnesium_mg, other.magnesium_mg),
            potassium_mg: sum_f64_optional(self.potassium_mg, other.potassium_mg),
            sodium_mg: sum_f64_optional(self.sodium_mg, other.sodium_mg),
            zinc_mg: sum_f64_optional(self.zinc_mg, other.zinc_mg),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            calcium_mg: scale_opt(self.calcium_mg, factor),
            iron_mg: scale_opt(self.iron_mg, factor),
            magnesium_mg: scale_opt(self.magnesium_mg, factor),
            potassium_mg: scale_opt(self.potassium_mg, factor),
            sodium_mg: scale_opt(self.sodium_mg, factor),
            zinc_mg: scale_opt(self.zinc_mg, factor),
        }
    }
}

/// Allergen tags, food-group labels and Nutri-Score classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Classification {
    pub allergens: Option<Vec<Allergen>>,
    pub food_groups: Option<Vec<String>>,
    /// 1 (best) to 5 (worst).
    pub nutri_score: Option<i32>,
    /// Letter grade A-E.
    pub nutri_score_grade: Option<String>,
}

impl Classification {
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            allergens: sum_set_optional(self.allergens.clone(), other.allergens.clone()),
            food_groups: sum_set_optional(self.food_groups.clone(), other.food_groups.clone()),
            nutri_score: sum_int_optional(self.nutri_score, other.nutri_score),
            nutri_score_grade: combine_grades_optional(
                self.nutri_score_grade.clone(),
                other.nutri_score_grade.clone(),
            ),
        }
    }
}

/// Complete nutritional information for one ingredient, expressed per the
/// reference basis in `quantity` (per 100 g as persisted, per the requested
/// quantity after scaling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientNutritionalInfo {
    pub quantity: Quantity,
    pub classification: Classification,
    pub macro_nutrients: MacroNutrients,
    pub vitamins: Vitamins,
    pub minerals: Minerals,
}

impl IngredientNutritionalInfo {
    /// Field-wise combination. The left operand's basis quantity is kept.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            quantity: self.quantity,
            classification: self.classification.combine(&other.classification),
            macro_nutrients: self.macro_nutrients.combine(&other.macro_nutrients),
            vitamins: self.vitamins.combine(&other.vitamins),
            minerals: self.minerals.combine(&other.minerals),
        }
    }

    /// Rescales every present value from the current basis to `requested`.
    /// Absent fields stay absent. Fails when the requested unit cannot be
    /// related to the basis unit.
    pub fn scaled_to(&self, requested: Quantity) -> Result<Self, CoreError> {
        let factor = units::scale_factor(&self.quantity, &requested)?;
        Ok(Self {
            quantity: requested,
            classification: self.classification.clone(),
            macro_nutrients: self.macro_nutrients.scaled(factor),
            vitamins: self.vitamins.scaled(factor),
            minerals: self.minerals.scaled(factor),
        })
    }

    /// Folds `combine` over `values` starting from the identity, then
    /// replaces the fold's Nutri-Score with the rounded mean of the present
    /// per-input scores (absent when none carries a score).
    pub fn calculate_total(values: &[Self]) -> Self {
        let scores: Vec<i32> = values
            .iter()
            .filter_map(|v| v.classification.nutri_score)
            .collect();

        let mut total = values
            .iter()
            .fold(Self::default(), |acc, value| acc.combine(value));
        total.classification.nutri_score = mean_rounded(&scores);
        total
    }
}
