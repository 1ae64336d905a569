//! Raw persisted nutrition row, decoupled from the ORM entity.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::nutrition::entities::{
    Allergen, Classification, Fats, Fibers, IngredientNutritionalInfo, MacroNutrients, Minerals,
    Sugars, Vitamins,
};
use crate::domain::nutrition::units::{IngredientUnit, Quantity};

/// One store row per product code, with fixed-point values per 100 g.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionRecord {
    pub code: String,
    pub product_name: Option<String>,
    pub generic_name: Option<String>,
    pub allergens: Vec<String>,
    pub food_groups: Option<String>,
    pub nutri_score: Option<i32>,
    pub nutri_score_grade: Option<String>,

    pub energy_kcal_100g: Option<Decimal>,
    pub carbohydrates_100g: Option<Decimal>,
    pub cholesterol_100g: Option<Decimal>,
    pub proteins_100g: Option<Decimal>,

    pub sugars_100g: Option<Decimal>,
    pub added_sugars_100g: Option<Decimal>,

    pub fat_100g: Option<Decimal>,
    pub saturated_fat_100g: Option<Decimal>,
    pub monounsaturated_fat_100g: Option<Decimal>,
    pub polyunsaturated_fat_100g: Option<Decimal>,
    pub omega_3_fat_100g: Option<Decimal>,
    pub omega_6_fat_100g: Option<Decimal>,
    pub trans_fat_100g: Option<Decimal>,

    pub fiber_100g: Option<Decimal>,
    pub soluble_fiber_100g: Option<Decimal>,
    pub insoluble_fiber_100g: Option<Decimal>,

    pub vitamin_a_100g: Option<Decimal>,
    pub vitamin_b6_100g: Option<Decimal>,
    pub vitamin_b12_100g: Option<Decimal>,
    pub vitamin_c_100g: Option<Decimal>,
    pub vitamin_d_100g: Option<Decimal>,
    pub vitamin_e_100g: Option<Decimal>,
    pub vitamin_k_100g: Option<Decimal>,

    pub calcium_100g: Option<Decimal>,
    pub iron_100g: Option<Decimal>,
    pub magnesium_100g: Option<Decimal>,
    pub potassium_100g: Option<Decimal>,
    pub sodium_100g: Option<Decimal>,
    pub zinc_100g: Option<Decimal>,
}

impl NutritionRecord {
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .or(self.generic_name.as_deref())
            .unwrap_or(&self.code)
    }
}

/// Reference basis the store contract guarantees for every numeric column.
const REFERENCE_BASIS_G: f64 = 100.0;

fn field(value: Option<Decimal>) -> Result<Option<f64>, ()> {
    match value {
        None => Ok(None),
        Some(v) => {
            let v = v.to_f64().ok_or(())?;
            if v < 0.0 { Err(()) } else { Ok(Some(v)) }
        }
    }
}

fn calories(value: Option<Decimal>) -> Result<Option<u32>, ()> {
    match value {
        None => Ok(None),
        Some(v) => v.round().to_u32().map(Some).ok_or(()),
    }
}

impl TryFrom<NutritionRecord> for IngredientNutritionalInfo {
    type Error = CoreError;

    /// Maps a persisted row to the structured per-100 g shape. Negative or
    /// unrepresentable stored values reject the whole record.
    fn try_from(record: NutritionRecord) -> Result<Self, Self::Error> {
        let conversion_error =
            || CoreError::NutritionConversion(record.display_name().to_owned());

        if let Some(score) = record.nutri_score
            && !(1..=5).contains(&score)
        {
            return Err(conversion_error());
        }

        let allergens: Vec<Allergen> = record
            .allergens
            .iter()
            .filter_map(|raw| raw.parse().ok())
            .collect();

        let macro_nutrients = MacroNutrients {
            calories: calories(record.energy_kcal_100g).map_err(|_| conversion_error())?,
            carbs_g: field(record.carbohydrates_100g).map_err(|_| conversion_error())?,
            cholesterol_mg: field(record.cholesterol_100g).map_err(|_| conversion_error())?,
            protein_g: field(record.proteins_100g).map_err(|_| conversion_error())?,
            sugars: Sugars {
                sugar_g: field(record.sugars_100g).map_err(|_| conversion_error())?,
                added_sugar_g: field(record.added_sugars_100g).map_err(|_| conversion_error())?,
            },
            fats: Fats {
                fat_g: field(record.fat_100g).map_err(|_| conversion_error())?,
                saturated_fat_g: field(record.saturated_fat_100g)
                    .map_err(|_| conversion_error())?,
                monounsaturated_fat_g: field(record.monounsaturated_fat_100g)
                    .map_err(|_| conversion_error())?,
                polyunsaturated_fat_g: field(record.polyunsaturated_fat_100g)
                    .map_err(|_| conversion_error())?,
                omega_3_fat_g: field(record.omega_3_fat_100g).map_err(|_| conversion_error())?,
                omega_6_fat_g: field(record.omega_6_fat_100g).map_err(|_| conversion_error())?,
                trans_fat_g: field(record.trans_fat_100g).map_err(|_| conversion_error())?,
            },
            fibers: Fibers {
                fiber_g: field(record.fiber_100g).map_err(|_| conversion_error())?,
                soluble_fiber_g: field(record.soluble_fiber_100g)
                    .map_err(|_| conversion_error())?,
                insoluble_fiber_g: field(record.insoluble_fiber_100g)
                    .map_err(|_| conversion_error())?,
            },
        };

        let vitamins = Vitamins {
            vitamin_a_mcg: field(record.vitamin_a_100g).map_err(|_| conversion_error())?,
            vitamin_b6_mg: field(record.vitamin_b6_100g).map_err(|_| conversion_error())?,
            vitamin_b12_mcg: field(record.vitamin_b12_100g).map_err(|_| conversion_error())?,
            vitamin_c_mg: field(record.vitamin_c_100g).map_err(|_| conversion_error())?,
            vitamin_d_mcg: field(record.vitamin_d_100g).map_err(|_| conversion_error())?,
            vitamin_e_mg: field(record.vitamin_e_100g).map_err(|_| conversion_error())?,
            vitamin_k_mcg: field(record.vitamin_k_100g).map_err(|_| conversion_error())?,
        };

        let minerals = Minerals {
            calcium_mg: field(record.calcium_100g).map_err(|_| conversion_error())?,
            iron_mg: field(record.iron_100g).map_err(|_| conversion_error())?,
            magnesium_mg: field(record.magnesium_100g).map_err(|_| conversion_error())?,
            potassium_mg: field(record.potassium_100g).map_err(|_| conversion_error())?,
            sodium_mg: field(record.sodium_100g).map_err(|_| conversion_error())?,
            zinc_mg: field(record.zinc_100g).map_err(|_| conversion_error())?,
        };

        Ok(IngredientNutritionalInfo {
            quantity: Quantity::new(REFERENCE_BASIS_G, IngredientUnit::G),
            classification: Classification {
                allergens: if allergens.is_empty() {
                    None
                } else {
                    Some(allergens)
                },
                food_groups: record
                    .food_groups
                    .as_ref()
                    .filter(|groups| !groups.trim().is_empty())
                    .map(|groups| vec![groups.clone()]),
                nutri_score: record.nutri_score,
                nutri_score_grade: record.nutri_score_grade.clone(),
            },
            macro_nutrients,
            vitamins,
            minerals,
        })
    }
}

#[cfg(test)]
impl NutritionRecord {
    /// All-absent fixture for tests.
    pub(crate) fn empty(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            product_name: None,
            generic_name: None,
            allergens: Vec::new(),
            food_groups: None,
            nutri_score: None,
            nutri_score_grade: None,
            energy_kcal_100g: None,
            carbohydrates_100g: None,
            cholesterol_100g: None,
            proteins_100g: None,
            sugars_100g: None,
            added_sugars_100g: None,
            fat_100g: None,
            saturated_fat_100g: None,
            monounsaturated_fat_100g: None,
            polyunsaturated_fat_100g: None,
            omega_3_fat_100g: None,
            omega_6_fat_100g: None,
            trans_fat_100g: None,
            fiber_100g: None,
            soluble_fiber_100g: None,
            insoluble_fiber_100g: None,
            vitamin_a_100g: None,
            vitamin_b6_100g: None,
            vitamin_b12_100g: None,
            vitamin_c_100g: None,
            vitamin_d_100g: None,
            vitamin_e_100g: None,
            vitamin_k_100g: None,
            calcium_100g: None,
            iron_100g: None,
            magnesium_100g: None,
            potassium_100g: None,
            sodium_100g: None,
            zinc_100g: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn maps_row_to_per_100g_info() {
        let mut record = NutritionRecord::empty("123");
        record.product_name = Some("Rolled oats".into());
        record.energy_kcal_100g = Some(Decimal::new(379, 0));
        record.carbohydrates_100g = Some(Decimal::new(67_700, 3));
        record.allergens = vec!["GLUTEN".into(), "unmapped".into()];
        record.nutri_score = Some(1);
        record.nutri_score_grade = Some("A".into());

        let info = IngredientNutritionalInfo::try_from(record).unwrap();
        assert_eq!(info.quantity, Quantity::new(100.0, IngredientUnit::G));
        assert_eq!(info.macro_nutrients.calories, Some(379));
        assert_eq!(info.macro_nutrients.carbs_g, Some(67.7));
        assert_eq!(info.macro_nutrients.protein_g, None);
        assert_eq!(
            info.classification.allergens,
            Some(vec![Allergen::Gluten, Allergen::Unknown])
        );
        assert_eq!(info.classification.nutri_score, Some(1));
    }

    #[test]
    fn rejects_negative_stored_values() {
        let mut record = NutritionRecord::empty("456");
        record.proteins_100g = Some(Decimal::new(-1, 0));
        let err = IngredientNutritionalInfo::try_from(record).unwrap_err();
        assert!(matches!(err, CoreError::NutritionConversion(_)));
    }

    #[test]
    fn rejects_out_of_range_nutri_score() {
        let mut record = NutritionRecord::empty("789");
        record.nutri_score = Some(9);
        assert!(IngredientNutritionalInfo::try_from(record).is_err());
    }

    #[test]
    fn display_name_prefers_product_then_generic_then_code() {
        let mut record = NutritionRecord::empty("314");
        assert_eq!(record.display_name(), "314");
        record.generic_name = Some("Oats".into());
        assert_eq!(record.display_name(), "Oats");
        record.product_name = Some("Rolled oats".into());
        assert_eq!(record.display_name(), "Rolled oats");
    }
}
