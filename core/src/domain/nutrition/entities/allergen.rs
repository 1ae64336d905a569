use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed allergen vocabulary carried on nutrition rows. Unrecognized store
/// values collapse to `Unknown` instead of failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Allergen {
    Milk,
    Eggs,
    Fish,
    Shellfish,
    TreeNuts,
    Peanuts,
    Wheat,
    Soybeans,
    Sesame,
    Celery,
    Mustard,
    Lupin,
    Sulphites,
    Almonds,
    Cashews,
    Hazelnuts,
    Walnuts,
    Gluten,
    Coconut,
    Corn,
    Yeast,
    Gelatin,
    None,
    Unknown,
}

impl FromStr for Allergen {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        let allergen = match normalized.as_str() {
            "MILK" => Self::Milk,
            "EGGS" => Self::Eggs,
            "FISH" => Self::Fish,
            "SHELLFISH" => Self::Shellfish,
            "TREE_NUTS" => Self::TreeNuts,
            "PEANUTS" => Self::Peanuts,
            "WHEAT" => Self::Wheat,
            "SOYBEANS" => Self::Soybeans,
            "SESAME" => Self::Sesame,
            "CELERY" => Self::Celery,
            "MUSTARD" => Self::Mustard,
            "LUPIN" => Self::Lupin,
            "SULPHITES" => Self::Sulphites,
            "ALMONDS" => Self::Almonds,
            "CASHEWS" => Self::Cashews,
            "HAZELNUTS" => Self::Hazelnuts,
            "WALNUTS" => Self::Walnuts,
            "GLUTEN" => Self::Gluten,
            "COCONUT" => Self::Coconut,
            "CORN" => Self::Corn,
            "YEAST" => Self::Yeast,
            "GELATIN" => Self::Gelatin,
            "NONE" => Self::None,
            _ => Self::Unknown,
        };
        Ok(allergen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_spellings() {
        assert_eq!("tree nuts".parse(), Ok(Allergen::TreeNuts));
        assert_eq!("MILK".parse(), Ok(Allergen::Milk));
        assert_eq!("unheard-of".parse(), Ok(Allergen::Unknown));
    }
}
