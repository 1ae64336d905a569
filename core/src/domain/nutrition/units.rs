//! Measurement units and quantity scaling.
//!
//! Persisted nutrition rows are expressed per a reference basis (100 g);
//! scaling to a requested quantity converts the request into the basis unit
//! first. Mass and volume cannot be related without an ingredient density,
//! and count units without a per-piece weight, so those conversions fail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    G,
    Kg,
    Oz,
    Lb,
    Ml,
    L,
    Cup,
    Tbsp,
    Tsp,
    Piece,
    Clove,
    Slice,
    Pinch,
    Can,
    Bottle,
    Packet,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Mass,
    Volume,
    Count,
}

impl IngredientUnit {
    pub fn dimension(self) -> Dimension {
        match self {
            Self::G | Self::Kg | Self::Oz | Self::Lb => Dimension::Mass,
            Self::Ml | Self::L | Self::Cup | Self::Tbsp | Self::Tsp => Dimension::Volume,
            _ => Dimension::Count,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Kg => "kg",
            Self::Oz => "oz",
            Self::Lb => "lb",
            Self::Ml => "ml",
            Self::L => "l",
            Self::Cup => "cup",
            Self::Tbsp => "tbsp",
            Self::Tsp => "tsp",
            Self::Piece => "piece",
            Self::Clove => "clove",
            Self::Slice => "slice",
            Self::Pinch => "pinch",
            Self::Can => "can",
            Self::Bottle => "bottle",
            Self::Packet => "packet",
            Self::Unit => "unit",
        }
    }

    /// Grams per one of this unit, for mass units.
    fn gram_factor(self) -> Option<f64> {
        match self {
            Self::G => Some(1.0),
            Self::Kg => Some(1000.0),
            Self::Oz => Some(28.3495),
            Self::Lb => Some(453.592),
            _ => None,
        }
    }

    /// Millilitres per one of this unit, for volume units.
    fn millilitre_factor(self) -> Option<f64> {
        match self {
            Self::Ml => Some(1.0),
            Self::L => Some(1000.0),
            Self::Cup => Some(236.588),
            Self::Tbsp => Some(14.7868),
            Self::Tsp => Some(4.92892),
            _ => None,
        }
    }
}

impl fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::G),
            "kg" | "kilogram" | "kilograms" => Ok(Self::Kg),
            "oz" | "ounce" | "ounces" => Ok(Self::Oz),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Lb),
            "ml" | "milliliter" | "milliliters" => Ok(Self::Ml),
            "l" | "liter" | "liters" => Ok(Self::L),
            "cup" | "cups" => Ok(Self::Cup),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(Self::Tbsp),
            "tsp" | "teaspoon" | "teaspoons" => Ok(Self::Tsp),
            "piece" | "pieces" => Ok(Self::Piece),
            "clove" | "cloves" => Ok(Self::Clove),
            "slice" | "slices" => Ok(Self::Slice),
            "pinch" | "pinches" => Ok(Self::Pinch),
            "can" | "cans" => Ok(Self::Can),
            "bottle" | "bottles" => Ok(Self::Bottle),
            "packet" | "packets" => Ok(Self::Packet),
            "unit" | "units" => Ok(Self::Unit),
            _ => Err(()),
        }
    }
}

/// An amount together with its measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Quantity {
    pub amount: f64,
    pub measurement: IngredientUnit,
}

impl Quantity {
    pub fn new(amount: f64, measurement: IngredientUnit) -> Self {
        Self {
            amount,
            measurement,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::new(0.0, IngredientUnit::Unit)
    }
}

/// Converts `amount` of `from` into `to`.
pub fn convert_amount(
    amount: f64,
    from: IngredientUnit,
    to: IngredientUnit,
) -> Result<f64, CoreError> {
    if from == to {
        return Ok(amount);
    }
    if let (Some(from_g), Some(to_g)) = (from.gram_factor(), to.gram_factor()) {
        return Ok(amount * from_g / to_g);
    }
    if let (Some(from_ml), Some(to_ml)) = (from.millilitre_factor(), to.millilitre_factor()) {
        return Ok(amount * from_ml / to_ml);
    }
    Err(CoreError::IncompatibleUnits { from, to })
}

/// Multiplier taking nutrient values expressed per `basis` to `requested`.
pub fn scale_factor(basis: &Quantity, requested: &Quantity) -> Result<f64, CoreError> {
    if basis.amount <= 0.0 {
        return Err(CoreError::Internal(format!(
            "non-positive reference basis: {} {}",
            basis.amount, basis.measurement
        )));
    }
    let in_basis_unit = convert_amount(requested.amount, requested.measurement, basis.measurement)?;
    Ok(in_basis_unit / basis.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_within_mass() {
        assert_eq!(convert_amount(2.0, IngredientUnit::Kg, IngredientUnit::G).unwrap(), 2000.0);
        let oz = convert_amount(100.0, IngredientUnit::G, IngredientUnit::Oz).unwrap();
        assert!((oz - 3.5274).abs() < 1e-3);
    }

    #[test]
    fn converts_within_volume() {
        let ml = convert_amount(1.0, IngredientUnit::Cup, IngredientUnit::Ml).unwrap();
        assert!((ml - 236.588).abs() < 1e-9);
        let tsp = convert_amount(1.0, IngredientUnit::Tbsp, IngredientUnit::Tsp).unwrap();
        assert!((tsp - 3.0).abs() < 1e-2);
    }

    #[test]
    fn mass_to_volume_is_incompatible() {
        let err = convert_amount(1.0, IngredientUnit::G, IngredientUnit::Ml).unwrap_err();
        assert_eq!(
            err,
            CoreError::IncompatibleUnits {
                from: IngredientUnit::G,
                to: IngredientUnit::Ml,
            }
        );
    }

    #[test]
    fn count_units_only_match_themselves() {
        assert_eq!(
            convert_amount(3.0, IngredientUnit::Piece, IngredientUnit::Piece).unwrap(),
            3.0
        );
        let err = convert_amount(1.0, IngredientUnit::Piece, IngredientUnit::G).unwrap_err();
        assert!(matches!(err, CoreError::IncompatibleUnits { from: IngredientUnit::Piece, .. }));
    }

    #[test]
    fn scale_factor_converts_into_basis_unit() {
        let basis = Quantity::new(100.0, IngredientUnit::G);
        let factor = scale_factor(&basis, &Quantity::new(50.0, IngredientUnit::G)).unwrap();
        assert!((factor - 0.5).abs() < 1e-9);

        let factor = scale_factor(&basis, &Quantity::new(1.0, IngredientUnit::Kg)).unwrap();
        assert!((factor - 10.0).abs() < 1e-9);
    }

    #[test]
    fn scale_factor_rejects_count_request_without_piece_weight() {
        let basis = Quantity::new(100.0, IngredientUnit::G);
        let err = scale_factor(&basis, &Quantity::new(2.0, IngredientUnit::Piece)).unwrap_err();
        assert_eq!(
            err,
            CoreError::IncompatibleUnits {
                from: IngredientUnit::Piece,
                to: IngredientUnit::G,
            }
        );
    }

    #[test]
    fn unit_names_round_trip() {
        for unit in [
            IngredientUnit::G,
            IngredientUnit::Cup,
            IngredientUnit::Piece,
            IngredientUnit::Unit,
        ] {
            assert_eq!(unit.as_str().parse::<IngredientUnit>(), Ok(unit));
        }
        assert_eq!("Tablespoons".parse::<IngredientUnit>(), Ok(IngredientUnit::Tbsp));
        assert!("furlong".parse::<IngredientUnit>().is_err());
    }
}
