use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::units::Quantity;

/// One substitute for an ingredient, with the amount replacing the original
/// quantity when one was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubstitutionSuggestion {
    pub ingredient: String,
    pub quantity: Option<Quantity>,
    /// Substitute amount per one unit of the original ingredient.
    pub conversion_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PairingSuggestion {
    pub name: String,
    pub reason: Option<String>,
}
