use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use larder_core::domain::nutrition::units::{IngredientUnit, Quantity};

use crate::application::http::server::api_entities::api_error::ApiError;

fn default_include_total() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetRecipeNutritionParams {
    /// Include the aggregated total over all resolvable ingredients.
    #[serde(default = "default_include_total")]
    pub include_total: bool,
    /// Include the per-ingredient breakdown.
    #[serde(default)]
    pub include_ingredients: bool,
}

impl GetRecipeNutritionParams {
    /// At least one response member must be requested; rejected before the
    /// aggregation service runs.
    pub fn validate_flags(&self) -> Result<(), ApiError> {
        if !self.include_total && !self.include_ingredients {
            return Err(ApiError::BadRequest(
                "at least one of include_total and include_ingredients must be true".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetIngredientNutritionParams {
    /// Requested amount; requires `measurement`.
    pub quantity_value: Option<f64>,
    /// Requested unit; requires `quantity_value`.
    pub measurement: Option<String>,
}

impl GetIngredientNutritionParams {
    /// Both quantity parameters together, or neither.
    pub fn into_quantity(self) -> Result<Option<Quantity>, ApiError> {
        match (self.quantity_value, self.measurement) {
            (None, None) => Ok(None),
            (Some(amount), Some(measurement)) => {
                if !amount.is_finite() || amount <= 0.0 {
                    return Err(ApiError::BadRequest(
                        "quantity_value must be a positive number".into(),
                    ));
                }
                let unit: IngredientUnit = measurement.parse().map_err(|_| {
                    ApiError::BadRequest(format!("unknown measurement unit '{measurement}'"))
                })?;
                Ok(Some(Quantity::new(amount, unit)))
            }
            _ => Err(ApiError::BadRequest(
                "quantity_value and measurement must be provided together".into(),
            )),
        }
    }
}
