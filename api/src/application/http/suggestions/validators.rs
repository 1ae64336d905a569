use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use larder_core::domain::nutrition::units::Quantity;

use crate::application::http::{
    nutrition::validators::GetIngredientNutritionParams,
    server::api_entities::api_error::ApiError,
};

#[derive(Debug, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetSubstitutionsParams {
    /// Amount of the original ingredient; requires `measurement`.
    pub quantity_value: Option<f64>,
    /// Unit of the original amount; requires `quantity_value`.
    pub measurement: Option<String>,
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    #[param(example = 5)]
    pub limit: Option<u32>,
}

impl GetSubstitutionsParams {
    pub fn into_parts(self) -> Result<(Option<Quantity>, Option<u32>), ApiError> {
        self.validate()
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
        let quantity = GetIngredientNutritionParams {
            quantity_value: self.quantity_value,
            measurement: self.measurement,
        }
        .into_quantity()?;
        Ok((quantity, self.limit))
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetPairingsParams {
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    #[param(example = 5)]
    pub limit: Option<u32>,
}

impl GetPairingsParams {
    pub fn validated_limit(self) -> Result<Option<u32>, ApiError> {
        self.validate()
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
        Ok(self.limit)
    }
}
