use crate::domain::nutrition::units::Quantity;

#[derive(Debug, Clone)]
pub struct GetSubstitutionsInput {
    pub ingredient_id: i64,
    pub quantity: Option<Quantity>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetPairingsInput {
    pub recipe_id: i64,
    pub limit: Option<u32>,
}
