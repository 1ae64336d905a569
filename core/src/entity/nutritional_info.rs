use sea_orm::entity::prelude::*;

/// One row per product code, per-100 g fixed-point values. Consumed
/// read-only; ownership of the schema sits with the ingestion pipeline.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "nutritional_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,

    pub product_name: Option<String>,
    pub generic_name: Option<String>,
    pub serving_quantity: Option<Decimal>,
    pub serving_measurement: Option<String>,

    pub allergens: Option<Vec<String>>,
    pub food_groups: Option<String>,
    pub nutriscore_score: Option<i32>,
    pub nutriscore_grade: Option<String>,

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

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
