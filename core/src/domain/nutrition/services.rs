use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrition::{
        entities::{IngredientNutritionalInfo, NutritionRecord},
        ports::{NutritionCacheRepository, NutritionRepository, NutritionService},
        units::Quantity,
        value_objects::{
            GetIngredientNutritionInput, GetRecipeNutritionInput, RecipeNutritionalInfo,
        },
    },
    recipe::ports::RecipeRepository,
    suggestions::ports::LlmClient,
};

impl<R, I, N, C, H, L> Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    /// Cache-first lookup of a nutrition row by ingredient name: substring
    /// match on the product name, then on the generic name, first match
    /// wins. Cache failures degrade to store lookups.
    async fn lookup_nutrition_record(&self, name: &str) -> Result<NutritionRecord, CoreError> {
        let cache_key = name.trim().to_lowercase();

        match self.nutrition_cache.get(cache_key.clone()).await {
            Ok(Some(record)) => {
                debug!(ingredient = name, "nutrition cache hit");
                return Ok(record);
            }
            Ok(None) => {}
            Err(err) => warn!(ingredient = name, "nutrition cache read failed: {err}"),
        }

        let found = self
            .nutrition_repository
            .find_by_product_name(name.to_owned())
            .await?;
        let record = match found {
            Some(record) => record,
            None => self
                .nutrition_repository
                .find_by_generic_name(name.to_owned())
                .await?
                .ok_or_else(|| CoreError::NutritionDataNotFound(name.to_owned()))?,
        };

        if let Err(err) = self.nutrition_cache.set(cache_key, record.clone()).await {
            warn!(ingredient = name, "nutrition cache write failed: {err}");
        }

        Ok(record)
    }

    /// Resolves one ingredient to its nutritional info, scaled to `quantity`
    /// when one is supplied.
    async fn resolve_ingredient(
        &self,
        ingredient_id: i64,
        quantity: Option<Quantity>,
    ) -> Result<IngredientNutritionalInfo, CoreError> {
        let ingredient = self
            .ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::IngredientNotFound(ingredient_id))?;

        let record = self.lookup_nutrition_record(&ingredient.name).await?;

        let info = IngredientNutritionalInfo::try_from(record)
            .map_err(|_| CoreError::NutritionConversion(ingredient.name.clone()))?;

        match quantity {
            Some(quantity) => info.scaled_to(quantity),
            None => Ok(info),
        }
    }
}

impl<R, I, N, C, H, L> NutritionService for Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn get_ingredient_nutrition(
        &self,
        input: GetIngredientNutritionInput,
    ) -> Result<IngredientNutritionalInfo, CoreError> {
        info!(
            ingredient_id = input.ingredient_id,
            quantity = ?input.quantity,
            "getting nutritional info for ingredient"
        );
        self.resolve_ingredient(input.ingredient_id, input.quantity)
            .await
    }

    async fn get_recipe_nutrition(
        &self,
        input: GetRecipeNutritionInput,
    ) -> Result<RecipeNutritionalInfo, CoreError> {
        info!(
            recipe_id = input.recipe_id,
            include_total = input.include_total,
            include_ingredients = input.include_ingredients,
            "getting nutritional info for recipe"
        );

        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::RecipeNotFound(input.recipe_id))?;

        let mut resolved: IndexMap<i64, IngredientNutritionalInfo> = IndexMap::new();
        let mut missing: Vec<i64> = Vec::new();

        // Fail-soft per ingredient: one bad entry never aborts the request.
        for entry in &recipe.ingredients {
            match self
                .resolve_ingredient(entry.ingredient_id, entry.quantity)
                .await
            {
                Ok(info) => {
                    resolved.insert(entry.ingredient_id, info);
                }
                Err(err) => {
                    debug!(
                        recipe_id = input.recipe_id,
                        ingredient_id = entry.ingredient_id,
                        "skipping ingredient: {err}"
                    );
                    missing.push(entry.ingredient_id);
                }
            }
        }

        let total = input.include_total.then(|| {
            let values: Vec<IngredientNutritionalInfo> = resolved.values().cloned().collect();
            IngredientNutritionalInfo::calculate_total(&values)
        });

        Ok(RecipeNutritionalInfo {
            ingredients: input.include_ingredients.then_some(resolved),
            missing_ingredients: (!missing.is_empty()).then_some(missing),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        ingredient::{entities::Ingredient, ports::MockIngredientRepository},
        nutrition::{
            ports::{MockNutritionCacheRepository, MockNutritionRepository},
            units::IngredientUnit,
        },
        recipe::{
            entities::{Recipe, RecipeIngredient},
            ports::MockRecipeRepository,
        },
        suggestions::ports::MockLlmClient,
    };

    type TestService = Service<
        MockRecipeRepository,
        MockIngredientRepository,
        MockNutritionRepository,
        MockNutritionCacheRepository,
        MockHealthCheckRepository,
        MockLlmClient,
    >;

    struct Mocks {
        recipes: MockRecipeRepository,
        ingredients: MockIngredientRepository,
        nutrition: MockNutritionRepository,
        cache: MockNutritionCacheRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                recipes: MockRecipeRepository::new(),
                ingredients: MockIngredientRepository::new(),
                nutrition: MockNutritionRepository::new(),
                cache: MockNutritionCacheRepository::new(),
            }
        }

        /// Cache that always misses and accepts writes.
        fn passthrough_cache(&mut self) {
            self.cache
                .expect_get()
                .returning(|_| Box::pin(async { Ok(None) }));
            self.cache
                .expect_set()
                .returning(|_, _| Box::pin(async { Ok(()) }));
        }

        fn into_service(self) -> TestService {
            Service::new(
                self.recipes,
                self.ingredients,
                self.nutrition,
                self.cache,
                MockHealthCheckRepository::new(),
                MockLlmClient::new(),
            )
        }
    }

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn oats_record() -> NutritionRecord {
        let mut record = NutritionRecord::empty("5000");
        record.product_name = Some("Rolled oats".into());
        record.carbohydrates_100g = Some(Decimal::new(10_000, 3));
        record.nutri_score = Some(2);
        record
    }

    fn recipe_with_entries(id: i64, entries: Vec<RecipeIngredient>) -> Recipe {
        Recipe {
            id,
            title: "Porridge".into(),
            description: None,
            servings: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            ingredients: entries,
        }
    }

    fn entry(ingredient_id: i64, quantity: Option<Quantity>) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id,
            name: format!("ingredient-{ingredient_id}"),
            position: ingredient_id as i32,
            quantity,
        }
    }

    #[tokio::test]
    async fn resolves_and_scales_a_single_ingredient() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks
            .ingredients
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .with(eq("oats".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let info = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: Some(Quantity::new(50.0, IngredientUnit::G)),
            })
            .await
            .unwrap();

        // 10 g carbs per 100 g, requested 50 g.
        assert_eq!(info.macro_nutrients.carbs_g, Some(5.0));
        assert_eq!(info.quantity, Quantity::new(50.0, IngredientUnit::G));
    }

    #[tokio::test]
    async fn missing_ingredient_row_fails_with_ingredient_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let err = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 7,
                quantity: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::IngredientNotFound(7));
    }

    #[tokio::test]
    async fn falls_back_to_generic_name_before_giving_up() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .nutrition
            .expect_find_by_generic_name()
            .with(eq("oats".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let info = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: None,
            })
            .await
            .unwrap();

        // Unscaled: returned as stored, per 100 g.
        assert_eq!(info.macro_nutrients.carbs_g, Some(10.0));
        assert_eq!(info.quantity, Quantity::new(100.0, IngredientUnit::G));
    }

    #[tokio::test]
    async fn both_name_lookups_missing_fail_with_nutrition_data_not_found() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "dragon fruit"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .nutrition
            .expect_find_by_generic_name()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let err = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NutritionDataNotFound("dragon fruit".into()));
    }

    #[tokio::test]
    async fn incompatible_request_unit_surfaces_as_such() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let err = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: Some(Quantity::new(2.0, IngredientUnit::Piece)),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::IncompatibleUnits {
                from: IngredientUnit::Piece,
                to: IngredientUnit::G,
            }
        );
    }

    #[tokio::test]
    async fn cache_hit_skips_the_store() {
        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "Oats "))) }));
        mocks
            .cache
            .expect_get()
            .with(eq("oats".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));
        // No nutrition repository expectations: a store call would panic.

        let service = mocks.into_service();
        let info = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: None,
            })
            .await
            .unwrap();
        assert_eq!(info.macro_nutrients.carbs_g, Some(10.0));
    }

    #[tokio::test]
    async fn cache_errors_fall_back_to_the_store() {
        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .cache
            .expect_get()
            .returning(|_| Box::pin(async { Err(CoreError::Cache("connection reset".into())) }));
        mocks
            .cache
            .expect_set()
            .returning(|_, _| Box::pin(async { Err(CoreError::Cache("still down".into())) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let info = service
            .get_ingredient_nutrition(GetIngredientNutritionInput {
                ingredient_id: 1,
                quantity: None,
            })
            .await
            .unwrap();
        assert_eq!(info.macro_nutrients.carbs_g, Some(10.0));
    }

    #[tokio::test]
    async fn unknown_recipe_fails_loud() {
        let mut mocks = Mocks::new();
        mocks
            .recipes
            .expect_get_by_id()
            .with(eq(99))
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let err = service
            .get_recipe_nutrition(GetRecipeNutritionInput {
                recipe_id: 99,
                include_total: true,
                include_ingredients: false,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RecipeNotFound(99));
    }

    #[tokio::test]
    async fn one_missing_ingredient_degrades_instead_of_failing() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks.recipes.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(Some(recipe_with_entries(
                    id,
                    vec![
                        entry(1, Some(Quantity::new(50.0, IngredientUnit::G))),
                        entry(2, None),
                        entry(3, Some(Quantity::new(100.0, IngredientUnit::G))),
                    ],
                )))
            })
        });
        mocks.ingredients.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                // Ingredient #2 has no row at all.
                if id == 2 {
                    Ok(None)
                } else {
                    Ok(Some(ingredient(id, "oats")))
                }
            })
        });
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let result = service
            .get_recipe_nutrition(GetRecipeNutritionInput {
                recipe_id: 10,
                include_total: true,
                include_ingredients: true,
            })
            .await
            .unwrap();

        assert!(result.is_partial());
        assert_eq!(result.missing_ingredients, Some(vec![2]));

        let ingredients = result.ingredients.unwrap();
        assert_eq!(ingredients.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        // #1 scaled to 50 g, #3 to 100 g.
        assert_eq!(ingredients[&1].macro_nutrients.carbs_g, Some(5.0));
        assert_eq!(ingredients[&3].macro_nutrients.carbs_g, Some(10.0));

        let total = result.total.unwrap();
        assert_eq!(total.macro_nutrients.carbs_g, Some(15.0));
        // Both resolved entries carry score 2; the average stays 2.
        assert_eq!(total.classification.nutri_score, Some(2));
    }

    #[tokio::test]
    async fn response_members_follow_the_include_flags() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks.recipes.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(Some(recipe_with_entries(
                    id,
                    vec![entry(1, Some(Quantity::new(50.0, IngredientUnit::G)))],
                )))
            })
        });
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let result = service
            .get_recipe_nutrition(GetRecipeNutritionInput {
                recipe_id: 11,
                include_total: true,
                include_ingredients: false,
            })
            .await
            .unwrap();

        assert!(result.ingredients.is_none());
        assert!(result.missing_ingredients.is_none());
        // Total over the single 50 g entry matches that entry alone.
        assert_eq!(result.total.unwrap().macro_nutrients.carbs_g, Some(5.0));
    }

    #[tokio::test]
    async fn mid_aggregation_unit_mismatch_is_recorded_not_raised() {
        let mut mocks = Mocks::new();
        mocks.passthrough_cache();
        mocks.recipes.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(Some(recipe_with_entries(
                    id,
                    vec![
                        entry(1, Some(Quantity::new(2.0, IngredientUnit::Piece))),
                        entry(2, Some(Quantity::new(50.0, IngredientUnit::G))),
                    ],
                )))
            })
        });
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(ingredient(id, "oats"))) }));
        mocks
            .nutrition
            .expect_find_by_product_name()
            .returning(|_| Box::pin(async { Ok(Some(oats_record())) }));

        let service = mocks.into_service();
        let result = service
            .get_recipe_nutrition(GetRecipeNutritionInput {
                recipe_id: 12,
                include_total: true,
                include_ingredients: true,
            })
            .await
            .unwrap();

        assert_eq!(result.missing_ingredients, Some(vec![1]));
        assert_eq!(result.total.unwrap().macro_nutrients.carbs_g, Some(5.0));
    }
}
