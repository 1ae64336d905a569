use serde::Deserialize;
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrition::ports::{NutritionCacheRepository, NutritionRepository},
    recipe::ports::RecipeRepository,
    suggestions::{
        entities::{PairingSuggestion, SubstitutionSuggestion},
        ports::{LlmClient, SuggestionService},
        schema::{get_pairings_schema, get_substitutions_schema},
        value_objects::{GetPairingsInput, GetSubstitutionsInput},
    },
};

const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
struct SubstitutionsPayload {
    substitutions: Vec<SubstitutionSuggestion>,
}

#[derive(Debug, Deserialize)]
struct PairingsPayload {
    pairings: Vec<PairingSuggestion>,
}

fn effective_limit(limit: Option<u32>) -> usize {
    limit.map_or(DEFAULT_SUGGESTION_LIMIT, |l| l as usize)
}

impl<R, I, N, C, H, L> SuggestionService for Service<R, I, N, C, H, L>
where
    R: RecipeRepository,
    I: IngredientRepository,
    N: NutritionRepository,
    C: NutritionCacheRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn suggest_substitutions(
        &self,
        input: GetSubstitutionsInput,
    ) -> Result<Vec<SubstitutionSuggestion>, CoreError> {
        info!(ingredient_id = input.ingredient_id, "suggesting substitutions");

        let ingredient = self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or(CoreError::IngredientNotFound(input.ingredient_id))?;

        let limit = effective_limit(input.limit);
        let quantity_note = input
            .quantity
            .map(|q| format!(" The recipe uses {} {} of it.", q.amount, q.measurement))
            .unwrap_or_default();
        let prompt = format!(
            "Suggest up to {limit} culinary substitutions for the ingredient \
             \"{}\".{quantity_note} For each substitute give the amount that \
             replaces the original and the conversion ratio.",
            ingredient.name,
        );

        let raw = self
            .llm_client
            .generate(prompt, get_substitutions_schema())
            .await?;
        let payload: SubstitutionsPayload = serde_json::from_str(&raw)
            .map_err(|err| CoreError::Llm(format!("malformed substitution response: {err}")))?;

        let mut substitutions = payload.substitutions;
        substitutions.truncate(limit);
        Ok(substitutions)
    }

    async fn suggest_pairings(
        &self,
        input: GetPairingsInput,
    ) -> Result<Vec<PairingSuggestion>, CoreError> {
        info!(recipe_id = input.recipe_id, "suggesting pairings");

        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::RecipeNotFound(input.recipe_id))?;

        let limit = effective_limit(input.limit);
        let ingredient_names: Vec<&str> = recipe
            .ingredients
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        let prompt = format!(
            "Suggest up to {limit} dishes or drinks that pair well with \
             \"{}\" (main ingredients: {}). Give a short reason for each.",
            recipe.title,
            ingredient_names.join(", "),
        );

        let raw = self
            .llm_client
            .generate(prompt, get_pairings_schema())
            .await?;
        let payload: PairingsPayload = serde_json::from_str(&raw)
            .map_err(|err| CoreError::Llm(format!("malformed pairing response: {err}")))?;

        let mut pairings = payload.pairings;
        pairings.truncate(limit);
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        ingredient::{entities::Ingredient, ports::MockIngredientRepository},
        nutrition::ports::{MockNutritionCacheRepository, MockNutritionRepository},
        recipe::{entities::Recipe, ports::MockRecipeRepository},
        suggestions::ports::MockLlmClient,
    };

    fn service_with(
        recipes: MockRecipeRepository,
        ingredients: MockIngredientRepository,
        llm: MockLlmClient,
    ) -> Service<
        MockRecipeRepository,
        MockIngredientRepository,
        MockNutritionRepository,
        MockNutritionCacheRepository,
        MockHealthCheckRepository,
        MockLlmClient,
    > {
        Service::new(
            recipes,
            ingredients,
            MockNutritionRepository::new(),
            MockNutritionCacheRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        )
    }

    fn butter(id: i64) -> Ingredient {
        Ingredient {
            id,
            name: "butter".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn parses_and_truncates_substitutions() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(butter(id))) }));

        let mut llm = MockLlmClient::new();
        llm.expect_generate().returning(|_, _| {
            Box::pin(async {
                Ok(r#"{"substitutions": [
                    {"ingredient": "margarine", "conversion_ratio": 1.0},
                    {"ingredient": "coconut oil", "conversion_ratio": 0.8},
                    {"ingredient": "olive oil", "conversion_ratio": 0.75}
                ]}"#
                    .to_string())
            })
        });

        let service = service_with(MockRecipeRepository::new(), ingredients, llm);
        let suggestions = service
            .suggest_substitutions(GetSubstitutionsInput {
                ingredient_id: 1,
                quantity: None,
                limit: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].ingredient, "margarine");
    }

    #[tokio::test]
    async fn malformed_llm_output_is_an_llm_error() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(butter(id))) }));

        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_, _| Box::pin(async { Ok("not json".to_string()) }));

        let service = service_with(MockRecipeRepository::new(), ingredients, llm);
        let err = service
            .suggest_substitutions(GetSubstitutionsInput {
                ingredient_id: 1,
                quantity: None,
                limit: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Llm(_)));
    }

    #[tokio::test]
    async fn pairings_require_an_existing_recipe() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service_with(recipes, MockIngredientRepository::new(), MockLlmClient::new());
        let err = service
            .suggest_pairings(GetPairingsInput {
                recipe_id: 8,
                limit: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RecipeNotFound(8));
    }

    #[tokio::test]
    async fn parses_pairings() {
        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                Ok(Some(Recipe {
                    id,
                    title: "Mushroom risotto".into(),
                    description: None,
                    servings: None,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    ingredients: Vec::new(),
                }))
            })
        });

        let mut llm = MockLlmClient::new();
        llm.expect_generate().returning(|_, _| {
            Box::pin(async {
                Ok(r#"{"pairings": [{"name": "Pinot noir", "reason": "earthy match"}]}"#
                    .to_string())
            })
        });

        let service = service_with(recipes, MockIngredientRepository::new(), llm);
        let pairings = service
            .suggest_pairings(GetPairingsInput {
                recipe_id: 3,
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(pairings.len(), 1);
        assert_eq!(pairings[0].name, "Pinot noir");
    }
}
