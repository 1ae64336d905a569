use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc,
    nutrition::router::NutritionApiDoc, recipe::router::RecipeApiDoc,
    suggestions::router::SuggestionsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "", api = NutritionApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "", api = SuggestionsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
