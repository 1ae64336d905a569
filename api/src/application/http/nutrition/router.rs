use super::handlers::{
    get_ingredient_nutrition::{__path_get_ingredient_nutrition, get_ingredient_nutrition},
    get_recipe_nutrition::{__path_get_recipe_nutrition, get_recipe_nutrition},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipe_nutrition, get_ingredient_nutrition))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/nutritional-info",
                state.args.server.root_path
            ),
            get(get_recipe_nutrition),
        )
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}/nutritional-info",
                state.args.server.root_path
            ),
            get(get_ingredient_nutrition),
        )
}
