use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
        get(get_recipe),
    )
}
