use super::handlers::{
    get_pairings::{__path_get_pairings, get_pairings},
    get_substitutions::{__path_get_substitutions, get_substitutions},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_substitutions, get_pairings))]
pub struct SuggestionsApiDoc;

pub fn suggestions_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}/substitutions",
                state.args.server.root_path
            ),
            get(get_substitutions),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/pairings",
                state.args.server.root_path
            ),
            get(get_pairings),
        )
}
