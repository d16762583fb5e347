use super::handlers::recipe_generator_flow::{
    __path_recipe_generator_flow, recipe_generator_flow,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

/// Path segment the flow is served under.
pub const RECIPE_FLOW_NAME: &str = "recipeGeneratorFlow";

#[derive(OpenApi)]
#[openapi(paths(recipe_generator_flow))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/{}", state.args.server.root_path, RECIPE_FLOW_NAME),
        post(recipe_generator_flow),
    )
}
