use axum::extract::State;

use crate::application::http::{
    recipe::validators::{RecipeGeneratorRequest, RecipeInputPayload},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use recipe_studio_core::domain::recipe::{entities::Recipe, ports::RecipeService};

#[utoipa::path(
    post,
    path = "/recipeGeneratorFlow",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates a structured recipe for an ingredient and optional dietary restrictions. \
        The body may also be wrapped as {\"data\": {...}}.",
    responses(
        (status = 200, body = Recipe),
        (status = 400, body = ApiErrorResponse, description = "Missing or invalid input"),
        (status = 500, body = ApiErrorResponse, description = "The model could not produce a recipe")
    ),
    request_body = RecipeInputPayload
)]
pub async fn recipe_generator_flow(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeGeneratorRequest>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into_input())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
