use crate::application::http::{health::HealthApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Recipe Studio API",
    description = "Generates structured cooking recipes with Gemini"
))]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(RecipeApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
