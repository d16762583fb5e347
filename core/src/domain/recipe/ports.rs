use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerationRequest, RecipeInput},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Asks the model for output constrained to `response_schema` and returns
    /// the raw JSON text it produced.
    fn generate_structured(
        &self,
        request: GenerationRequest,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Asks the model for free text.
    fn generate_text(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the recipe generator flow
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Runs the flow. `None` stands for a request that carried no payload.
    fn generate_recipe(
        &self,
        input: Option<RecipeInput>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
