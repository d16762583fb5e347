use std::sync::Arc;

use crate::domain::{
    common::{GenerationConfig, GenerationMode, entities::app_errors::CoreError},
    recipe::{
        entities::Recipe,
        helpers::{parse_recipe, parse_recipe_from_text},
        ports::LLMClient,
        prompt::SYSTEM_INSTRUCTION,
        schema::get_recipe_schema,
        value_objects::GenerationRequest,
    },
};

/// Number of plain-text attempts made after structured output fails.
pub const TEXT_FALLBACK_ATTEMPTS: usize = 2;

/// Obtains a [`Recipe`] from the model, degrading from structured output to
/// free text when needed.
pub struct RecipeGenerator<LLM> {
    llm_client: Arc<LLM>,
    config: GenerationConfig,
    mode: GenerationMode,
}

impl<LLM> Clone for RecipeGenerator<LLM> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            config: self.config,
            mode: self.mode,
        }
    }
}

impl<LLM> RecipeGenerator<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: Arc<LLM>, config: GenerationConfig, mode: GenerationMode) -> Self {
        Self {
            llm_client,
            config,
            mode,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<Recipe, CoreError> {
        if prompt.trim().is_empty() {
            return Err(CoreError::Validation("prompt must be provided".to_string()));
        }

        let request = GenerationRequest {
            prompt: prompt.to_string(),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            config: self.config,
        };

        match self.mode {
            GenerationMode::Structured => self.generate_with_fallback(request).await,
            GenerationMode::TextOnly => self.generate_text_only(request).await,
        }
    }

    async fn generate_with_fallback(&self, request: GenerationRequest) -> Result<Recipe, CoreError> {
        // Kept as the reported failure: it says more than a text parse error.
        let structured_error = match self.generate_structured(request.clone()).await {
            Ok(recipe) => return Ok(recipe),
            Err(e) => e,
        };

        tracing::warn!(
            error = %structured_error,
            "structured output failed, falling back to text generation"
        );

        for attempt in 1..=TEXT_FALLBACK_ATTEMPTS {
            let text = match self.llm_client.generate_text(request.clone()).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "text generation failed");
                    return Err(structured_error);
                }
            };

            match parse_recipe_from_text(&text) {
                Ok(recipe) => {
                    tracing::debug!(attempt, "recovered recipe from text response");
                    return Ok(recipe);
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "text response did not contain a recipe")
                }
            }
        }

        Err(structured_error)
    }

    async fn generate_structured(&self, request: GenerationRequest) -> Result<Recipe, CoreError> {
        let raw = self
            .llm_client
            .generate_structured(request, get_recipe_schema())
            .await?;

        parse_recipe(&raw)
    }

    async fn generate_text_only(&self, request: GenerationRequest) -> Result<Recipe, CoreError> {
        let text = self.llm_client.generate_text(request).await?;
        parse_recipe_from_text(&text)
    }
}
