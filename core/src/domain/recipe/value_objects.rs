use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::GenerationConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    /// Main ingredient or cuisine focus
    pub ingredient: String,
    /// Dietary requirements, omit for none
    #[serde(default)]
    pub dietary_restrictions: String,
}

impl RecipeInput {
    pub fn new(ingredient: impl Into<String>, dietary_restrictions: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            dietary_restrictions: dietary_restrictions.into(),
        }
    }
}

/// Output of the prompt builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePrompt {
    pub text: String,
    pub restriction: String,
}

/// Everything a model call needs besides the optional response schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub config: GenerationConfig,
}
