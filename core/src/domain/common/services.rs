use std::sync::Arc;

use crate::domain::{
    common::{GenerationConfig, GenerationMode},
    recipe::{RecipeGenerator, ports::LLMClient},
};

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) generator: RecipeGenerator<LLM>,
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
        }
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, generation: GenerationConfig, mode: GenerationMode) -> Self {
        Self {
            generator: RecipeGenerator::new(Arc::new(llm_client), generation, mode),
        }
    }
}
