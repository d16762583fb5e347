use crate::{
    domain::common::{RecipeStudioConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type RecipeStudioService = Service<GeminiLLMClient>;

pub fn create_service(config: RecipeStudioConfig) -> RecipeStudioService {
    let llm_client = GeminiLLMClient::with_base_url(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    tracing::info!(
        model = %llm_client.model_name(),
        temperature = config.generation.temperature,
        max_output_tokens = config.generation.max_output_tokens,
        mode = ?config.mode,
        "recipe service configured"
    );

    Service::new(llm_client, config.generation, config.mode)
}
