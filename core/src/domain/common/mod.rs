use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeStudioConfig {
    pub llm: LLMConfig,
    pub generation: GenerationConfig,
    pub mode: GenerationMode,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

/// Sampling options sent with every model call.
///
/// Resolved once at startup and shared read-only by every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub const DEFAULT_TEMPERATURE: f32 = 0.4;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 600;

    /// Applies raw overrides on top of the defaults.
    ///
    /// An invalid override never fails: it is logged and the default is kept.
    pub fn resolve(temperature: Option<&str>, max_output_tokens: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = non_blank(temperature) {
            match parse_temperature(raw) {
                Ok(value) => config.temperature = value,
                Err(e) => tracing::warn!(
                    error = %e,
                    default = config.temperature,
                    "ignoring temperature override"
                ),
            }
        }

        if let Some(raw) = non_blank(max_output_tokens) {
            match parse_max_output_tokens(raw) {
                Ok(value) => config.max_output_tokens = value,
                Err(e) => tracing::warn!(
                    error = %e,
                    default = config.max_output_tokens,
                    "ignoring max output tokens override"
                ),
            }
        }

        config
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    /// Schema-constrained output, falling back to free text on failure.
    #[default]
    Structured,
    /// Free text only, for models whose structured output is unreliable.
    TextOnly,
}

impl GenerationMode {
    pub fn from_text_only(text_only: bool) -> Self {
        if text_only {
            GenerationMode::TextOnly
        } else {
            GenerationMode::Structured
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_temperature(raw: &str) -> Result<f32, CoreError> {
    let value: f32 = raw.parse().map_err(|_| {
        CoreError::Configuration(format!("temperature must be a number, got {raw:?}"))
    })?;

    if !(0.0..=2.0).contains(&value) {
        return Err(CoreError::Configuration(format!(
            "temperature must be between 0 and 2, got {value}"
        )));
    }

    Ok(value)
}

fn parse_max_output_tokens(raw: &str) -> Result<u32, CoreError> {
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(CoreError::Configuration(format!(
            "max output tokens must be a positive integer, got {raw:?}"
        ))),
    }
}
