use clap::{ArgAction, Parser, builder::FalseyValueParser};
use recipe_studio_core::{
    domain::common::{GenerationConfig, GenerationMode, LLMConfig, RecipeStudioConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3400";

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-studio-api", version, about = "Recipe generator flow over HTTP")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub generation: GenerationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Full bind address, takes precedence over --port
    #[arg(long, env = "BIND_ADDR")]
    pub bind_addr: Option<String>,

    /// Port to listen on, on all interfaces
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long,
        env = "METRICS_ENABLED",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub metrics_enabled: bool,

    /// Do not generate a sample recipe before serving traffic
    #[arg(
        long,
        env = "RECIPE_SKIP_STARTUP_SAMPLE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub skip_startup_sample: bool,
}

impl ServerArgs {
    /// `BIND_ADDR` wins, then `PORT` on all interfaces, then the local default.
    pub fn bind_address(&self) -> String {
        if let Some(addr) = non_blank(self.bind_addr.as_deref()) {
            return addr.to_string();
        }

        if let Some(port) = non_blank(self.port.as_deref()) {
            if port.contains(':') {
                return port.to_string();
            }
            return format!("0.0.0.0:{port}");
        }

        DEFAULT_BIND_ADDRESS.to_string()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "model", env = "RECIPE_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

/// Raw generation overrides. Invalid values are reported and ignored when the
/// configuration is resolved, never rejected here.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerationArgs {
    #[arg(long, env = "RECIPE_TEMPERATURE", allow_hyphen_values = true)]
    pub temperature: Option<String>,

    #[arg(long, env = "RECIPE_MAX_OUTPUT_TOKENS", allow_hyphen_values = true)]
    pub max_output_tokens: Option<String>,

    /// Skip structured output and parse free-text answers only
    #[arg(
        long,
        env = "RECIPE_TEXT_ONLY",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub text_only: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub json: bool,
}

impl From<Args> for RecipeStudioConfig {
    fn from(args: Args) -> Self {
        RecipeStudioConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            generation: GenerationConfig::resolve(
                args.generation.temperature.as_deref(),
                args.generation.max_output_tokens.as_deref(),
            ),
            mode: GenerationMode::from_text_only(args.generation.text_only),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
