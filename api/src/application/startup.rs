use anyhow::Context;
use recipe_studio_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::RecipeInput,
};

/// Generates one recipe before serving traffic. A failure here means the model
/// is unusable and the process should not start.
pub async fn run_startup_sample<S>(service: &S) -> Result<Recipe, anyhow::Error>
where
    S: RecipeService,
{
    let sample = service
        .generate_recipe(Some(RecipeInput::new("avocado", "vegetarian")))
        .await
        .context("startup sample generation failed")?;

    let payload = serde_json::to_string_pretty(&sample)?;
    tracing::info!("Sample recipe generated at startup:\n{}", payload);

    Ok(sample)
}
