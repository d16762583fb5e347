use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        value_objects::RecipeInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_recipe(&self, input: Option<RecipeInput>) -> Result<Recipe, CoreError> {
        // 1. Validate input
        let input = input
            .ok_or_else(|| CoreError::Validation("input payload is required".to_string()))?;

        let ingredient = input.ingredient.trim();
        if ingredient.is_empty() {
            return Err(CoreError::Validation(
                "ingredient must be provided".to_string(),
            ));
        }

        // 2. Build prompt
        let prompt = build_recipe_prompt(ingredient, &input.dietary_restrictions);

        tracing::info!(
            ingredient,
            dietary_restrictions = %prompt.restriction,
            "recipe flow invoked"
        );

        // 3. Call LLM
        let recipe = self.generator.generate(&prompt.text).await.map_err(|e| {
            tracing::error!(error = %e, "recipe generation failed");
            CoreError::generation(e)
        })?;

        tracing::info!(
            title = %recipe.title,
            servings = recipe.servings,
            "recipe generated"
        );

        Ok(recipe)
    }
}
