use crate::domain::recipe::value_objects::RecipePrompt;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful cooking assistant. Respond only with JSON matching the given schema. Do not include any extra text.";

const NO_RESTRICTION: &str = "none";

/// Builds the generation prompt for an already trimmed, non-empty ingredient.
///
/// A blank restriction is reported back as `"none"`.
pub fn build_recipe_prompt(ingredient: &str, restriction: &str) -> RecipePrompt {
    let restriction = match restriction.trim() {
        "" => NO_RESTRICTION,
        trimmed => trimmed,
    };

    let text = format!(
        r#"Create a complete cooking recipe using the following requirements.

Main ingredient or cuisine focus: {ingredient}
Dietary requirements: {restriction}

Respond with concise instructions and note any cooking tips when helpful.

Respond ONLY with valid JSON that matches this structure:
{{
  "title": string,
  "description": string,
  "prepTime": string,
  "cookTime": string,
  "servings": number,
  "ingredients": [string],
  "instructions": [string],
  "tips": [string] (optional)
}}
Do not include any extra text outside the JSON."#
    );

    RecipePrompt {
        text,
        restriction: restriction.to_string(),
    }
}
