use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Returns the first top-level `{...}` span of `text`, found by brace depth.
///
/// Braces inside JSON strings are counted like any other brace.
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let mut start = None;
    let mut depth = 0usize;

    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return start.map(|s| &text[s..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Decodes a recipe from model output that must be exactly one JSON document.
pub fn parse_recipe(raw: &str) -> Result<Recipe, CoreError> {
    serde_json::from_str(raw.trim())
        .map_err(|e| CoreError::Parse(format!("Invalid recipe format: {}", e)))
}

/// Decodes a recipe from free text, trying the whole text first and then the
/// first embedded JSON object.
pub fn parse_recipe_from_text(text: &str) -> Result<Recipe, CoreError> {
    let text = text.trim();

    if let Ok(recipe) = parse_recipe(text) {
        return Ok(recipe);
    }

    extract_first_json_object(text)
        .and_then(|candidate| parse_recipe(candidate).ok())
        .ok_or_else(|| CoreError::Parse("model returned non-JSON or malformed JSON".to_string()))
}
