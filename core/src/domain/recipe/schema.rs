use serde_json::json;

/// Returns the JSON schema for recipe LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "prepTime": { "type": "string" },
            "cookTime": { "type": "string" },
            "servings": { "type": "integer" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "tips": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title", "description", "prepTime", "cookTime",
            "servings", "ingredients", "instructions"
        ]
    })
}
