use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated recipe, exactly as decoded from the model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}
