use recipe_studio_core::domain::recipe::value_objects::RecipeInput;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInputPayload {
    /// Main ingredient or cuisine focus
    #[serde(default)]
    #[validate(length(max = 256, message = "ingredient must be at most 256 characters"))]
    pub ingredient: String,

    /// Dietary requirements, omit for none
    #[serde(default)]
    #[validate(length(
        max = 512,
        message = "dietaryRestrictions must be at most 512 characters"
    ))]
    pub dietary_restrictions: Option<String>,
}

impl From<RecipeInputPayload> for RecipeInput {
    fn from(payload: RecipeInputPayload) -> Self {
        RecipeInput::new(
            payload.ingredient,
            payload.dietary_restrictions.unwrap_or_default(),
        )
    }
}

/// Accepted request bodies: the input itself, the `{"data": ...}` envelope
/// sent by the web client, or `null`.
///
/// An object is only an envelope when it carries a `data` key. Any other
/// object is decoded as the input, so a missing ingredient stays an empty
/// ingredient and a mistyped field is a decode error.
#[derive(Debug)]
pub enum RecipeGeneratorRequest {
    Direct(RecipeInputPayload),
    Envelope { data: Option<RecipeInputPayload> },
    Null,
}

impl<'de> Deserialize<'de> for RecipeGeneratorRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(RecipeGeneratorRequest::Null),
            Value::Object(mut object) => match object.remove("data") {
                Some(data) => serde_json::from_value(data)
                    .map(|data| RecipeGeneratorRequest::Envelope { data })
                    .map_err(D::Error::custom),
                None => serde_json::from_value(Value::Object(object))
                    .map(RecipeGeneratorRequest::Direct)
                    .map_err(D::Error::custom),
            },
            other => Err(D::Error::custom(format!(
                "expected a recipe input object or null, found {other}"
            ))),
        }
    }
}

impl RecipeGeneratorRequest {
    pub fn into_input(self) -> Option<RecipeInput> {
        match self {
            RecipeGeneratorRequest::Direct(payload)
            | RecipeGeneratorRequest::Envelope {
                data: Some(payload),
            } => Some(payload.into()),
            RecipeGeneratorRequest::Envelope { data: None } | RecipeGeneratorRequest::Null => None,
        }
    }
}

impl Validate for RecipeGeneratorRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            RecipeGeneratorRequest::Direct(payload)
            | RecipeGeneratorRequest::Envelope {
                data: Some(payload),
            } => payload.validate(),
            _ => Ok(()),
        }
    }
}
