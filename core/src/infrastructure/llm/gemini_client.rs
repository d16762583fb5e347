use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::LLMClient, value_objects::GenerationRequest},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    /// Model ids may carry the `googleai/` provider prefix; it is dropped.
    pub fn with_base_url(api_key: String, model_name: String, base_url: String) -> Self {
        let model_name = model_name
            .trim()
            .trim_start_matches("googleai/")
            .to_string();

        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn build_request(
        request: GenerationRequest,
        response_schema: Option<serde_json::Value>,
    ) -> GeminiRequest {
        let response_mime_type = response_schema
            .as_ref()
            .map(|_| "application/json".to_string());

        GeminiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            system_instruction: request.system_instruction.map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            generation_config: GeminiGenerationConfig {
                temperature: request.config.temperature,
                max_output_tokens: request.config.max_output_tokens,
                response_mime_type,
                response_schema,
            },
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        tracing::debug!(model = %self.model_name, "calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key.
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let text: String = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_structured(
        &self,
        request: GenerationRequest,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::build_request(request, Some(response_schema));
        self.call_gemini_api(request).await
    }

    async fn generate_text(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let request = Self::build_request(request, None);
        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        routing::post,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{common::GenerationConfig, recipe::schema::get_recipe_schema};

    #[derive(Clone)]
    struct FakeGemini {
        status: StatusCode,
        body: Value,
        seen: Arc<Mutex<Vec<(String, String, Value)>>>,
    }

    async fn generate_content(
        State(fake): State<FakeGemini>,
        Path(model_action): Path<String>,
        Query(query): Query<std::collections::HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let key = query.get("key").cloned().unwrap_or_default();
        fake.seen.lock().unwrap().push((model_action, key, body));
        (fake.status, Json(fake.body.clone()))
    }

    async fn spawn_fake(status: StatusCode, body: Value) -> (String, FakeGemini) {
        let fake = FakeGemini {
            status,
            body,
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/v1beta/models/{model_action}", post(generate_content))
            .with_state(fake.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), fake)
    }

    fn text_reply(parts: &[&str]) -> Value {
        let parts: Vec<Value> = parts.iter().map(|t| json!({ "text": t })).collect();
        json!({
            "candidates": [
                { "content": { "role": "model", "parts": parts }, "finishReason": "STOP" }
            ]
        })
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "make soup".to_string(),
            system_instruction: Some("only JSON".to_string()),
            config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 321,
            },
        }
    }

    #[tokio::test]
    async fn test_structured_call_sends_schema_and_config() {
        let (base_url, fake) = spawn_fake(StatusCode::OK, text_reply(&["{\"a\":1}"])).await;
        let client = GeminiLLMClient::with_base_url(
            "secret".to_string(),
            "googleai/gemini-2.5-flash".to_string(),
            format!("{base_url}/"),
        );

        let text = client
            .generate_structured(request(), get_recipe_schema())
            .await
            .unwrap();
        assert_eq!(text, "{\"a\":1}");

        let seen = fake.seen.lock().unwrap();
        let (model_action, key, body) = &seen[0];
        assert_eq!(model_action, "gemini-2.5-flash:generateContent");
        assert_eq!(key, "secret");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "make soup");
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "only JSON");
        assert!(body["system_instruction"].get("role").is_none());

        let config = &body["generation_config"];
        assert_eq!(config["max_output_tokens"], 321);
        assert!((config["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(config["response_mime_type"], "application/json");
        assert_eq!(config["response_schema"], get_recipe_schema());
    }

    #[tokio::test]
    async fn test_text_call_omits_schema_and_joins_parts() {
        let (base_url, fake) =
            spawn_fake(StatusCode::OK, text_reply(&["Here: ", "{\"a\":", "1}"])).await;
        let client = GeminiLLMClient::with_base_url(
            "k".to_string(),
            "gemini-2.5-flash".to_string(),
            base_url,
        );

        let text = client.generate_text(request()).await.unwrap();
        assert_eq!(text, "Here: {\"a\":1}");

        let seen = fake.seen.lock().unwrap();
        let config = &seen[0].2["generation_config"];
        assert!(config.get("response_schema").is_none());
        assert!(config.get("response_mime_type").is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base_url, _fake) = spawn_fake(
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "error": { "code": 429, "message": "quota exhausted" } }),
        )
        .await;
        let client = GeminiLLMClient::with_base_url(
            "k".to_string(),
            "gemini-2.5-flash".to_string(),
            base_url,
        );

        let err = client.generate_text(request()).await.unwrap_err();

        match err {
            CoreError::ExternalServiceError(message) => {
                assert!(message.contains("429"), "{message}");
                assert!(message.contains("quota exhausted"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_without_candidates_is_an_error() {
        let (base_url, _fake) = spawn_fake(
            StatusCode::OK,
            json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
        )
        .await;
        let client = GeminiLLMClient::with_base_url(
            "k".to_string(),
            "gemini-2.5-flash".to_string(),
            base_url,
        );

        let err = client.generate_text(request()).await.unwrap_err();

        assert_eq!(
            err,
            CoreError::ExternalServiceError("No response from LLM".to_string())
        );
    }

    #[test]
    fn test_model_prefix_is_stripped() {
        let client = GeminiLLMClient::with_base_url(
            "k".to_string(),
            " googleai/gemini-2.5-pro ".to_string(),
            format!("{DEFAULT_GEMINI_BASE_URL}/"),
        );
        assert_eq!(client.model_name(), "gemini-2.5-pro");
        assert_eq!(client.base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
