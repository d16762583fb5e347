use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        ports::LLMClient,
        value_objects::GenerationRequest,
    },
};

/// Scripted model client. Each call pops the next queued reply for its mode.
#[derive(Default)]
pub struct StubLLMClient {
    structured: Mutex<VecDeque<Result<String, CoreError>>>,
    text: Mutex<VecDeque<Result<String, CoreError>>>,
    structured_calls: AtomicUsize,
    text_calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubLLMClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_structured(self, reply: Result<String, CoreError>) -> Self {
        self.structured.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_text(self, reply: Result<String, CoreError>) -> Self {
        self.text.lock().unwrap().push_back(reply);
        self
    }

    pub fn structured_calls(&self) -> usize {
        self.structured_calls.load(Ordering::SeqCst)
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.structured_calls() + self.text_calls()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(
        &self,
        queue: &Mutex<VecDeque<Result<String, CoreError>>>,
        request: GenerationRequest,
    ) -> Result<String, CoreError> {
        self.requests.lock().unwrap().push(request);
        queue.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(CoreError::ExternalServiceError(
                "no scripted reply".to_string(),
            ))
        })
    }
}

impl LLMClient for StubLLMClient {
    async fn generate_structured(
        &self,
        request: GenerationRequest,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.structured_calls.fetch_add(1, Ordering::SeqCst);
        self.next(&self.structured, request)
    }

    async fn generate_text(&self, request: GenerationRequest) -> Result<String, CoreError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.next(&self.text, request)
    }
}

pub fn sample_recipe() -> Recipe {
    Recipe {
        title: "Avocado Toast Deluxe".to_string(),
        description: "Crunchy sourdough topped with lemony smashed avocado".to_string(),
        prep_time: "10 minutes".to_string(),
        cook_time: "5 minutes".to_string(),
        servings: 2,
        ingredients: vec![
            "2 ripe avocados".to_string(),
            "2 slices sourdough".to_string(),
            "1/2 lemon".to_string(),
        ],
        instructions: vec![
            "Toast the bread".to_string(),
            "Smash avocado with lemon juice and salt".to_string(),
            "Spread on toast and serve".to_string(),
        ],
        tips: Some(vec!["Add chili flakes for heat".to_string()]),
    }
}

pub fn sample_recipe_json() -> String {
    serde_json::to_string(&sample_recipe()).unwrap()
}
