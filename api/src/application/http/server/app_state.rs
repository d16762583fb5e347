use std::sync::Arc;

use recipe_studio_core::application::RecipeStudioService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeStudioService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeStudioService) -> Self {
        Self { args, service }
    }
}
