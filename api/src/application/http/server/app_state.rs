use std::sync::Arc;

use mealsnap_core::application::MealsnapService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealsnapService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealsnapService) -> Self {
        Self { args, service }
    }
}
