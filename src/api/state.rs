use std::sync::Arc;

use boneage::inference::Regressor;

/// Shared across handlers. The model is loaded once and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn Regressor>,
}

impl AppState {
    pub fn new(model: Arc<dyn Regressor>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> Arc<dyn Regressor> {
        Arc::clone(&self.model)
    }
}
