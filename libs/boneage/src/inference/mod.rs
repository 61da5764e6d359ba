mod onnx;
pub use onnx::OnnxRegressor;

use anyhow::Result;

use crate::preprocess::ImageTensor;

/// A model that maps a preprocessed image to a single scalar.
///
/// Implementations are shared read-only across concurrent requests.
pub trait Regressor: Send + Sync {
    fn predict(&self, input: ImageTensor) -> Result<f32>;
}
