use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tract_onnx::prelude::*;

use super::Regressor;
use crate::preprocess::{ImageTensor, INPUT_SHAPE};

/// ONNX regression model executed with `tract`, specialized to [`INPUT_SHAPE`].
pub struct OnnxRegressor {
    plan: TypedRunnableModel<TypedModel>,
    path: PathBuf,
}

impl std::fmt::Debug for OnnxRegressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxRegressor")
            .field("path", &self.path)
            .field("input_shape", &INPUT_SHAPE)
            .finish()
    }
}

impl OnnxRegressor {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow::anyhow!("Model file not found: {}", path.display()));
        }

        let shape: TVec<usize> = INPUT_SHAPE.iter().copied().collect();
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .with_context(|| format!("Failed to parse ONNX model {}", path.display()))?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), shape))
            .with_context(|| format!("Failed to fix model input to f32 {:?}", INPUT_SHAPE))?
            .into_optimized()
            .context("Failed to optimize model")?
            .into_runnable()
            .context("Failed to build runnable plan")?;

        let model = Self {
            plan,
            path: path.to_path_buf(),
        };

        // Reject artifacts without a usable f32 output at startup.
        let dummy = tract_ndarray::ArrayD::<f32>::zeros(tract_ndarray::IxDyn(&INPUT_SHAPE));
        let dry_run = model.run(dummy).context("Model dry run failed")?;
        log::info!(
            "Loaded model {} (dry run output {})",
            model.path.display(),
            dry_run
        );

        Ok(model)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, input: tract_ndarray::ArrayD<f32>) -> Result<f32> {
        let outputs = self.plan.run(tvec!(input.into_tvalue()))?;
        let first = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("Model produced no outputs"))?;
        let view = first
            .to_array_view::<f32>()
            .context("Model output is not f32")?;
        view.iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Model output has zero elements"))
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, input: ImageTensor) -> Result<f32> {
        self.run(input.into_array().into_dyn())
    }
}
