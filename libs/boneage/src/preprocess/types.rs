use tract_onnx::prelude::tract_ndarray::Array4;

pub const INPUT_SIZE: u32 = 224;
pub const INPUT_CHANNELS: usize = 3;
/// Batch, height, width, channel. Matches the Keras training layout.
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, INPUT_CHANNELS];

/// Normalized model input: `f32` in `[0, 1]` with shape [`INPUT_SHAPE`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Array4<f32>,
}

impl ImageTensor {
    pub(crate) fn new(data: Array4<f32>) -> Self {
        debug_assert_eq!(data.shape(), &INPUT_SHAPE[..]);
        Self { data }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}
