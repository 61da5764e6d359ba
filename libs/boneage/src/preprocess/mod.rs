mod types;
mod utils;

pub use types::ImageTensor;
pub use types::{INPUT_CHANNELS, INPUT_SHAPE, INPUT_SIZE};
pub use utils::decode_image;
pub use utils::preprocess_bytes;
pub use utils::to_image_tensor;
