use anyhow::Result;
use image::imageops::{self, FilterType};
use image::DynamicImage;
use tract_onnx::prelude::tract_ndarray::Array4;

use super::types::{ImageTensor, INPUT_CHANNELS, INPUT_SIZE};

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| anyhow::anyhow!("Failed to decode image ({} bytes): {}", bytes.len(), e))
}

/// Converts to RGB, stretches to `INPUT_SIZE` x `INPUT_SIZE` and scales every channel into `[0, 1]`.
///
/// Alpha is dropped rather than composited and the aspect ratio is not preserved.
pub fn to_image_tensor(image: &DynamicImage) -> ImageTensor {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::CatmullRom);

    let side = INPUT_SIZE as usize;
    let data = Array4::from_shape_fn((1, side, side, INPUT_CHANNELS), |(_, y, x, c)| {
        resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    });
    ImageTensor::new(data)
}

pub fn preprocess_bytes(bytes: &[u8]) -> Result<ImageTensor> {
    let image = decode_image(bytes)?;
    log::debug!(
        "Decoded {}x{} image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(to_image_tensor(&image))
}
