use std::path::Path;

use anyhow::{Context, Result};

use crate::common::PredictionResult;
use crate::inference::Regressor;
use crate::preprocess::preprocess_bytes;

/// Decode, preprocess and run `bytes` through `model`.
pub fn predict_image(model: &dyn Regressor, bytes: &[u8]) -> Result<PredictionResult> {
    let tensor = preprocess_bytes(bytes)?;
    let months = model.predict(tensor)?;
    if !months.is_finite() {
        return Err(anyhow::anyhow!("Model produced a non-finite prediction: {}", months));
    }
    log::debug!("Raw model output: {}", months);
    Ok(PredictionResult::new(f64::from(months)))
}

pub fn predict_file(model: &dyn Regressor, path: &Path) -> Result<PredictionResult> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image from {}", path.display()))?;
    predict_image(model, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{round_to, CONFIDENCE_SCORE, STANDARD_DEVIATION};
    use crate::preprocess::ImageTensor;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::{Cursor, Write};

    /// Deterministic stand-in: maps mean intensity onto 12..228 months.
    struct MeanIntensity;

    impl Regressor for MeanIntensity {
        fn predict(&self, input: ImageTensor) -> Result<f32> {
            let array = input.into_array();
            let mean = array.iter().sum::<f32>() / array.len() as f32;
            Ok(12.0 + mean * 216.0 + 0.004_321)
        }
    }

    struct Fixed(f32);

    impl Regressor for Fixed {
        fn predict(&self, _input: ImageTensor) -> Result<f32> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl Regressor for Broken {
        fn predict(&self, _input: ImageTensor) -> Result<f32> {
            Err(anyhow::anyhow!("runtime exploded"))
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 3 % 256) as u8, (y * 5 % 256) as u8, 90])
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_predict_image_fills_all_fields() {
        let result = predict_image(&MeanIntensity, &png(400, 300)).unwrap();

        assert!(result.bone_age_months > 12.0 && result.bone_age_months < 228.0);
        assert_eq!(result.confidence_score, CONFIDENCE_SCORE);
        assert_eq!(result.standard_deviation, STANDARD_DEVIATION);
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[test]
    fn test_predict_image_rounds_to_two_places() {
        let result = predict_image(&Fixed(150.126_7), &png(10, 10)).unwrap();
        assert_eq!(result.bone_age_months, 150.13);

        let result = predict_image(&MeanIntensity, &png(97, 61)).unwrap();
        assert_eq!(result.bone_age_months, round_to(result.bone_age_months, 2));
    }

    #[test]
    fn test_identical_uploads_give_identical_predictions() {
        let bytes = png(512, 512);
        let first = predict_image(&MeanIntensity, &bytes).unwrap();
        let second = predict_image(&MeanIntensity, &bytes).unwrap();
        assert_eq!(first.bone_age_months, second.bone_age_months);
    }

    #[test]
    fn test_undecodable_upload_fails() {
        assert!(predict_image(&Fixed(100.0), b"GIF89a but not really").is_err());
    }

    #[test]
    fn test_model_error_propagates() {
        let err = predict_image(&Broken, &png(20, 20)).unwrap_err();
        assert!(err.to_string().contains("runtime exploded"));
    }

    #[test]
    fn test_non_finite_prediction_is_rejected() {
        assert!(predict_image(&Fixed(f32::NAN), &png(20, 20)).is_err());
        assert!(predict_image(&Fixed(f32::INFINITY), &png(20, 20)).is_err());
    }

    #[test]
    fn test_predict_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&png(64, 48)).unwrap();

        let result = predict_file(&Fixed(88.0), file.path()).unwrap();
        assert_eq!(result.bone_age_months, 88.0);
    }

    #[test]
    fn test_predict_file_missing() {
        let err = predict_file(&Fixed(88.0), Path::new("no/such/xray.png")).unwrap_err();
        assert!(err.to_string().contains("no/such/xray.png"));
    }
}
