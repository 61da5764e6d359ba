use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use boneage::common::{truncate_for_log, LoggedPrediction, PredictionResult};
use boneage::predict::predict_image;
use serde_json::{json, Value};

use super::error::ServerError;
use super::state::AppState;

const UPLOAD_FIELD: &str = "file";

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn health() -> &'static str {
    "healthy"
}

async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, ServerError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            log::debug!("Skipping form field {:?}", field.name());
            continue;
        }
        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let data = field.bytes().await?;
        log::info!("Received upload {} ({} bytes)", file_name, data.len());
        return Ok(data);
    }
    Err(ServerError::MissingField(UPLOAD_FIELD))
}

pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictionResult>, ServerError> {
    let upload = read_upload(&mut multipart).await?;

    let start = Instant::now();
    let model = state.model();
    let result =
        tokio::task::spawn_blocking(move || predict_image(model.as_ref(), &upload)).await??;

    log::info!(
        "Predicted bone age {:.2} months in {:?}",
        result.bone_age_months,
        start.elapsed()
    );
    Ok(Json(result))
}

pub async fn log_prediction(Json(entry): Json<LoggedPrediction>) -> Json<Value> {
    log::info!(
        "Logged prediction: bone age {} months, confidence {}, std dev {}, timestamp {}, image {}",
        entry.bone_age_months,
        entry.confidence_score,
        entry.standard_deviation,
        entry.timestamp,
        truncate_for_log(&entry.image_url, 64)
    );
    Json(json!({ "status": "ok" }))
}
