use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("prediction failed: {0:#}")]
    Prediction(#[from] anyhow::Error),

    #[error("prediction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Decode and inference failures share one opaque response.
        let (status, detail) = match &self {
            ServerError::MissingField(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ServerError::Multipart(e) => (e.status(), e.body_text()),
            ServerError::Prediction(_) | ServerError::Task(_) => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
