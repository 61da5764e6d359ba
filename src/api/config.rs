use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 25 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "HTTP service predicting bone age from a hand X-ray", long_about = None)]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0", help = "address to listen on")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 8000, help = "port to listen on")]
    pub port: u16,
    #[arg(
        long,
        env = "MODEL_PATH",
        default_value = "fine_tuned_model.onnx",
        help = "pretrained regression model in ONNX format"
    )]
    pub model_path: PathBuf,
    #[arg(
        long,
        env = "MAX_UPLOAD_SIZE",
        default_value_t = DEFAULT_MAX_UPLOAD_SIZE,
        help = "largest accepted request body in bytes"
    )]
    pub max_upload_size: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
