use std::path::PathBuf;
use std::time::Instant;

use bone_age::common::init_logger_exe;
use boneage::inference::OnnxRegressor;
use boneage::predict::predict_file;
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "A CLI tool to predict bone age from a hand X-ray", long_about = None)]
struct Cli {
    #[arg(
        long,
        help = "input file in image (png, jpeg, gif, webp, tiff, bmp, etc) format"
    )]
    image: PathBuf,
    #[arg(
        long,
        env = "MODEL_PATH",
        default_value = "fine_tuned_model.onnx",
        help = "pretrained regression model in ONNX format"
    )]
    model_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logger_exe();
    let cli = Cli::parse();

    let model = OnnxRegressor::load(&cli.model_path)?;

    let start = Instant::now();
    let result = predict_file(&model, &cli.image)?;
    log::info!("Prediction took {:?}", start.elapsed());

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
