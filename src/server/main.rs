use bone_age::api::{run_server, ServerConfig};
use bone_age::common::init_logger_exe;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger_exe();
    let config = ServerConfig::parse();

    log::info!("Starting server...");
    run_server(config).await
}
