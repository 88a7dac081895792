//! RepWatch - Main Entry Point

use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== RepWatch v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting repetition counting pipeline...");

    let addr = "0.0.0.0:8080";
    run_server(addr).await?;

    Ok(())
}
