use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tinyapp::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    config.print_summary();

    server::run(config).await
}
