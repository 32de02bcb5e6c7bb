use std::sync::Arc;

use clap::Parser;
use placeholder_core::{JsonPlaceholder, UreqTransport};
use report_server::config::ServerArgs;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = ServerArgs::parse();

    let transport = UreqTransport::connect(&args.client_config())?;
    info!(api = transport.base_url(), "API client ready");
    let client = Arc::new(JsonPlaceholder::new(transport));

    let listener = TcpListener::bind(args.listen).await?;
    info!(addr = %args.listen, "listening");
    report_server::run(listener, client).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
