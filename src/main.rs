use clap::Parser;
use compile_relay::{create_app, run_server, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    info!(
        "Relaying {} to {}",
        config.routes.join(", "),
        config.piston_url
    );

    let app = create_app(&config)?;
    run_server(app, config.addr()).await?;

    Ok(())
}
