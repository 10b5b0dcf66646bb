use docchat::{config::Config, models::AppState, routes::create_router};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docchat=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Ensure the upload directory exists
    tokio::fs::create_dir_all(&config.storage.upload_dir).await?;
    info!(dir = %config.storage.upload_dir.display(), "Upload directory ready");

    if config.llm.openrouter_api_key.is_empty() {
        tracing::warn!("OPENROUTER_API_KEY is not set; /ask will report a configuration error");
    }

    // Create shared state
    let state = AppState::new(config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
