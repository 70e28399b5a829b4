use std::sync::Arc;

use mock_backends::app;
use mock_backends::config::Config;
use mock_backends::state::{AppState, EDGE_SECURITY_DEMO};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    tracing::info!("edge-security mock backend starting");
    config.log_startup();

    let state = AppState::new(Arc::new(config.clone()), EDGE_SECURITY_DEMO);
    let router = app::edge_security_app(state);

    app::serve(router, &config).await
}
