use std::sync::Arc;

use mock_backends::app;
use mock_backends::config::Config;
use mock_backends::state::{AppState, SMART_ROUTER_DEMO};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    tracing::info!("smart-router mock backend starting");
    config.log_startup();

    let state = AppState::new(Arc::new(config.clone()), SMART_ROUTER_DEMO);
    let router = app::smart_router_app(state);

    app::serve(router, &config).await
}
