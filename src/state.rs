use crate::config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Reported in every health-check response.
pub const SERVER_VERSION: &str = "1.0.0";

/// Instance label for the PII scrubbing demo backend.
pub const EDGE_SECURITY_DEMO: &str = "01-edge-security";

/// Instance label for the A/B routing demo backend.
pub const SMART_ROUTER_DEMO: &str = "02-smart-router";

/// Shared application state
///
/// `started_at` is captured once at startup and never written afterwards;
/// the health handler derives uptime from it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub demo: &'static str,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Arc<Config>, demo: &'static str) -> Self {
        AppState {
            config,
            demo,
            started_at: Utc::now(),
        }
    }
}
