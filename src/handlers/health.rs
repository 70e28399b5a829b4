use crate::models::HealthResponse;
use crate::routes;
use crate::state::{AppState, SERVER_VERSION};
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// Used by the load balancer for liveness probing. Uptime is the whole
/// number of seconds elapsed since the server captured its start timestamp.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);
    tracing::debug!("Health check passed (uptime: {}s)", uptime);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: SERVER_VERSION.to_string(),
        demo: state.demo.to_string(),
        uptime_seconds: uptime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::{EDGE_SECURITY_DEMO, SMART_ROUTER_DEMO};
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(demo: &'static str) -> Router {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        };
        let state = AppState::new(Arc::new(config), demo);

        Router::new()
            .route(crate::routes::HEALTH, get(health_handler))
            .with_state(state)
    }

    async fn get_health(app: Router) -> HealthResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_fields() {
        let health = get_health(test_app(EDGE_SECURITY_DEMO)).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0");
        assert_eq!(health.demo, "01-edge-security");
        assert!(health.uptime_seconds >= 0);
    }

    #[tokio::test]
    async fn test_health_endpoint_demo_label_per_instance() {
        let health = get_health(test_app(SMART_ROUTER_DEMO)).await;
        assert_eq!(health.demo, "02-smart-router");
    }

    #[tokio::test]
    async fn test_health_uptime_non_decreasing() {
        let app = test_app(EDGE_SECURITY_DEMO);

        let first = get_health(app.clone()).await;
        let second = get_health(app).await;

        assert!(second.uptime_seconds >= first.uptime_seconds);
    }

    #[tokio::test]
    async fn test_health_uptime_counts_from_start_timestamp() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        };
        let mut state = AppState::new(Arc::new(config), EDGE_SECURITY_DEMO);
        state.started_at = Utc::now() - chrono::Duration::seconds(90);

        let app = Router::new()
            .route(crate::routes::HEALTH, get(health_handler))
            .with_state(state);

        let health = get_health(app).await;
        assert!(health.uptime_seconds >= 90);
    }
}
