use crate::api_doc::{EdgeSecurityApiDoc, SmartRouterApiDoc};
use crate::config::Config;
use crate::error::ApiError;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use anyhow::Context;
use axum::{Router, extract::OriginalUri, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the router for the edge-security (PII scrubbing) instance.
pub fn edge_security_app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_USER, get(handlers::user_handler))
        .route(routes::API_USER_CLEAN, get(handlers::user_clean_handler))
        .route(routes::API_USERS, get(handlers::users_handler))
        .route(routes::DEBUG_HEADERS, get(handlers::headers_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", EdgeSecurityApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the router for the smart-router (A/B testing) instance.
pub fn smart_router_app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        // /api/version is an alias kept for clients that predate the
        // versioned path scheme
        .route(routes::API_VERSION, get(handlers::version_v1_handler))
        .route(routes::V1_API_VERSION, get(handlers::version_v1_handler))
        .route(routes::V2_API_VERSION, get(handlers::version_v2_handler))
        .route(routes::V1_API_DATA, get(handlers::data_v1_handler))
        .route(routes::V2_API_DATA, get(handlers::data_v2_handler))
        .route(routes::DEBUG_HEADERS, get(handlers::headers_handler))
        .route(
            routes::DEBUG_ECHO,
            get(handlers::echo_handler).post(handlers::echo_handler),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", SmartRouterApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until externally terminated.
pub async fn serve(app: Router, config: &Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Fallback for unmatched paths and methods; both map to the NotFound
/// envelope, the only non-500 error the fixtures produce.
async fn not_found_handler(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
