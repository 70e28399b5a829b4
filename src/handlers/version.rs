use crate::models::{FeatureFlags, RoutingInfo, VersionResponse};
use crate::routes;
use axum::{Json, http::HeaderMap};

/// Header set by the upstream router naming the component that routed
/// the request.
pub const ROUTED_BY_HEADER: &str = "x-routed-by";

/// Header set by the upstream router explaining the routing decision.
pub const ROUTE_REASON_HEADER: &str = "x-route-reason";

/// Extracts the routing headers from a request, applying the defaults a
/// directly-reached backend reports.
pub fn routing_info(headers: &HeaderMap) -> RoutingInfo {
    let routed_by = headers
        .get(ROUTED_BY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("direct");
    let route_reason = headers
        .get(ROUTE_REASON_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none");

    RoutingInfo {
        routed_by: routed_by.to_string(),
        route_reason: route_reason.to_string(),
    }
}

/// GET /api/version and /v1/api/version handler - v1 (stable) response
///
/// The default endpoint for standard users. Both paths are registered to
/// the same handler and must produce identical bodies.
#[utoipa::path(
    get,
    path = routes::V1_API_VERSION,
    params(
        ("X-Routed-By" = Option<String>, Header, description = "Router that forwarded the request"),
        ("X-Route-Reason" = Option<String>, Header, description = "Why the router chose this backend")
    ),
    responses(
        (status = 200, description = "v1 stable version payload", body = VersionResponse)
    ),
    tag = "version"
)]
pub async fn version_v1_handler(headers: HeaderMap) -> Json<VersionResponse> {
    tracing::info!("GET /v1/api/version - Returning v1 stable response");

    Json(VersionResponse {
        version: "v1".to_string(),
        environment: "production".to_string(),
        build: "2024.01.15.001".to_string(),
        features: FeatureFlags {
            new_dashboard: false,
            beta_analytics: false,
            experimental_ai: None,
        },
        routing_info: routing_info(&headers),
    })
}

/// GET /v2/api/version handler - v2 (beta) response
///
/// Reached when the upstream router detects beta user criteria.
#[utoipa::path(
    get,
    path = routes::V2_API_VERSION,
    params(
        ("X-Routed-By" = Option<String>, Header, description = "Router that forwarded the request"),
        ("X-Route-Reason" = Option<String>, Header, description = "Why the router chose this backend")
    ),
    responses(
        (status = 200, description = "v2 beta version payload", body = VersionResponse)
    ),
    tag = "version"
)]
pub async fn version_v2_handler(headers: HeaderMap) -> Json<VersionResponse> {
    tracing::info!("GET /v2/api/version - Returning v2 beta response");

    Json(VersionResponse {
        version: "v2-beta".to_string(),
        environment: "beta".to_string(),
        build: "2024.01.20.042".to_string(),
        features: FeatureFlags {
            new_dashboard: true,
            beta_analytics: true,
            experimental_ai: Some(true),
        },
        routing_info: routing_info(&headers),
    })
}
