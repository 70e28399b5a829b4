use crate::error::ApiError;
use crate::models::{EchoResponse, HeaderDumpResponse};
use crate::routes;
use axum::{
    Json,
    extract::{ConnectInfo, OriginalUri, Query, Request},
    http::{HeaderMap, Method},
};
use std::collections::BTreeMap;
use std::net::SocketAddr;

// Cap on the echoed request body; nothing the test harnesses send comes
// close to this.
const ECHO_BODY_LIMIT: usize = 1024 * 1024;

/// GET /debug/headers handler - Dump of the inbound request
///
/// Returns every request header verbatim plus method, path, and the peer
/// address, for debugging what an upstream proxy forwarded.
#[utoipa::path(
    get,
    path = routes::DEBUG_HEADERS,
    responses(
        (status = 200, description = "Request headers and metadata", body = HeaderDumpResponse)
    ),
    tag = "debug"
)]
pub async fn headers_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Json<HeaderDumpResponse> {
    let dump = header_dump(&headers);
    tracing::debug!("Request headers: {:?}", dump);

    Json(HeaderDumpResponse {
        headers: dump,
        method: method.to_string(),
        path: uri.path().to_string(),
        remote_addr: addr.ip().to_string(),
    })
}

/// GET/POST /debug/echo handler - Echo of the inbound request
///
/// Returns method, path, headers, and query parameters; POST requests
/// additionally get their raw body echoed back as text.
#[utoipa::path(
    method(get, post),
    path = routes::DEBUG_ECHO,
    request_body = String,
    responses(
        (status = 200, description = "Echo of the request", body = EchoResponse),
        (status = 500, description = "Request body could not be read", body = crate::error::ErrorResponse)
    ),
    tag = "debug"
)]
pub async fn echo_handler(
    Query(args): Query<BTreeMap<String, String>>,
    request: Request,
) -> Result<Json<EchoResponse>, ApiError> {
    let (parts, body) = request.into_parts();

    let body = if parts.method == Method::POST {
        let bytes = axum::body::to_bytes(body, ECHO_BODY_LIMIT)
            .await
            .map_err(ApiError::internal)?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    } else {
        None
    };

    Ok(Json(EchoResponse {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers: header_dump(&parts.headers),
        args,
        body,
    }))
}

/// Collects headers into a name -> value map. Names are the lowercase
/// wire form; a repeated name keeps its last value.
fn header_dump(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{HeaderName, Request as HttpRequest, StatusCode},
        routing::get,
    };
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .route(crate::routes::DEBUG_HEADERS, get(headers_handler))
            .route(
                crate::routes::DEBUG_ECHO,
                get(echo_handler).post(echo_handler),
            )
            .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 41234))))
    }

    async fn body_json(response: axum::response::Response) -> JsonValue {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_header_dump_lowercases_names() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Custom-Header".parse::<HeaderName>().unwrap(),
            "value-1".parse().unwrap(),
        );
        headers.insert("user-agent", "test-harness/1.0".parse().unwrap());

        let dump = header_dump(&headers);

        assert_eq!(dump["x-custom-header"], "value-1");
        assert_eq!(dump["user-agent"], "test-harness/1.0");
    }

    #[tokio::test]
    async fn test_headers_endpoint_dumps_request() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri("/debug/headers")
                    .header("X-Routed-By", "wasm-filter")
                    .header("User-Agent", "test-harness/1.0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["headers"]["x-routed-by"], "wasm-filter");
        assert_eq!(body["headers"]["user-agent"], "test-harness/1.0");
        assert_eq!(body["method"], "GET");
        assert_eq!(body["path"], "/debug/headers");
        assert_eq!(body["remote_addr"], "127.0.0.1");
    }

    #[tokio::test]
    async fn test_echo_get_has_args_and_no_body() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri("/debug/echo?variant=beta&user=42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["method"], "GET");
        assert_eq!(body["path"], "/debug/echo");
        assert_eq!(body["args"]["variant"], "beta");
        assert_eq!(body["args"]["user"], "42");
        assert!(body.get("body").is_none());
    }

    #[tokio::test]
    async fn test_echo_post_includes_body_text() {
        let response = test_app()
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/debug/echo")
                    .header("content-type", "text/plain")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["method"], "POST");
        assert_eq!(body["body"], "hello");
        assert_eq!(body["headers"]["content-type"], "text/plain");
    }
}
