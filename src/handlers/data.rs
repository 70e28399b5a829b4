use crate::models::{DataPayload, DataResponse};
use crate::routes;
use axum::Json;

/// GET /v1/api/data handler - v1 item list
#[utoipa::path(
    get,
    path = routes::V1_API_DATA,
    responses(
        (status = 200, description = "v1 data payload", body = DataResponse)
    ),
    tag = "data"
)]
pub async fn data_v1_handler() -> Json<DataResponse> {
    tracing::info!("GET /v1/api/data - Returning v1 data");

    let items = vec![
        "item1".to_string(),
        "item2".to_string(),
        "item3".to_string(),
    ];
    let count = items.len();

    Json(DataResponse {
        version: "v1".to_string(),
        data: DataPayload {
            items,
            count,
            enhanced: None,
            ai_recommendations: None,
        },
    })
}

/// GET /v2/api/data handler - v2 item list with enhanced fields
#[utoipa::path(
    get,
    path = routes::V2_API_DATA,
    responses(
        (status = 200, description = "v2 data payload", body = DataResponse)
    ),
    tag = "data"
)]
pub async fn data_v2_handler() -> Json<DataResponse> {
    tracing::info!("GET /v2/api/data - Returning v2 data");

    let items = vec![
        "item1".to_string(),
        "item2".to_string(),
        "item3".to_string(),
        "item4-new".to_string(),
        "item5-beta".to_string(),
    ];
    let count = items.len();

    Json(DataResponse {
        version: "v2-beta".to_string(),
        data: DataPayload {
            items,
            count,
            enhanced: Some(true),
            ai_recommendations: Some(vec!["rec1".to_string(), "rec2".to_string()]),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .route(crate::routes::V1_API_DATA, get(data_v1_handler))
            .route(crate::routes::V2_API_DATA, get(data_v2_handler))
    }

    async fn get_body(app: Router, uri: &str) -> JsonValue {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
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
    async fn test_v1_data_payload() {
        let body = get_body(test_app(), "/v1/api/data").await;

        assert_eq!(body["version"], "v1");
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"]["count"], 3);
        assert!(body["data"].get("enhanced").is_none());
        assert!(body["data"].get("ai_recommendations").is_none());
    }

    #[tokio::test]
    async fn test_v2_data_payload() {
        let body = get_body(test_app(), "/v2/api/data").await;

        assert_eq!(body["version"], "v2-beta");
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[3], "item4-new");
        assert_eq!(items[4], "item5-beta");
        assert_eq!(body["data"]["count"], 5);
        assert_eq!(body["data"]["enhanced"], true);
        assert_eq!(
            body["data"]["ai_recommendations"],
            serde_json::json!(["rec1", "rec2"])
        );
    }
}
