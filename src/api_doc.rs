use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    BillingAddress, CleanUserProfile, DataPayload, DataResponse, EchoResponse, FeatureFlags,
    HeaderDumpResponse, HealthResponse, PaymentInfo, Preferences, RoutingInfo, UserListResponse,
    UserProfile, UserSummary, VersionResponse,
};

/// OpenAPI documentation for the edge-security instance
#[derive(OpenApi)]
#[openapi(
    info(
        title = "edge-security mock backend",
        version = "1.0.0",
        description = "Fixture endpoints with PII bait data for edge filter scrubbing demos"
    ),
    paths(
        handlers::health::health_handler,
        handlers::users::user_handler,
        handlers::users::user_clean_handler,
        handlers::users::users_handler,
        handlers::debug::headers_handler
    ),
    components(
        schemas(
            HealthResponse,
            UserProfile,
            PaymentInfo,
            BillingAddress,
            CleanUserProfile,
            Preferences,
            UserSummary,
            UserListResponse,
            HeaderDumpResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "users", description = "PII fixture payloads"),
        (name = "debug", description = "Request debugging")
    )
)]
pub struct EdgeSecurityApiDoc;

/// OpenAPI documentation for the smart-router instance
#[derive(OpenApi)]
#[openapi(
    info(
        title = "smart-router mock backend",
        version = "1.0.0",
        description = "Versioned fixture endpoints for A/B routing demos"
    ),
    paths(
        handlers::health::health_handler,
        handlers::version::version_v1_handler,
        handlers::version::version_v2_handler,
        handlers::data::data_v1_handler,
        handlers::data::data_v2_handler,
        handlers::debug::headers_handler,
        handlers::debug::echo_handler
    ),
    components(
        schemas(
            HealthResponse,
            VersionResponse,
            FeatureFlags,
            RoutingInfo,
            DataResponse,
            DataPayload,
            HeaderDumpResponse,
            EchoResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "version", description = "Versioned A/B endpoints"),
        (name = "data", description = "Versioned data payloads"),
        (name = "debug", description = "Request debugging")
    )
)]
pub struct SmartRouterApiDoc;
