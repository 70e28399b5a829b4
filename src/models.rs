use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub demo: String,
    pub uptime_seconds: i64,
}

/// Full user record including PII, the scrubbing target for the edge filter
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub payment: PaymentInfo,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry: String,
    pub billing_address: BillingAddress,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BillingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// User record with no sensitive fields, used to verify the filter leaves
/// clean payloads untouched
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CleanUserProfile {
    pub id: String,
    pub name: String,
    pub membership: String,
    pub preferences: Preferences,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Preferences {
    pub newsletter: bool,
    pub notifications: bool,
}

/// Compact user record used in the batch endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub ssn: String,
    pub card: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
    pub total: usize,
}

/// Versioned API response for the A/B routing demo
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VersionResponse {
    pub version: String,
    pub environment: String,
    pub build: String,
    pub features: FeatureFlags,
    pub routing_info: RoutingInfo,
}

/// Feature flags; `experimental_ai` only appears in the v2 payload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeatureFlags {
    pub new_dashboard: bool,
    pub beta_analytics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental_ai: Option<bool>,
}

/// Echo of the routing headers set by an upstream router, asserted on by
/// the test harness to verify routing decisions
#[derive(Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoutingInfo {
    pub routed_by: String,
    pub route_reason: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataResponse {
    pub version: String,
    pub data: DataPayload,
}

/// Item list; the `enhanced` and `ai_recommendations` fields only appear
/// in the v2 payload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataPayload {
    pub items: Vec<String>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_recommendations: Option<Vec<String>>,
}

/// Response type for the header dump endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HeaderDumpResponse {
    pub headers: BTreeMap<String, String>,
    pub method: String,
    pub path: String,
    pub remote_addr: String,
}

/// Response type for the request echo endpoint; `body` is only present
/// for POST requests
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub args: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
