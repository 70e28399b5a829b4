use crate::models::{
    BillingAddress, CleanUserProfile, PaymentInfo, Preferences, UserListResponse, UserProfile,
    UserSummary,
};
use crate::routes;
use axum::Json;

/// GET /api/user handler - User record with PII
///
/// The edge filter under test is expected to scrub:
/// - SSN: 123-45-6789 -> XXX-XX-XXXX
/// - Credit card: 4111-1111-1111-1111 -> XXXX-XXXX-XXXX-1111
/// - Email: john.doe@example.com -> [EMAIL REDACTED]
#[utoipa::path(
    get,
    path = routes::API_USER,
    responses(
        (status = 200, description = "User record with unredacted PII", body = UserProfile)
    ),
    tag = "users"
)]
pub async fn user_handler() -> Json<UserProfile> {
    tracing::info!("GET /api/user - Returning user with PII data");
    Json(pii_user())
}

/// GET /api/user-clean handler - User record without PII
///
/// Verifies the filter leaves payloads without sensitive fields unmodified.
#[utoipa::path(
    get,
    path = routes::API_USER_CLEAN,
    responses(
        (status = 200, description = "User record without sensitive fields", body = CleanUserProfile)
    ),
    tag = "users"
)]
pub async fn user_clean_handler() -> Json<CleanUserProfile> {
    tracing::info!("GET /api/user-clean - Returning user without PII data");
    Json(clean_user())
}

/// GET /api/users handler - Multiple users with PII for batch testing
#[utoipa::path(
    get,
    path = routes::API_USERS,
    responses(
        (status = 200, description = "User list with unredacted PII", body = UserListResponse)
    ),
    tag = "users"
)]
pub async fn users_handler() -> Json<UserListResponse> {
    tracing::info!("GET /api/users - Returning multiple users with PII");
    let users = pii_user_list();
    let total = users.len();
    Json(UserListResponse { users, total })
}

fn pii_user() -> UserProfile {
    UserProfile {
        id: "user-12345".to_string(),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "555-123-4567".to_string(),
        ssn: "123-45-6789".to_string(),
        payment: PaymentInfo {
            card_number: "4111-1111-1111-1111".to_string(),
            expiry: "12/25".to_string(),
            billing_address: BillingAddress {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                state: "CA".to_string(),
                zip: "12345".to_string(),
            },
        },
        created_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

fn clean_user() -> CleanUserProfile {
    CleanUserProfile {
        id: "user-12345".to_string(),
        name: "John Doe".to_string(),
        membership: "gold".to_string(),
        preferences: Preferences {
            newsletter: true,
            notifications: true,
        },
        created_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

fn pii_user_list() -> Vec<UserSummary> {
    vec![
        UserSummary {
            id: "user-001".to_string(),
            name: "Alice Smith".to_string(),
            email: "alice.smith@example.com".to_string(),
            ssn: "111-22-3333".to_string(),
            card: "5500-0000-0000-0004".to_string(),
        },
        UserSummary {
            id: "user-002".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob.j@company.org".to_string(),
            ssn: "444-55-6666".to_string(),
            card: "3400-000000-00009".to_string(),
        },
        UserSummary {
            id: "user-003".to_string(),
            name: "Carol Williams".to_string(),
            email: "carol@personal.net".to_string(),
            ssn: "777-88-9999".to_string(),
            card: "6011-0000-0000-0004".to_string(),
        },
    ]
}
