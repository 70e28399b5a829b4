// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";

// Edge-security instance
pub const API_USER: &str = "/api/user";
pub const API_USER_CLEAN: &str = "/api/user-clean";
pub const API_USERS: &str = "/api/users";

// Smart-router instance; API_VERSION is an alias for V1_API_VERSION
pub const API_VERSION: &str = "/api/version";
pub const V1_API_VERSION: &str = "/v1/api/version";
pub const V2_API_VERSION: &str = "/v2/api/version";
pub const V1_API_DATA: &str = "/v1/api/data";
pub const V2_API_DATA: &str = "/v2/api/data";

// Both instances
pub const DEBUG_HEADERS: &str = "/debug/headers";
pub const DEBUG_ECHO: &str = "/debug/echo";
