pub mod health;
pub mod users;
pub mod version;
pub mod data;
pub mod debug;

pub use health::health_handler;
pub use users::{user_handler, user_clean_handler, users_handler};
pub use version::{version_v1_handler, version_v2_handler};
pub use data::{data_v1_handler, data_v2_handler};
pub use debug::{headers_handler, echo_handler};
