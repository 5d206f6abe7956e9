pub mod auth;
pub mod common;
pub mod courses;
pub mod departments;
pub mod error_code;
pub mod professors;
pub mod reviews;
pub mod search;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use error_code::ErrorCode;

// 记录程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
