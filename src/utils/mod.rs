pub mod content_filter;
pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use content_filter::{ContentPolicy, content_policy};
pub use extractor::{
    SafeCourseIdI64, SafeDepartmentIdI64, SafeIDI64, SafeProfessorIdI64, SafeReviewIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
