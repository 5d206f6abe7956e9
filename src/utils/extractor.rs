//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为 i64，解析失败直接返回 400，
//! 避免在每个处理函数里重复写解析与错误分支。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorBadRequest};
use futures_util::future::{Ready, err, ok};

use crate::models::{ApiResponse, ErrorCode};

/// 定义从指定路径参数解析 i64 的提取器
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                match req.match_info().get($param).map(str::parse::<i64>) {
                    Some(Ok(id)) if id > 0 => ok($name(id)),
                    _ => err(ErrorBadRequest(
                        serde_json::to_string(&ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid ", $label, " id in path"),
                        ))
                        .unwrap_or_default(),
                    )),
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id", "resource");
define_safe_id_extractor!(SafeDepartmentIdI64, "id", "department");
define_safe_id_extractor!(SafeCourseIdI64, "id", "course");
define_safe_id_extractor!(SafeProfessorIdI64, "id", "professor");
define_safe_id_extractor!(SafeReviewIdI64, "id", "review");
