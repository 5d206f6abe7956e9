//! 业务错误码目录
//!
//! 数值按域分段：1xxx 通用、2xxx 认证、3xxx 用户、4xxx 院系、
//! 5xxx 课程、6xxx 教授、7xxx 评价。响应体中以整数下发。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InternalServerError = 1000,
    BadRequest = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1005,
    RateLimitExceeded = 1006,

    // 认证
    AuthFailed = 2001,
    TokenExpired = 2002,
    TokenInvalid = 2003,
    UserNotActive = 2004,
    VerificationCodeInvalid = 2005,
    EmailSendFailed = 2006,
    RegisterFailed = 2007,

    // 用户
    UserNameInvalid = 3001,
    UserEmailInvalid = 3002,
    PasswordPolicyViolation = 3003,
    UserNameAlreadyExists = 3004,
    UserEmailAlreadyExists = 3005,
    UserNotFound = 3006,
    UserProtected = 3007,

    // 院系
    DepartmentNotFound = 4001,
    DepartmentAlreadyExists = 4002,
    DepartmentInUse = 4003,

    // 课程
    CourseNotFound = 5001,
    CourseAlreadyExists = 5002,
    CourseInUse = 5003,
    CourseDepartmentMismatch = 5004,

    // 教授
    ProfessorNotFound = 6001,
    ProfessorAlreadyExists = 6002,

    // 评价
    ReviewNotFound = 7001,
    RatingOutOfRange = 7002,
    InappropriateContent = 7003,
    ReviewPermissionDenied = 7004,
    AlreadyReported = 7005,
    ReviewTargetInvalid = 7006,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_segments() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::TokenExpired as i32, 2002);
        assert_eq!(ErrorCode::InappropriateContent as i32, 7003);
    }
}
