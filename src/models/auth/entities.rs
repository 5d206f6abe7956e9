use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 验证码用途
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum CodePurpose {
    Signup,        // 注册验证
    PasswordReset, // 密码重置
}

impl std::fmt::Display for CodePurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodePurpose::Signup => write!(f, "signup"),
            CodePurpose::PasswordReset => write!(f, "password_reset"),
        }
    }
}

impl std::str::FromStr for CodePurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(CodePurpose::Signup),
            "password_reset" => Ok(CodePurpose::PasswordReset),
            _ => Err(format!("Invalid code purpose: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for CodePurpose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 待处理验证码（落库，进程重启后仍然有效）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct VerificationCode {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub code: String,
    pub purpose: CodePurpose,
    // purpose = signup 时为待注册请求的 JSON 负载
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub payload: Option<String>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl VerificationCode {
    pub fn is_expired(&self) -> bool {
        self.expires_at < chrono::Utc::now()
    }
}
