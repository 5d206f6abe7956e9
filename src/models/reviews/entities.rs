use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价状态机：pending 为初始态，approved/rejected 为审核终态。
// 终态之后作者仍可编辑/删除，任何人仍可举报；不提供回退到 pending 的转换。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for ReviewStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

// 评价目标：课程评价或教授评价的带标签联合体。
// 编辑时允许在两种目标间转换，转换会清空旧目标引用并重新生成标题。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewTarget {
    Course { course_id: i64, department_id: i64 },
    Professor { professor_id: i64 },
}

impl ReviewTarget {
    pub const COURSE: &'static str = "course";
    pub const PROFESSOR: &'static str = "professor";

    pub fn type_name(&self) -> &'static str {
        match self {
            ReviewTarget::Course { .. } => Self::COURSE,
            ReviewTarget::Professor { .. } => Self::PROFESSOR,
        }
    }

    /// 教授评价时返回教授 ID
    pub fn professor_id(&self) -> Option<i64> {
        match self {
            ReviewTarget::Professor { professor_id } => Some(*professor_id),
            ReviewTarget::Course { .. } => None,
        }
    }

    /// 课程评价时返回 (课程 ID, 院系 ID)
    pub fn course_ref(&self) -> Option<(i64, i64)> {
        match self {
            ReviewTarget::Course {
                course_id,
                department_id,
            } => Some((*course_id, *department_id)),
            ReviewTarget::Professor { .. } => None,
        }
    }
}

// 举报条目，追加后不可变更，直到评价本身被删除
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewReport {
    pub reporter: String,
    pub reason: String,
    pub details: Option<String>,
}

// 评价实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub target: ReviewTarget,
    // 由被评对象生成的展示标题
    pub title: String,
    // 整数评分，1..=5
    pub rating: i32,
    pub content: String,
    // 作者以认证身份的稳定 ID 记录，用户名仅作展示用途反规范化保存
    pub author_id: i64,
    pub author_username: String,
    pub upvotes: Vec<String>,
    pub downvotes: Vec<String>,
    pub status: ReviewStatus,
    pub reports: Vec<ReviewReport>,
    pub report_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Review {
    /// 投票数从集合基数派生，不单独维护计数器
    pub fn upvote_count(&self) -> usize {
        self.upvotes.len()
    }

    pub fn downvote_count(&self) -> usize {
        self.downvotes.len()
    }

    /// 指定用户是否已举报过本评价
    pub fn has_report_from(&self, username: &str) -> bool {
        self.reports.iter().any(|r| r.reporter == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_names() {
        let course = ReviewTarget::Course {
            course_id: 1,
            department_id: 2,
        };
        let professor = ReviewTarget::Professor { professor_id: 3 };
        assert_eq!(course.type_name(), "course");
        assert_eq!(professor.type_name(), "professor");
        assert_eq!(course.professor_id(), None);
        assert_eq!(professor.professor_id(), Some(3));
        assert_eq!(course.course_ref(), Some((1, 2)));
        assert_eq!(professor.course_ref(), None);
    }

    #[test]
    fn test_target_serde_tagging() {
        let professor = ReviewTarget::Professor { professor_id: 7 };
        let json = serde_json::to_value(&professor).unwrap();
        assert_eq!(json["type"], "professor");
        assert_eq!(json["professor_id"], 7);

        let parsed: ReviewTarget =
            serde_json::from_str(r#"{"type":"course","course_id":4,"department_id":9}"#).unwrap();
        assert_eq!(
            parsed,
            ReviewTarget::Course {
                course_id: 4,
                department_id: 9
            }
        );
    }
}
