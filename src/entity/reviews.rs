//! 评价实体
//!
//! 业务模型里评价目标是一个带标签的联合体（课程评价 / 教授评价），
//! 数据库中以 review_type 判别列 + 可空引用列的形式持久化。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub review_type: String,
    pub course_id: Option<i64>,
    pub department_id: Option<i64>,
    pub professor_id: Option<i64>,
    pub title: String,
    pub rating: i32,
    pub content: String,
    pub author_id: i64,
    pub author_username: String,
    // 投票人用户名集合，JSON 数组字符串
    pub upvotes: String,
    pub downvotes: String,
    pub status: String,
    // 举报列表，JSON 数组字符串；report_count 与其长度同步更新
    pub reports: String,
    pub report_count: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_review(self) -> crate::models::reviews::entities::Review {
        use crate::models::reviews::entities::{Review, ReviewStatus, ReviewTarget};
        use chrono::{DateTime, Utc};

        // 判别列损坏时回退为课程评价并携带空引用，不在转换层报错
        let target = match self.review_type.as_str() {
            "professor" => ReviewTarget::Professor {
                professor_id: self.professor_id.unwrap_or_default(),
            },
            _ => ReviewTarget::Course {
                course_id: self.course_id.unwrap_or_default(),
                department_id: self.department_id.unwrap_or_default(),
            },
        };

        Review {
            id: self.id,
            target,
            title: self.title,
            rating: self.rating,
            content: self.content,
            author_id: self.author_id,
            author_username: self.author_username,
            upvotes: parse_string_list(&self.upvotes),
            downvotes: parse_string_list(&self.downvotes),
            status: self
                .status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::Pending),
            reports: serde_json::from_str(&self.reports).unwrap_or_default(),
            report_count: self.report_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

fn parse_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
