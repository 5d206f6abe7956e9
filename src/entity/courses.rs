//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub department_id: i64,
    pub course_number: String,
    pub name: String,
    pub credit_hours: Option<i32>,
    pub description: Option<String>,
    // 前置/同修课程编号列表，JSON 数组字符串
    pub prerequisites: Option<String>,
    pub corequisites: Option<String>,
    pub syllabus: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::professor_courses::Entity")]
    ProfessorCourses,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::professor_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            department_id: self.department_id,
            course_number: self.course_number,
            name: self.name,
            credit_hours: self.credit_hours,
            description: self.description,
            prerequisites: parse_string_list(self.prerequisites.as_deref()),
            corequisites: parse_string_list(self.corequisites.as_deref()),
            syllabus: self.syllabus,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
