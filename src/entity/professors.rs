//! 教授实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub title: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub bio: Option<String>,
    pub office: Option<String>,
    pub office_hours: Option<String>,
    // 派生字段，只由评分聚合器写入
    pub avg_rating: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::professor_departments::Entity")]
    ProfessorDepartments,
    #[sea_orm(has_many = "super::professor_courses::Entity")]
    ProfessorCourses,
}

impl Related<super::professor_departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorDepartments.def()
    }
}

impl Related<super::professor_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 关联表数据由 storage 层单独查询后传入
    pub fn into_professor(
        self,
        department_ids: Vec<i64>,
        course_ids: Vec<i64>,
    ) -> crate::models::professors::entities::Professor {
        use crate::models::professors::entities::Professor;
        use chrono::{DateTime, Utc};

        Professor {
            id: self.id,
            name: self.name,
            title: self.title,
            email: self.email,
            bio: self.bio,
            office: self.office,
            office_hours: self.office_hours,
            department_ids,
            course_ids,
            avg_rating: self.avg_rating,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
