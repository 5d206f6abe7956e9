use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{CampusRateError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    departments::entities::Department,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

fn encode_string_list(list: &[String]) -> Option<String> {
    if list.is_empty() {
        None
    } else {
        serde_json::to_string(list).ok()
    }
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            department_id: Set(req.department_id),
            course_number: Set(req.course_number),
            name: Set(req.name),
            credit_hours: Set(req.credit_hours),
            description: Set(req.description),
            prerequisites: Set(encode_string_list(&req.prerequisites)),
            corequisites: Set(encode_string_list(&req.corequisites)),
            syllabus: Set(req.syllabus),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 课程及所属院系联表查询，产出反规范化记录
    pub async fn get_course_with_department_impl(
        &self,
        id: i64,
    ) -> Result<Option<(Course, Option<Department>)>> {
        let result = Courses::find_by_id(id)
            .find_also_related(crate::entity::prelude::Departments)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|(course, department)| {
            (
                course.into_course(),
                department.map(|d| d.into_department()),
            )
        }))
    }

    /// 通过 (院系, 课程编号) 获取课程
    pub async fn get_course_by_department_and_number_impl(
        &self,
        department_id: i64,
        course_number: &str,
    ) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::DepartmentId.eq(department_id))
            .filter(Column::CourseNumber.eq(course_number))
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(department_id) = query.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::CourseNumber.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::CourseNumber);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }

        if let Some(course_number) = update.course_number {
            model.course_number = Set(course_number);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(credit_hours) = update.credit_hours {
            model.credit_hours = Set(Some(credit_hours));
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(prerequisites) = update.prerequisites {
            model.prerequisites = Set(encode_string_list(&prerequisites));
        }

        if let Some(corequisites) = update.corequisites {
            model.corequisites = Set(encode_string_list(&corequisites));
        }

        if let Some(syllabus) = update.syllabus {
            model.syllabus = Set(Some(syllabus));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程（评价引用校验在服务层完成）
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<u64> {
        let count = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count)
    }

    /// 按编号前缀查找课程，可限定院系
    pub async fn find_courses_by_number_prefix_impl(
        &self,
        department_id: Option<i64>,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<Course>> {
        let escaped = escape_like_pattern(prefix);
        let mut select = Courses::find().filter(Column::CourseNumber.starts_with(&escaped));

        if let Some(department_id) = department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        let courses = select
            .order_by_asc(Column::CourseNumber)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("搜索课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 按名称子串查找课程
    pub async fn find_courses_by_name_impl(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Course>> {
        let escaped = escape_like_pattern(name_substring);
        let courses = Courses::find()
            .filter(Column::Name.contains(&escaped))
            .order_by_asc(Column::CourseNumber)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("搜索课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }
}
