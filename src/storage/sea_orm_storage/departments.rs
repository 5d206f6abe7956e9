use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::entity::professor_departments::{
    Column as ProfessorDepartmentColumn, Entity as ProfessorDepartments,
};
use crate::errors::{CampusRateError, Result};
use crate::models::{
    PaginationInfo,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建院系；code 统一大写保存
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code.to_uppercase()),
            description: Set(req.description),
            faculty: Set(req.faculty),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("创建院系失败: {e}")))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 通过短码精确获取院系（比较时统一大写）
    pub async fn get_department_by_code_impl(&self, code: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(Column::Code.eq(code.to_uppercase()))
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出院系
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Departments::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped.to_uppercase())),
            );
        }

        select = select.order_by_asc(Column::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询院系总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询院系页数失败: {e}")))?;

        let departments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(DepartmentListResponse {
            items: departments
                .into_iter()
                .map(|m| m.into_department())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新院系信息
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let existing = self.get_department_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(code) = update.code {
            model.code = Set(code.to_uppercase());
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(faculty) = update.faculty {
            model.faculty = Set(Some(faculty));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新院系失败: {e}")))?;

        self.get_department_by_id_impl(id).await
    }

    /// 删除院系（引用校验在服务层完成）
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("删除院系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计院系数量
    pub async fn count_departments_impl(&self) -> Result<u64> {
        let count = Departments::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("统计院系数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计院系下属课程数量
    pub async fn count_courses_in_department_impl(&self, department_id: i64) -> Result<u64> {
        let count = Courses::find()
            .filter(CourseColumn::DepartmentId.eq(department_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("统计院系课程数量失败: {e}"))
            })?;

        Ok(count)
    }

    /// 统计院系关联教授数量
    pub async fn count_professors_in_department_impl(&self, department_id: i64) -> Result<u64> {
        let count = ProfessorDepartments::find()
            .filter(ProfessorDepartmentColumn::DepartmentId.eq(department_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("统计院系教授数量失败: {e}"))
            })?;

        Ok(count)
    }

    /// 按名称子串查找院系（搜索用）
    pub async fn find_departments_by_name_impl(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Department>> {
        let escaped = escape_like_pattern(name_substring);
        let departments = Departments::find()
            .filter(Column::Name.contains(&escaped))
            .order_by_asc(Column::Code)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("搜索院系失败: {e}")))?;

        Ok(departments
            .into_iter()
            .map(|m| m.into_department())
            .collect())
    }
}
