use super::SeaOrmStorage;
use crate::entity::professor_courses::{
    ActiveModel as ProfessorCourseActiveModel, Column as ProfessorCourseColumn,
    Entity as ProfessorCourses,
};
use crate::entity::professor_departments::{
    ActiveModel as ProfessorDepartmentActiveModel, Column as ProfessorDepartmentColumn,
    Entity as ProfessorDepartments,
};
use crate::entity::professors::{ActiveModel, Column, Entity as Professors, Model as ProfessorModel};
use crate::entity::reviews::{Column as ReviewColumn, Entity as Reviews};
use crate::errors::{CampusRateError, Result};
use crate::models::{
    PaginationInfo,
    professors::{
        entities::Professor,
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
    reviews::entities::{ReviewStatus, ReviewTarget},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 加载教授的院系/课程关联 ID
    async fn load_professor_links(&self, professor_id: i64) -> Result<(Vec<i64>, Vec<i64>)> {
        let department_ids = ProfessorDepartments::find()
            .filter(ProfessorDepartmentColumn::ProfessorId.eq(professor_id))
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授院系失败: {e}")))?
            .into_iter()
            .map(|m| m.department_id)
            .collect();

        let course_ids = ProfessorCourses::find()
            .filter(ProfessorCourseColumn::ProfessorId.eq(professor_id))
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授课程失败: {e}")))?
            .into_iter()
            .map(|m| m.course_id)
            .collect();

        Ok((department_ids, course_ids))
    }

    /// 重建教授的院系关联
    async fn replace_professor_departments(
        &self,
        professor_id: i64,
        department_ids: &[i64],
    ) -> Result<()> {
        ProfessorDepartments::delete_many()
            .filter(ProfessorDepartmentColumn::ProfessorId.eq(professor_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("清理教授院系失败: {e}")))?;

        for department_id in department_ids {
            let link = ProfessorDepartmentActiveModel {
                professor_id: Set(professor_id),
                department_id: Set(*department_id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                CampusRateError::database_operation(format!("写入教授院系失败: {e}"))
            })?;
        }

        Ok(())
    }

    /// 重建教授的任教课程关联
    async fn replace_professor_courses(&self, professor_id: i64, course_ids: &[i64]) -> Result<()> {
        ProfessorCourses::delete_many()
            .filter(ProfessorCourseColumn::ProfessorId.eq(professor_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("清理教授课程失败: {e}")))?;

        for course_id in course_ids {
            let link = ProfessorCourseActiveModel {
                professor_id: Set(professor_id),
                course_id: Set(*course_id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                CampusRateError::database_operation(format!("写入教授课程失败: {e}"))
            })?;
        }

        Ok(())
    }

    async fn model_into_professor(&self, model: ProfessorModel) -> Result<Professor> {
        let (department_ids, course_ids) = self.load_professor_links(model.id).await?;
        Ok(model.into_professor(department_ids, course_ids))
    }

    /// 创建教授及其关联
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<Professor> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            title: Set(req.title),
            email: Set(req.email),
            bio: Set(req.bio),
            office: Set(req.office),
            office_hours: Set(req.office_hours),
            avg_rating: Set(0.0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("创建教授失败: {e}")))?;

        self.replace_professor_departments(result.id, &req.department_ids)
            .await?;
        self.replace_professor_courses(result.id, &req.course_ids)
            .await?;

        self.model_into_professor(result).await
    }

    /// 通过 ID 获取教授
    pub async fn get_professor_by_id_impl(&self, id: i64) -> Result<Option<Professor>> {
        let result = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.model_into_professor(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出教授
    pub async fn list_professors_with_pagination_impl(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Professors::find();

        // 院系筛选走关联表
        if let Some(department_id) = query.department_id {
            let professor_ids: Vec<i64> = ProfessorDepartments::find()
                .filter(ProfessorDepartmentColumn::DepartmentId.eq(department_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    CampusRateError::database_operation(format!("查询院系教授失败: {e}"))
                })?
                .into_iter()
                .map(|m| m.professor_id)
                .collect();

            select = select.filter(Column::Id.is_in(professor_ids));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Title.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授列表失败: {e}")))?;

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            items.push(self.model_into_professor(model).await?);
        }

        Ok(ProfessorListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教授信息
    pub async fn update_professor_impl(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<Professor>> {
        let existing = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授失败: {e}")))?;
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

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(bio) = update.bio {
            model.bio = Set(Some(bio));
        }

        if let Some(office) = update.office {
            model.office = Set(Some(office));
        }

        if let Some(office_hours) = update.office_hours {
            model.office_hours = Set(Some(office_hours));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("更新教授失败: {e}")))?;

        if let Some(department_ids) = update.department_ids {
            self.replace_professor_departments(id, &department_ids)
                .await?;
        }

        if let Some(course_ids) = update.course_ids {
            self.replace_professor_courses(id, &course_ids).await?;
        }

        self.get_professor_by_id_impl(id).await
    }

    /// 删除教授
    pub async fn delete_professor_impl(&self, id: i64) -> Result<bool> {
        let result = Professors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("删除教授失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教授数量
    pub async fn count_professors_impl(&self) -> Result<u64> {
        let count = Professors::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("统计教授数量失败: {e}")))?;

        Ok(count)
    }

    /// 同名教授是否已存在于任一给定院系
    pub async fn professor_name_exists_in_departments_impl(
        &self,
        name: &str,
        department_ids: &[i64],
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Professors::find().filter(Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            select = select.filter(Column::Id.ne(exclude_id));
        }

        let candidates = select
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询同名教授失败: {e}")))?;

        if candidates.is_empty() {
            return Ok(false);
        }

        let candidate_ids: Vec<i64> = candidates.iter().map(|m| m.id).collect();

        let shared = ProfessorDepartments::find()
            .filter(ProfessorDepartmentColumn::ProfessorId.is_in(candidate_ids))
            .filter(ProfessorDepartmentColumn::DepartmentId.is_in(department_ids.to_vec()))
            .count(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询同名教授失败: {e}")))?;

        Ok(shared > 0)
    }

    /// 按姓名/头衔子串查找教授
    pub async fn find_professors_by_name_impl(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Professor>> {
        let escaped = escape_like_pattern(name_substring);
        let models = Professors::find()
            .filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Title.contains(&escaped)),
            )
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("搜索教授失败: {e}")))?;

        let mut professors = Vec::with_capacity(models.len());
        for model in models {
            professors.push(self.model_into_professor(model).await?);
        }

        Ok(professors)
    }

    /// 取某教授全部已通过评价的评分值（评分聚合器的全量读取）
    pub async fn list_approved_professor_rating_values_impl(
        &self,
        professor_id: i64,
    ) -> Result<Vec<i32>> {
        let reviews = Reviews::find()
            .filter(ReviewColumn::ProfessorId.eq(professor_id))
            .filter(ReviewColumn::ReviewType.eq(ReviewTarget::PROFESSOR))
            .filter(ReviewColumn::Status.eq(ReviewStatus::Approved.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("查询教授评分失败: {e}")))?;

        Ok(reviews.into_iter().map(|m| m.rating).collect())
    }

    /// 写入聚合后的平均分；教授不存在时返回 false
    pub async fn update_professor_avg_rating_impl(
        &self,
        professor_id: i64,
        avg_rating: f64,
    ) -> Result<bool> {
        let result = Professors::update_many()
            .col_expr(
                Column::AvgRating,
                sea_orm::sea_query::Expr::value(avg_rating),
            )
            .filter(Column::Id.eq(professor_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("更新教授平均分失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 统计某教授已通过评价数
    pub async fn count_approved_reviews_for_professor_impl(
        &self,
        professor_id: i64,
    ) -> Result<u64> {
        let count = Reviews::find()
            .filter(ReviewColumn::ProfessorId.eq(professor_id))
            .filter(ReviewColumn::ReviewType.eq(ReviewTarget::PROFESSOR))
            .filter(ReviewColumn::Status.eq(ReviewStatus::Approved.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| {
                CampusRateError::database_operation(format!("统计教授评价数失败: {e}"))
            })?;

        Ok(count)
    }
}
