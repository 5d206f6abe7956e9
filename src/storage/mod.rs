use std::sync::Arc;

use crate::models::{
    auth::{
        entities::{CodePurpose, VerificationCode},
        requests::UpsertVerificationCodeRequest,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
    professors::{
        entities::Professor,
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
    reviews::{
        entities::{Review, ReviewReport, ReviewStatus},
        requests::{CreateReviewRecord, ReviewListQuery, UpdateReviewRecord},
        responses::ReviewListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 院系管理方法
    // 创建院系
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    // 通过ID获取院系信息
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 通过短码精确获取院系信息
    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>>;
    // 列出院系
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse>;
    // 更新院系信息
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 删除院系
    async fn delete_department(&self, id: i64) -> Result<bool>;
    // 统计院系数量
    async fn count_departments(&self) -> Result<u64>;
    // 统计院系下属课程数量（删除守卫）
    async fn count_courses_in_department(&self, department_id: i64) -> Result<u64>;
    // 统计院系关联教授数量（删除守卫）
    async fn count_professors_in_department(&self, department_id: i64) -> Result<u64>;
    // 按名称子串查找院系（搜索）
    async fn find_departments_by_name(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Department>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过ID获取课程及其所属院系（联表反规范化记录）
    async fn get_course_with_department(
        &self,
        id: i64,
    ) -> Result<Option<(Course, Option<Department>)>>;
    // 通过 (院系, 课程编号) 获取课程
    async fn get_course_by_department_and_number(
        &self,
        department_id: i64,
        course_number: &str,
    ) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;
    // 按课程编号前缀查找（搜索；可限定院系）
    async fn find_courses_by_number_prefix(
        &self,
        department_id: Option<i64>,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<Course>>;
    // 按课程名称子串查找（搜索）
    async fn find_courses_by_name(&self, name_substring: &str, limit: u64) -> Result<Vec<Course>>;

    /// 教授管理方法
    // 创建教授（含院系/课程关联）
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor>;
    // 通过ID获取教授信息
    async fn get_professor_by_id(&self, id: i64) -> Result<Option<Professor>>;
    // 列出教授
    async fn list_professors_with_pagination(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse>;
    // 更新教授信息
    async fn update_professor(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<Professor>>;
    // 删除教授
    async fn delete_professor(&self, id: i64) -> Result<bool>;
    // 统计教授数量
    async fn count_professors(&self) -> Result<u64>;
    // 同名教授是否已存在于任一给定院系（防重复建档）
    async fn professor_name_exists_in_departments(
        &self,
        name: &str,
        department_ids: &[i64],
        exclude_id: Option<i64>,
    ) -> Result<bool>;
    // 按姓名/头衔子串查找教授（搜索）
    async fn find_professors_by_name(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Professor>>;
    // 取某教授全部已通过评价的评分值（评分聚合器输入）
    async fn list_approved_professor_rating_values(&self, professor_id: i64) -> Result<Vec<i32>>;
    // 写入聚合后的平均分（评分聚合器输出；教授不存在时返回 false）
    async fn update_professor_avg_rating(&self, professor_id: i64, avg_rating: f64)
    -> Result<bool>;
    // 统计某教授已通过评价数
    async fn count_approved_reviews_for_professor(&self, professor_id: i64) -> Result<u64>;

    /// 评价管理方法
    // 创建评价
    async fn create_review(&self, review: CreateReviewRecord) -> Result<Review>;
    // 通过ID获取评价
    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>>;
    // 列出评价（支持目标/状态/作者过滤、举报队列与可见性约束）
    async fn list_reviews_with_pagination(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse>;
    // 更新评价内容与目标
    async fn update_review(&self, id: i64, update: UpdateReviewRecord) -> Result<Option<Review>>;
    // 更新评价状态（审核）
    async fn update_review_status(&self, id: i64, status: ReviewStatus) -> Result<Option<Review>>;
    // 更新投票集合（单条 UPDATE，两个集合一起写）
    async fn update_review_votes(
        &self,
        id: i64,
        upvotes: &[String],
        downvotes: &[String],
    ) -> Result<bool>;
    // 更新举报列表，report_count 同条 UPDATE 写为列表长度
    async fn update_review_reports(&self, id: i64, reports: &[ReviewReport]) -> Result<bool>;
    // 删除评价
    async fn delete_review(&self, id: i64) -> Result<bool>;
    // 统计评价数量
    async fn count_reviews(&self) -> Result<u64>;
    // 按状态统计评价数量
    async fn count_reviews_by_status(&self, status: ReviewStatus) -> Result<u64>;
    // 统计被举报评价数量
    async fn count_reported_reviews(&self) -> Result<u64>;
    // 统计某课程的评价数量（删除守卫）
    async fn count_reviews_for_course(&self, course_id: i64) -> Result<u64>;

    /// 验证码管理方法
    // 写入验证码记录（同一邮箱+用途覆盖旧记录）
    async fn upsert_verification_code(
        &self,
        record: UpsertVerificationCodeRequest,
    ) -> Result<VerificationCode>;
    // 查找未过期且匹配的验证码
    async fn find_valid_verification_code(
        &self,
        email: &str,
        purpose: CodePurpose,
        code: &str,
    ) -> Result<Option<VerificationCode>>;
    // 使用后删除验证码
    async fn consume_verification_code(&self, id: i64) -> Result<bool>;
    // 清理过期验证码
    async fn purge_expired_verification_codes(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
