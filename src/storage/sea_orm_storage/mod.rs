//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod departments;
mod professors;
mod reviews;
mod users;
mod verification_codes;

use crate::config::AppConfig;
use crate::errors::{CampusRateError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusRateError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusRateError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusRateError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CampusRateError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusRateError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 院系模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>> {
        self.get_department_by_code_impl(code).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    async fn count_departments(&self) -> Result<u64> {
        self.count_departments_impl().await
    }

    async fn count_courses_in_department(&self, department_id: i64) -> Result<u64> {
        self.count_courses_in_department_impl(department_id).await
    }

    async fn count_professors_in_department(&self, department_id: i64) -> Result<u64> {
        self.count_professors_in_department_impl(department_id)
            .await
    }

    async fn find_departments_by_name(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Department>> {
        self.find_departments_by_name_impl(name_substring, limit)
            .await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_with_department(
        &self,
        id: i64,
    ) -> Result<Option<(Course, Option<Department>)>> {
        self.get_course_with_department_impl(id).await
    }

    async fn get_course_by_department_and_number(
        &self,
        department_id: i64,
        course_number: &str,
    ) -> Result<Option<Course>> {
        self.get_course_by_department_and_number_impl(department_id, course_number)
            .await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    async fn find_courses_by_number_prefix(
        &self,
        department_id: Option<i64>,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<Course>> {
        self.find_courses_by_number_prefix_impl(department_id, prefix, limit)
            .await
    }

    async fn find_courses_by_name(&self, name_substring: &str, limit: u64) -> Result<Vec<Course>> {
        self.find_courses_by_name_impl(name_substring, limit).await
    }

    // 教授模块
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor> {
        self.create_professor_impl(professor).await
    }

    async fn get_professor_by_id(&self, id: i64) -> Result<Option<Professor>> {
        self.get_professor_by_id_impl(id).await
    }

    async fn list_professors_with_pagination(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse> {
        self.list_professors_with_pagination_impl(query).await
    }

    async fn update_professor(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<Professor>> {
        self.update_professor_impl(id, update).await
    }

    async fn delete_professor(&self, id: i64) -> Result<bool> {
        self.delete_professor_impl(id).await
    }

    async fn count_professors(&self) -> Result<u64> {
        self.count_professors_impl().await
    }

    async fn professor_name_exists_in_departments(
        &self,
        name: &str,
        department_ids: &[i64],
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.professor_name_exists_in_departments_impl(name, department_ids, exclude_id)
            .await
    }

    async fn find_professors_by_name(
        &self,
        name_substring: &str,
        limit: u64,
    ) -> Result<Vec<Professor>> {
        self.find_professors_by_name_impl(name_substring, limit)
            .await
    }

    async fn list_approved_professor_rating_values(&self, professor_id: i64) -> Result<Vec<i32>> {
        self.list_approved_professor_rating_values_impl(professor_id)
            .await
    }

    async fn update_professor_avg_rating(
        &self,
        professor_id: i64,
        avg_rating: f64,
    ) -> Result<bool> {
        self.update_professor_avg_rating_impl(professor_id, avg_rating)
            .await
    }

    async fn count_approved_reviews_for_professor(&self, professor_id: i64) -> Result<u64> {
        self.count_approved_reviews_for_professor_impl(professor_id)
            .await
    }

    // 评价模块
    async fn create_review(&self, review: CreateReviewRecord) -> Result<Review> {
        self.create_review_impl(review).await
    }

    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(id).await
    }

    async fn list_reviews_with_pagination(
        &self,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        self.list_reviews_with_pagination_impl(query).await
    }

    async fn update_review(&self, id: i64, update: UpdateReviewRecord) -> Result<Option<Review>> {
        self.update_review_impl(id, update).await
    }

    async fn update_review_status(&self, id: i64, status: ReviewStatus) -> Result<Option<Review>> {
        self.update_review_status_impl(id, status).await
    }

    async fn update_review_votes(
        &self,
        id: i64,
        upvotes: &[String],
        downvotes: &[String],
    ) -> Result<bool> {
        self.update_review_votes_impl(id, upvotes, downvotes).await
    }

    async fn update_review_reports(&self, id: i64, reports: &[ReviewReport]) -> Result<bool> {
        self.update_review_reports_impl(id, reports).await
    }

    async fn delete_review(&self, id: i64) -> Result<bool> {
        self.delete_review_impl(id).await
    }

    async fn count_reviews(&self) -> Result<u64> {
        self.count_reviews_impl().await
    }

    async fn count_reviews_by_status(&self, status: ReviewStatus) -> Result<u64> {
        self.count_reviews_by_status_impl(status).await
    }

    async fn count_reported_reviews(&self) -> Result<u64> {
        self.count_reported_reviews_impl().await
    }

    async fn count_reviews_for_course(&self, course_id: i64) -> Result<u64> {
        self.count_reviews_for_course_impl(course_id).await
    }

    // 验证码模块
    async fn upsert_verification_code(
        &self,
        record: UpsertVerificationCodeRequest,
    ) -> Result<VerificationCode> {
        self.upsert_verification_code_impl(record).await
    }

    async fn find_valid_verification_code(
        &self,
        email: &str,
        purpose: CodePurpose,
        code: &str,
    ) -> Result<Option<VerificationCode>> {
        self.find_valid_verification_code_impl(email, purpose, code)
            .await
    }

    async fn consume_verification_code(&self, id: i64) -> Result<bool> {
        self.consume_verification_code_impl(id).await
    }

    async fn purge_expired_verification_codes(&self) -> Result<u64> {
        self.purge_expired_verification_codes_impl().await
    }
}
