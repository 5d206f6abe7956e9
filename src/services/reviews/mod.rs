pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod moderate;
pub mod report;
pub mod update;
pub mod vote;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::entities::ReviewStatus;
use crate::models::reviews::requests::{
    CreateReviewRequest, ReportReviewRequest, ReviewListParams, UpdateReviewRequest,
};
use crate::storage::Storage;

pub use vote::VoteKind;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建评价
    pub async fn create_review(
        &self,
        review_data: CreateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_review(self, review_data, request).await
    }

    // 获取评价列表
    pub async fn list_reviews(
        &self,
        query: ReviewListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews(self, query, request).await
    }

    // 管理端评价列表（不做可见性过滤）
    pub async fn list_reviews_admin(
        &self,
        query: ReviewListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews_admin(self, query, request).await
    }

    // 管理端举报队列
    pub async fn list_reported_reviews(
        &self,
        query: ReviewListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_reported_reviews(self, query, request).await
    }

    // 根据ID获取评价
    pub async fn get_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_review(self, review_id, request).await
    }

    // 编辑评价（仅作者）
    pub async fn update_review(
        &self,
        review_id: i64,
        update_data: UpdateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_review(self, review_id, update_data, request).await
    }

    // 删除评价（作者或管理员）
    pub async fn delete_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_review(self, review_id, request).await
    }

    // 投票（互斥开关语义）
    pub async fn vote_review(
        &self,
        review_id: i64,
        kind: VoteKind,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        vote::vote_review(self, review_id, kind, request).await
    }

    // 举报
    pub async fn report_review(
        &self,
        review_id: i64,
        report_data: ReportReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::report_review(self, review_id, report_data, request).await
    }

    // 审核：通过/驳回（仅管理员）
    pub async fn moderate_review(
        &self,
        review_id: i64,
        status: ReviewStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        moderate::moderate_review(self, review_id, status, request).await
    }
}
