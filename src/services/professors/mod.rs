pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod rating;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::professors::requests::{
    CreateProfessorRequest, ProfessorListParams, UpdateProfessorRequest,
};
use crate::storage::Storage;

pub struct ProfessorService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfessorService {
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

    // 创建教授
    pub async fn create_professor(
        &self,
        professor_data: CreateProfessorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_professor(self, professor_data, request).await
    }

    // 获取教授列表
    pub async fn list_professors(
        &self,
        query: ProfessorListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_professors(self, query, request).await
    }

    // 根据ID获取教授
    pub async fn get_professor(
        &self,
        professor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_professor(self, professor_id, request).await
    }

    // 更新教授信息
    pub async fn update_professor(
        &self,
        professor_id: i64,
        update_data: UpdateProfessorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_professor(self, professor_id, update_data, request).await
    }

    // 删除教授
    pub async fn delete_professor(
        &self,
        professor_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_professor(self, professor_id, request).await
    }
}
