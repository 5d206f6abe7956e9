pub mod query;
pub mod suggest;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::search::requests::SearchParams;
use crate::storage::Storage;

// 每类实体的结果上限
pub(crate) const SEARCH_LIMIT: u64 = 20;
// 输入联想各实体类型的上限，控制载荷大小
pub(crate) const SUGGEST_DEPARTMENT_LIMIT: u64 = 3;
pub(crate) const SUGGEST_COURSE_LIMIT: u64 = 8;
pub(crate) const SUGGEST_PROFESSOR_LIMIT: u64 = 5;

pub struct SearchService {
    storage: Option<Arc<dyn Storage>>,
}

impl SearchService {
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

    // 搜索
    pub async fn search(
        &self,
        params: SearchParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        query::search(self, params, request).await
    }

    // 输入联想
    pub async fn suggestions(
        &self,
        params: SearchParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        suggest::suggestions(self, params, request).await
    }
}
