pub mod list;
pub mod my_reviews;
pub mod profile;
pub mod role;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::ReviewListParams;
use crate::models::users::requests::{
    UpdateProfileRequest, UpdateUserRoleRequest, UpdateUserStatusRequest, UserListParams,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 当前用户资料
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }

    // 更新当前用户资料（邮箱/密码）
    pub async fn update_profile(
        &self,
        update_data: UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::update_profile(self, update_data, request).await
    }

    // 当前用户的评价列表
    pub async fn my_reviews(
        &self,
        query: ReviewListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        my_reviews::my_reviews(self, query, request).await
    }

    // 管理端：用户列表
    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    // 管理端：变更用户状态
    pub async fn update_user_status(
        &self,
        user_id: i64,
        update_data: UpdateUserStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_user_status(self, user_id, update_data, request).await
    }

    // 管理端：变更用户角色
    pub async fn update_user_role(
        &self,
        user_id: i64,
        update_data: UpdateUserRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        role::update_user_role(self, user_id, update_data, request).await
    }
}
