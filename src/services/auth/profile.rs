use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::requests::UpdateProfileRequest;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::Validate;

use super::AuthService;
use crate::services::{current_user, not_found, storage_error, validation_error};

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(errors) = update_data.validate() {
        return Ok(validation_error(errors));
    }

    let storage = service.get_storage(request)?;
    match storage.update_user_profile(current_user.id, update_data).await {
        Ok(Some(user)) => {
            RequireJWT::forget_cached_user(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "用户信息更新成功",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => Ok(storage_error(
            ErrorCode::InternalServerError,
            "更新用户信息失败",
            e,
        )),
    }
}
