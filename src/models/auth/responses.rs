use serde::Serialize;

use crate::models::companies::entities::Company;
use crate::models::users::entities::User;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}
