use serde::{Deserialize, Serialize};

use store::models::UserInfo;

use crate::client::{Api, Method};
use crate::error::ApiError;

/// Login form payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login: the bearer token to persist plus the signed-in user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

pub async fn login(api: &Api, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    api.post("/auth/login", credentials).await
}

pub async fn logout(api: &Api) -> Result<(), ApiError> {
    api.request(Method::Post, "/auth/logout", None).await.map(|_| ())
}

pub async fn me(api: &Api) -> Result<UserInfo, ApiError> {
    api.get("/auth/me").await
}
