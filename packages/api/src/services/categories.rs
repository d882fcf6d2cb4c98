use serde::{Deserialize, Serialize};

use store::models::Category;

use crate::client::Api;
use crate::error::ApiError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

pub async fn list(api: &Api) -> Result<Vec<Category>, ApiError> {
    api.get("/categories").await
}

pub async fn create(api: &Api, draft: &CategoryDraft) -> Result<Category, ApiError> {
    api.post("/categories", draft).await
}

pub async fn update(api: &Api, id: &str, draft: &CategoryDraft) -> Result<Category, ApiError> {
    api.put(&format!("/categories/{id}"), draft).await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/categories/{id}")).await
}
