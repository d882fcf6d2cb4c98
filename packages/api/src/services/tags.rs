use serde::{Deserialize, Serialize};

use store::models::Tag;

use crate::client::Api;
use crate::error::ApiError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TagDraft {
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

pub async fn list(api: &Api) -> Result<Vec<Tag>, ApiError> {
    api.get("/tags").await
}

pub async fn create(api: &Api, draft: &TagDraft) -> Result<Tag, ApiError> {
    api.post("/tags", draft).await
}

pub async fn update(api: &Api, id: &str, draft: &TagDraft) -> Result<Tag, ApiError> {
    api.put(&format!("/tags/{id}"), draft).await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/tags/{id}")).await
}
