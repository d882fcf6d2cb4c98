use serde::{Deserialize, Serialize};

use store::models::{Article, ArticleStatus};

use crate::client::Api;
use crate::error::ApiError;

/// What the editor submits when creating or updating an article.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ArticleStatus,
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            tags: article.tags.clone(),
            status: article.status,
        }
    }
}

pub async fn list(api: &Api) -> Result<Vec<Article>, ApiError> {
    api.get("/posts").await
}

pub async fn get(api: &Api, id: &str) -> Result<Article, ApiError> {
    api.get(&format!("/posts/{id}")).await
}

pub async fn create(api: &Api, draft: &ArticleDraft) -> Result<Article, ApiError> {
    api.post("/posts", draft).await
}

pub async fn update(api: &Api, id: &str, draft: &ArticleDraft) -> Result<Article, ApiError> {
    api.put(&format!("/posts/{id}"), draft).await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/posts/{id}")).await
}
