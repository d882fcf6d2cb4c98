//! # Domain models mirrored from the REST backend
//!
//! Plain records for every resource the admin console manages. All types are
//! `Serialize + Deserialize` so they can cross the HTTP boundary, and all of
//! them carry the canonical `id` field: records arriving with the legacy
//! `_id` naming are normalized at deserialization via `#[serde(alias)]`, so
//! downstream code never branches on field naming.

use serde::{Deserialize, Serialize};

/// An article as managed on the content page and in the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    /// Article body. Plain text; rendering is the public site's concern.
    #[serde(default)]
    pub content: String,
    /// Id of the category this article belongs to, if any.
    #[serde(default)]
    pub category: Option<String>,
    /// Ids of attached tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    /// Backend-provided modification timestamp, when available.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Publication state of an [`Article`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Published => "Published",
        }
    }
}

/// A content category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// A content tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// An uploaded media file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    #[serde(alias = "_id")]
    pub id: String,
    pub filename: String,
    /// Public URL the backend serves the file from.
    pub url: String,
    #[serde(default)]
    pub content_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Site-wide settings managed on the settings page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub posts_per_page: u32,
}

/// The authenticated user, as returned by `/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Name to show in the sidebar header; falls back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Derive a URL slug from a display name: lowercase, alphanumeric runs
/// joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_underscore_id_is_normalized() {
        let article: Article = serde_json::from_str(
            r#"{"_id": "a1", "title": "Hello", "status": "published"}"#,
        )
        .unwrap();
        assert_eq!(article.id, "a1");
        assert_eq!(article.status, ArticleStatus::Published);

        let category: Category =
            serde_json::from_str(r#"{"id": "c1", "name": "News"}"#).unwrap();
        assert_eq!(category.id, "c1");
    }

    #[test]
    fn canonical_id_is_emitted_on_serialize() {
        let tag = Tag {
            id: "t1".to_string(),
            name: "rust".to_string(),
            slug: "rust".to_string(),
        };
        let json = serde_json::to_value(&tag).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust & WebAssembly!  "), "rust-webassembly");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u1".to_string(),
            name: String::new(),
            email: "example@gmail.com".to_string(),
            role: "admin".to_string(),
        };
        assert_eq!(user.display_name(), "example@gmail.com");
        assert!(user.is_admin());
    }
}
