//! # Fixture transport — in-memory REST double
//!
//! [`FixtureTransport`] implements the same routes, token handling and error
//! shapes as the real backend, against in-process state seeded with demo
//! data. Selecting it in `pressboard.toml` (`backend = "fixture"`) gives a
//! fully working admin console with no server; it is also what the test
//! suite drives.
//!
//! Two deliberate quirks mirror the backend being doubled:
//! - article payloads are emitted with the legacy `_id` field, so the
//!   client-side id normalization is exercised on every list/read;
//! - unauthenticated requests to any route outside `/auth/login` answer 401.
//!
//! Test hooks: [`request_count`](FixtureTransport::request_count) and
//! [`fail_once`](FixtureTransport::fail_once).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use store::models::{Article, ArticleStatus, Category, MediaAsset, SiteSettings, Tag, UserInfo};

use crate::client::Method;
use crate::error::ApiError;
use crate::services::articles::ArticleDraft;
use crate::services::auth::Credentials;
use crate::services::categories::CategoryDraft;
use crate::services::tags::TagDraft;

struct FixtureUser {
    info: UserInfo,
    password: String,
}

struct FixtureState {
    users: Vec<FixtureUser>,
    /// token -> user id
    sessions: HashMap<String, String>,
    articles: Vec<Article>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    media: Vec<MediaAsset>,
    settings: SiteSettings,
    next_id: u64,
    next_token: u64,
    requests: u64,
    /// path -> error message, consumed by the next request to that path
    fail_once: HashMap<String, String>,
}

/// In-memory stand-in for the REST backend.
#[derive(Clone)]
pub struct FixtureTransport {
    state: Arc<Mutex<FixtureState>>,
}

impl Default for FixtureTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(seed())),
        }
    }

    /// Number of requests this fixture has answered, uploads included.
    pub fn request_count(&self) -> u64 {
        self.state.lock().unwrap().requests
    }

    /// Make the next request to `path` fail with a 500 carrying `message`.
    pub fn fail_once(&self, path: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_once
            .insert(path.to_string(), message.to_string());
    }

    pub(crate) fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(u16, Value), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests += 1;

        if let Some(message) = state.fail_once.remove(path) {
            return Ok((500, json!({ "message": message })));
        }

        let segments: Vec<&str> =
            path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

        if method == Method::Post && segments == ["auth", "login"] {
            return Ok(login(&mut state, body));
        }
        if method == Method::Post && segments == ["auth", "logout"] {
            if let Some(token) = token {
                state.sessions.remove(token);
            }
            return Ok((200, json!({})));
        }

        let authed = token.map(|t| state.sessions.contains_key(t)).unwrap_or(false);
        if !authed {
            return Ok((401, json!({ "message": "Unauthorized" })));
        }

        let response = match (method, segments.as_slice()) {
            (Method::Get, ["auth", "me"]) => {
                // token is valid here, the session is guaranteed to resolve
                let user_id = token.and_then(|t| state.sessions.get(t)).cloned();
                match user_id.and_then(|id| {
                    state.users.iter().find(|u| u.info.id == id).map(|u| &u.info)
                }) {
                    Some(user) => (200, json!(user)),
                    None => (401, json!({ "message": "Unauthorized" })),
                }
            }

            (Method::Get, ["posts"]) => {
                let list: Vec<Value> = state.articles.iter().map(article_json).collect();
                (200, Value::Array(list))
            }
            (Method::Get, ["posts", id]) => match state.articles.iter().find(|a| a.id == *id) {
                Some(article) => (200, article_json(article)),
                None => not_found(),
            },
            (Method::Post, ["posts"]) => match parse::<ArticleDraft>(body) {
                Some(draft) => {
                    let article = Article {
                        id: state.fresh_id("a"),
                        title: draft.title,
                        content: draft.content,
                        category: draft.category,
                        tags: draft.tags,
                        status: draft.status,
                        updated_at: Some("2024-06-01T12:00:00Z".to_string()),
                    };
                    state.articles.push(article.clone());
                    (201, article_json(&article))
                }
                None => bad_payload(),
            },
            (Method::Put, ["posts", id]) => match parse::<ArticleDraft>(body) {
                Some(draft) => {
                    let id = id.to_string();
                    match state.articles.iter_mut().find(|a| a.id == id) {
                        Some(article) => {
                            article.title = draft.title;
                            article.content = draft.content;
                            article.category = draft.category;
                            article.tags = draft.tags;
                            article.status = draft.status;
                            article.updated_at = Some("2024-06-02T12:00:00Z".to_string());
                            (200, article_json(article))
                        }
                        None => not_found(),
                    }
                }
                None => bad_payload(),
            },
            (Method::Delete, ["posts", id]) => {
                let before = state.articles.len();
                let id = id.to_string();
                state.articles.retain(|a| a.id != id);
                if state.articles.len() < before {
                    (200, Value::Null)
                } else {
                    not_found()
                }
            }

            (Method::Get, ["categories"]) => (200, json!(state.categories)),
            (Method::Post, ["categories"]) => match parse::<CategoryDraft>(body) {
                Some(draft) => {
                    let category = Category {
                        id: state.fresh_id("c"),
                        name: draft.name,
                        slug: draft.slug,
                        description: draft.description,
                    };
                    state.categories.push(category.clone());
                    (201, json!(category))
                }
                None => bad_payload(),
            },
            (Method::Put, ["categories", id]) => match parse::<CategoryDraft>(body) {
                Some(draft) => {
                    let id = id.to_string();
                    match state.categories.iter_mut().find(|c| c.id == id) {
                        Some(category) => {
                            category.name = draft.name;
                            category.slug = draft.slug;
                            category.description = draft.description;
                            (200, json!(category))
                        }
                        None => not_found(),
                    }
                }
                None => bad_payload(),
            },
            (Method::Delete, ["categories", id]) => {
                let before = state.categories.len();
                let id = id.to_string();
                state.categories.retain(|c| c.id != id);
                if state.categories.len() < before {
                    (200, Value::Null)
                } else {
                    not_found()
                }
            }

            (Method::Get, ["tags"]) => (200, json!(state.tags)),
            (Method::Post, ["tags"]) => match parse::<TagDraft>(body) {
                Some(draft) => {
                    let tag = Tag {
                        id: state.fresh_id("t"),
                        name: draft.name,
                        slug: draft.slug,
                    };
                    state.tags.push(tag.clone());
                    (201, json!(tag))
                }
                None => bad_payload(),
            },
            (Method::Put, ["tags", id]) => match parse::<TagDraft>(body) {
                Some(draft) => {
                    let id = id.to_string();
                    match state.tags.iter_mut().find(|t| t.id == id) {
                        Some(tag) => {
                            tag.name = draft.name;
                            tag.slug = draft.slug;
                            (200, json!(tag))
                        }
                        None => not_found(),
                    }
                }
                None => bad_payload(),
            },
            (Method::Delete, ["tags", id]) => {
                let before = state.tags.len();
                let id = id.to_string();
                state.tags.retain(|t| t.id != id);
                if state.tags.len() < before {
                    (200, Value::Null)
                } else {
                    not_found()
                }
            }

            (Method::Get, ["media"]) => (200, json!(state.media)),
            (Method::Delete, ["media", id]) => {
                let before = state.media.len();
                let id = id.to_string();
                state.media.retain(|m| m.id != id);
                if state.media.len() < before {
                    (200, Value::Null)
                } else {
                    not_found()
                }
            }

            (Method::Get, ["settings"]) => (200, json!(state.settings)),
            (Method::Put, ["settings"]) => match parse::<SiteSettings>(body) {
                Some(settings) => {
                    state.settings = settings;
                    (200, json!(state.settings))
                }
                None => bad_payload(),
            },

            _ => not_found(),
        };

        Ok(response)
    }

    pub(crate) fn upload(
        &self,
        path: &str,
        token: Option<&str>,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(u16, Value), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests += 1;

        if let Some(message) = state.fail_once.remove(path) {
            return Ok((500, json!({ "message": message })));
        }

        let authed = token.map(|t| state.sessions.contains_key(t)).unwrap_or(false);
        if !authed {
            return Ok((401, json!({ "message": "Unauthorized" })));
        }
        if path.trim_matches('/') != "media" {
            return Ok(not_found());
        }

        let asset = MediaAsset {
            id: state.fresh_id("m"),
            filename: filename.to_string(),
            url: format!("/uploads/{filename}"),
            content_type: content_type.to_string(),
            size: bytes.len() as u64,
        };
        state.media.push(asset.clone());
        Ok((201, json!(asset)))
    }
}

impl FixtureState {
    fn fresh_id(&mut self, prefix: &str) -> String {
        let n = self.next_id;
        self.next_id += 1;
        format!("{prefix}{n}")
    }
}

fn login(state: &mut FixtureState, body: Option<Value>) -> (u16, Value) {
    let Some(credentials) = parse::<Credentials>(body) else {
        return bad_payload();
    };
    let user = state
        .users
        .iter()
        .find(|u| u.info.email == credentials.email && u.password == credentials.password)
        .map(|u| u.info.clone());
    match user {
        Some(user) => {
            let n = state.next_token;
            state.next_token += 1;
            let token = format!("fixture-token-{n}");
            state.sessions.insert(token.clone(), user.id.clone());
            (200, json!({ "token": token, "user": user }))
        }
        None => (400, json!({ "message": "Invalid email or password" })),
    }
}

/// Articles come back with the legacy `_id` naming, like the backend this
/// doubles.
fn article_json(article: &Article) -> Value {
    let mut value = serde_json::to_value(article).unwrap_or(Value::Null);
    if let Some(object) = value.as_object_mut() {
        if let Some(id) = object.remove("id") {
            object.insert("_id".to_string(), id);
        }
    }
    value
}

fn parse<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Option<T> {
    serde_json::from_value(body?).ok()
}

fn not_found() -> (u16, Value) {
    (404, json!({ "message": "Not found" }))
}

fn bad_payload() -> (u16, Value) {
    (400, json!({ "message": "Invalid request payload" }))
}

fn seed() -> FixtureState {
    let admin = FixtureUser {
        info: UserInfo {
            id: "u1".to_string(),
            name: "Admin".to_string(),
            email: "example@gmail.com".to_string(),
            role: "admin".to_string(),
        },
        password: "test123456".to_string(),
    };

    let categories = vec![
        Category {
            id: "c1".to_string(),
            name: "News".to_string(),
            slug: "news".to_string(),
            description: "Product announcements".to_string(),
        },
        Category {
            id: "c2".to_string(),
            name: "Engineering".to_string(),
            slug: "engineering".to_string(),
            description: "Technical deep dives".to_string(),
        },
    ];

    let tags = vec![
        Tag {
            id: "t1".to_string(),
            name: "rust".to_string(),
            slug: "rust".to_string(),
        },
        Tag {
            id: "t2".to_string(),
            name: "wasm".to_string(),
            slug: "wasm".to_string(),
        },
        Tag {
            id: "t3".to_string(),
            name: "release".to_string(),
            slug: "release".to_string(),
        },
    ];

    let articles = vec![
        Article {
            id: "a1".to_string(),
            title: "Welcome to Pressboard".to_string(),
            content: "Pressboard is the admin console for your site.".to_string(),
            category: Some("c1".to_string()),
            tags: vec!["t3".to_string()],
            status: ArticleStatus::Published,
            updated_at: Some("2024-05-20T09:30:00Z".to_string()),
        },
        Article {
            id: "a2".to_string(),
            title: "Styling the admin console".to_string(),
            content: "Notes on the stylesheet layout.".to_string(),
            category: Some("c2".to_string()),
            tags: vec!["t1".to_string(), "t2".to_string()],
            status: ArticleStatus::Draft,
            updated_at: Some("2024-05-28T16:45:00Z".to_string()),
        },
    ];

    let media = vec![MediaAsset {
        id: "m1".to_string(),
        filename: "logo.png".to_string(),
        url: "/uploads/logo.png".to_string(),
        content_type: "image/png".to_string(),
        size: 4096,
    }];

    FixtureState {
        users: vec![admin],
        sessions: HashMap::new(),
        articles,
        categories,
        tags,
        media,
        settings: SiteSettings {
            site_title: "Pressboard".to_string(),
            site_description: "A small publishing site".to_string(),
            posts_per_page: 10,
        },
        next_id: 10,
        next_token: 1,
        requests: 0,
        fail_once: HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Api;
    use crate::services::{articles, auth, categories, media, settings, tags};
    use store::TokenVault;

    fn api() -> (Api, FixtureTransport) {
        let fixture = FixtureTransport::new();
        let api = Api::with_fixture(fixture.clone(), TokenVault::memory());
        (api, fixture)
    }

    async fn signed_in() -> (Api, FixtureTransport) {
        let (api, fixture) = api();
        let response = auth::login(
            &api,
            &Credentials {
                email: "example@gmail.com".to_string(),
                password: "test123456".to_string(),
            },
        )
        .await
        .unwrap();
        api.vault().save(&response.token);
        (api, fixture)
    }

    #[tokio::test]
    async fn login_issues_token_for_seeded_admin() {
        let (api, _) = api();
        let response = auth::login(
            &api,
            &Credentials {
                email: "example@gmail.com".to_string(),
                password: "test123456".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.role, "admin");
        assert!(response.user.is_admin());
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_a_backend_error() {
        let (api, _) = api();
        let err = auth::login(
            &api,
            &Credentials {
                email: "example@gmail.com".to_string(),
                password: "nope".to_string(),
            },
        )
        .await
        .unwrap_err();

        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid email or password");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_call_clears_the_persisted_token() {
        let (api, _) = api();
        api.vault().save("stale-token");

        let err = articles::list(&api).await.unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(api.vault().load(), None);
    }

    #[tokio::test]
    async fn articles_arrive_with_ids_normalized() {
        let (api, _) = signed_in().await;

        let list = articles::list(&api).await.unwrap();
        assert_eq!(list.len(), 2);
        // The fixture emits `_id`; the model surfaces plain `id`.
        assert_eq!(list[0].id, "a1");
        assert_eq!(list[1].id, "a2");
    }

    #[tokio::test]
    async fn article_create_update_delete() {
        let (api, _) = signed_in().await;

        let draft = ArticleDraft {
            title: "Fresh draft".to_string(),
            content: "body".to_string(),
            category: Some("c1".to_string()),
            tags: vec!["t1".to_string()],
            status: ArticleStatus::Draft,
        };
        let created = articles::create(&api, &draft).await.unwrap();
        assert_eq!(created.title, "Fresh draft");
        assert_eq!(created.status, ArticleStatus::Draft);

        let published = ArticleDraft {
            status: ArticleStatus::Published,
            ..draft
        };
        let updated = articles::update(&api, &created.id, &published).await.unwrap();
        assert_eq!(updated.status, ArticleStatus::Published);

        articles::delete(&api, &created.id).await.unwrap();
        let list = articles::list(&api).await.unwrap();
        assert!(list.iter().all(|a| a.id != created.id));
    }

    #[tokio::test]
    async fn single_article_fetch_by_id() {
        let (api, _) = signed_in().await;

        let article = articles::get(&api, "a1").await.unwrap();
        assert_eq!(article.title, "Welcome to Pressboard");
        assert_eq!(article.category.as_deref(), Some("c1"));

        let err = articles::get(&api, "a999").await.unwrap_err();
        match err {
            ApiError::Backend { status, .. } => assert_eq!(status, 404),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn deleting_missing_article_is_not_found() {
        let (api, _) = signed_in().await;
        let err = articles::delete(&api, "a999").await.unwrap_err();
        match err {
            ApiError::Backend { status, .. } => assert_eq!(status, 404),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn taxonomy_crud() {
        let (api, _) = signed_in().await;

        let category = categories::create(
            &api,
            &CategoryDraft {
                name: "Releases".to_string(),
                slug: "releases".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
        assert_eq!(category.slug, "releases");
        assert!(categories::list(&api)
            .await
            .unwrap()
            .iter()
            .any(|c| c.id == category.id));

        let tag = tags::create(
            &api,
            &TagDraft {
                name: "tooling".to_string(),
                slug: "tooling".to_string(),
            },
        )
        .await
        .unwrap();
        tags::delete(&api, &tag.id).await.unwrap();
        assert!(tags::list(&api).await.unwrap().iter().all(|t| t.id != tag.id));
    }

    #[tokio::test]
    async fn media_upload_and_delete() {
        let (api, _) = signed_in().await;

        let bytes = vec![0u8; 128];
        let asset = media::upload(&api, "banner.jpg", "image/jpeg", bytes).await.unwrap();
        assert_eq!(asset.filename, "banner.jpg");
        assert_eq!(asset.size, 128);
        assert!(asset.url.ends_with("banner.jpg"));

        media::delete(&api, &asset.id).await.unwrap();
        assert!(media::list(&api).await.unwrap().iter().all(|m| m.id != asset.id));
    }

    #[tokio::test]
    async fn settings_roundtrip() {
        let (api, _) = signed_in().await;

        let mut current = settings::get(&api).await.unwrap();
        assert_eq!(current.site_title, "Pressboard");

        current.site_title = "Renamed site".to_string();
        current.posts_per_page = 25;
        settings::update(&api, &current).await.unwrap();

        let reloaded = settings::get(&api).await.unwrap();
        assert_eq!(reloaded.site_title, "Renamed site");
        assert_eq!(reloaded.posts_per_page, 25);
    }

    #[tokio::test]
    async fn fail_once_fails_exactly_once() {
        let (api, fixture) = signed_in().await;
        fixture.fail_once("/categories", "database unavailable");

        let err = categories::list(&api).await.unwrap_err();
        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("expected backend error, got {other:?}"),
        }

        assert!(categories::list(&api).await.is_ok());
    }

    #[tokio::test]
    async fn request_count_tracks_every_call() {
        let (api, fixture) = api();
        assert_eq!(fixture.request_count(), 0);

        let _ = auth::me(&api).await;
        assert_eq!(fixture.request_count(), 1);
    }
}
