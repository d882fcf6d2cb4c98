//! Content page: the article list with status filter tabs. Articles and
//! categories load in parallel so category names can be resolved for
//! display without a second pass.

use dioxus::prelude::*;

use api::services::{articles, categories};
use api::{Api, ApiError};
use store::models::{Article, ArticleStatus, Category};

use crate::nav::use_nav;
use crate::notices::{push_notice, report_api_error, use_notices, NoticeLevel};
use crate::session::use_session;
use crate::table::{Column, ResourceTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const TABS: [&str; 3] = ["all", "published", "draft"];

pub(crate) struct ContentData {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub error: Option<ApiError>,
}

/// Load articles and categories in parallel. A failure on either side never
/// discards the other result, and at most one error is handed back.
pub(crate) async fn load_content(api: &Api) -> ContentData {
    let (articles, categories) = futures::join!(articles::list(api), categories::list(api));

    let mut error = None;
    let articles = articles.unwrap_or_else(|e| {
        error = Some(e);
        Vec::new()
    });
    let categories = categories.unwrap_or_else(|e| {
        if error.is_none() {
            error = Some(e);
        }
        Vec::new()
    });

    ContentData {
        articles,
        categories,
        error,
    }
}

/// Display-time lookup of a category name.
fn category_name(categories: &[Category], id: Option<&str>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Clone, PartialEq)]
struct ArticleRow {
    article: Article,
    category: String,
    updated: String,
}

fn row_title(row: &ArticleRow) -> String {
    row.article.title.clone()
}

fn row_category(row: &ArticleRow) -> String {
    row.category.clone()
}

fn row_status(row: &ArticleRow) -> String {
    row.article.status.label().to_string()
}

fn row_updated(row: &ArticleRow) -> String {
    row.updated.clone()
}

fn row_key(row: &ArticleRow) -> String {
    row.article.id.clone()
}

#[component]
pub fn ContentView() -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();
    let mut nav = use_nav();

    let mut article_list = use_signal(Vec::<Article>::new);
    let mut category_list = use_signal(Vec::<Category>::new);
    let mut reload = use_signal(|| 0u32);
    let mut pending_delete = use_signal(|| Option::<Article>::None);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let _tick = reload();
        async move {
            let data = load_content(&api).await;
            article_list.set(data.articles);
            category_list.set(data.categories);
            if let Some(e) = data.error {
                report_api_error(&e, &mut session, &mut notices);
            }
        }
    });

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let api = delete_api.clone();
        async move {
            let Some(article) = pending_delete() else {
                return;
            };
            match articles::delete(&api, &article.id).await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Article deleted");
                    let next = reload() + 1;
                    reload.set(next);
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
            pending_delete.set(None);
        }
    };

    let state = nav();
    let rows: Vec<ArticleRow> = {
        let categories = category_list();
        article_list()
            .iter()
            .filter(|a| match state.active_tab.as_str() {
                "published" => a.status == ArticleStatus::Published,
                "draft" => a.status == ArticleStatus::Draft,
                _ => true,
            })
            .map(|a| ArticleRow {
                category: category_name(&categories, a.category.as_deref()),
                updated: a.updated_at.clone().unwrap_or_else(|| "-".to_string()),
                article: a.clone(),
            })
            .collect()
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            div {
                class: "view-toolbar",
                h2 { class: "view-title", "Content" }
                button {
                    class: "primary",
                    onclick: move |_| nav.write().open_article_editor(None),
                    "New article"
                }
            }

            div {
                class: "tab-row",
                for tab in TABS {
                    button {
                        key: "{tab}",
                        class: if state.active_tab == tab { "tab active" } else { "tab" },
                        onclick: move |_| nav.write().set_active_tab(tab),
                        "{tab}"
                    }
                }
            }

            if let Some(ref article) = pending_delete() {
                div {
                    class: "confirm-bar",
                    span { "Delete \"{article.title}\"?" }
                    button { class: "table-action table-action--danger", onclick: confirm_delete, "Delete" }
                    button { class: "table-action", onclick: move |_| pending_delete.set(None), "Cancel" }
                }
            }

            ResourceTable {
                columns: vec![
                    Column { label: "Title", value: row_title },
                    Column { label: "Category", value: row_category },
                    Column { label: "Status", value: row_status },
                    Column { label: "Updated", value: row_updated },
                ],
                items: rows,
                row_key: row_key,
                empty_message: "No articles in this view.",
                on_edit: move |row: ArticleRow| nav.write().open_article_editor(Some(row.article)),
                on_delete: move |row: ArticleRow| pending_delete.set(Some(row.article)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::services::auth::{self, Credentials};
    use api::FixtureTransport;
    use store::TokenVault;

    async fn signed_in_api() -> (Api, FixtureTransport) {
        let fixture = FixtureTransport::new();
        let api = Api::with_fixture(fixture.clone(), TokenVault::memory());
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
    async fn loads_articles_and_categories_together() {
        let (api, _) = signed_in_api().await;

        let data = load_content(&api).await;
        assert!(data.error.is_none());
        assert_eq!(data.articles.len(), 2);
        assert_eq!(data.categories.len(), 2);
    }

    #[tokio::test]
    async fn category_failure_does_not_block_articles() {
        let (api, fixture) = signed_in_api().await;
        fixture.fail_once("/categories", "categories are down");

        let data = load_content(&api).await;
        // Articles still land even though the parallel call failed,
        // and exactly one error comes back.
        assert_eq!(data.articles.len(), 2);
        assert!(data.categories.is_empty());
        assert_eq!(
            data.error.map(|e| e.to_string()),
            Some("categories are down".to_string())
        );
    }

    #[test]
    fn unknown_category_renders_a_placeholder() {
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "News".to_string(),
            slug: "news".to_string(),
            description: String::new(),
        }];
        assert_eq!(category_name(&categories, Some("c1")), "News");
        assert_eq!(category_name(&categories, Some("c9")), "-");
        assert_eq!(category_name(&categories, None), "-");
    }
}
