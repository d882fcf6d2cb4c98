use dioxus::prelude::*;

use api::services::{articles, categories, media, tags};
use api::{Api, ApiError};
use store::models::{Article, ArticleStatus};

use crate::nav::use_nav;
use crate::notices::{report_api_error, use_notices};
use crate::session::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Debug, Default, PartialEq)]
struct Overview {
    articles: Vec<Article>,
    published: usize,
    categories: usize,
    tags: usize,
    media: usize,
}

/// Fetch all counts in parallel. A failing resource zeroes its tile but
/// never blocks the others; only the first failure is reported.
async fn load_overview(api: &Api) -> (Overview, Option<ApiError>) {
    let (articles, categories, tags, media) = futures::join!(
        articles::list(api),
        categories::list(api),
        tags::list(api),
        media::list(api),
    );

    let mut overview = Overview::default();
    let mut first_error: Option<ApiError> = None;

    match articles {
        Ok(list) => {
            overview.published = list
                .iter()
                .filter(|a| a.status == ArticleStatus::Published)
                .count();
            overview.articles = list;
        }
        Err(e) => first_error = Some(e),
    }
    match categories {
        Ok(list) => overview.categories = list.len(),
        Err(e) => {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }
    match tags {
        Ok(list) => overview.tags = list.len(),
        Err(e) => {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }
    match media {
        Ok(list) => overview.media = list.len(),
        Err(e) => {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }

    (overview, first_error)
}

#[component]
pub fn DashboardView() -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();
    let mut nav = use_nav();
    let mut overview = use_signal(Overview::default);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let (data, error) = load_overview(&api).await;
            overview.set(data);
            if let Some(e) = error {
                report_api_error(&e, &mut session, &mut notices);
            }
        }
    });

    let data = overview();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            h2 { class: "view-title", "Overview" }

            div {
                class: "stat-grid",
                StatTile { label: "Articles", value: data.articles.len() }
                StatTile { label: "Published", value: data.published }
                StatTile { label: "Categories", value: data.categories }
                StatTile { label: "Tags", value: data.tags }
                StatTile { label: "Media files", value: data.media }
            }

            h3 { class: "view-section-title", "Recent articles" }
            if data.articles.is_empty() {
                p { class: "table-empty", "Nothing written yet." }
            } else {
                ul {
                    class: "recent-list",
                    for article in data.articles.iter().take(5) {
                        li {
                            key: "{article.id}",
                            button {
                                class: "recent-link",
                                onclick: {
                                    let article = article.clone();
                                    move |_| nav.write().open_article_editor(Some(article.clone()))
                                },
                                "{article.title}"
                            }
                            span { class: "recent-status", "{article.status.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
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
    async fn overview_counts_every_resource() {
        let (api, _) = signed_in_api().await;

        let (overview, error) = load_overview(&api).await;
        assert!(error.is_none());
        assert_eq!(overview.articles.len(), 2);
        assert_eq!(overview.published, 1);
        assert_eq!(overview.categories, 2);
        assert_eq!(overview.tags, 3);
        assert_eq!(overview.media, 1);
    }

    #[tokio::test]
    async fn one_failing_resource_reports_a_single_error() {
        let (api, fixture) = signed_in_api().await;
        fixture.fail_once("/tags", "tags are down");

        let (overview, error) = load_overview(&api).await;
        assert_eq!(overview.tags, 0);
        assert_eq!(overview.articles.len(), 2);
        assert_eq!(error.map(|e| e.to_string()), Some("tags are down".to_string()));
    }
}
