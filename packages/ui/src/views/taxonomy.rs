//! Categories and tags are the same page with different bindings: a list
//! plus a small name/slug form. One parameterized view serves both.

use dioxus::prelude::*;

use api::services::categories::{self, CategoryDraft};
use api::services::tags::{self, TagDraft};
use api::{Api, ApiError};
use store::models::slugify;

use crate::notices::{push_notice, report_api_error, use_notices, NoticeLevel};
use crate::session::use_session;
use crate::table::{Column, ResourceTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxonomyKind {
    Categories,
    Tags,
}

impl TaxonomyKind {
    fn title(&self) -> &'static str {
        match self {
            TaxonomyKind::Categories => "Categories",
            TaxonomyKind::Tags => "Tags",
        }
    }

    fn singular(&self) -> &'static str {
        match self {
            TaxonomyKind::Categories => "category",
            TaxonomyKind::Tags => "tag",
        }
    }

    fn has_description(&self) -> bool {
        matches!(self, TaxonomyKind::Categories)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct TaxonomyRow {
    id: String,
    name: String,
    slug: String,
    description: String,
}

fn row_name(row: &TaxonomyRow) -> String {
    row.name.clone()
}

fn row_slug(row: &TaxonomyRow) -> String {
    row.slug.clone()
}

fn row_description(row: &TaxonomyRow) -> String {
    row.description.clone()
}

fn row_key(row: &TaxonomyRow) -> String {
    row.id.clone()
}

async fn load_rows(api: &Api, kind: TaxonomyKind) -> Result<Vec<TaxonomyRow>, ApiError> {
    match kind {
        TaxonomyKind::Categories => Ok(categories::list(api)
            .await?
            .into_iter()
            .map(|c| TaxonomyRow {
                id: c.id,
                name: c.name,
                slug: c.slug,
                description: c.description,
            })
            .collect()),
        TaxonomyKind::Tags => Ok(tags::list(api)
            .await?
            .into_iter()
            .map(|t| TaxonomyRow {
                id: t.id,
                name: t.name,
                slug: t.slug,
                description: String::new(),
            })
            .collect()),
    }
}

async fn save_row(
    api: &Api,
    kind: TaxonomyKind,
    editing: Option<String>,
    name: String,
    slug: String,
    description: String,
) -> Result<(), ApiError> {
    match kind {
        TaxonomyKind::Categories => {
            let draft = CategoryDraft {
                name,
                slug,
                description,
            };
            match editing {
                Some(id) => categories::update(api, &id, &draft).await.map(|_| ()),
                None => categories::create(api, &draft).await.map(|_| ()),
            }
        }
        TaxonomyKind::Tags => {
            let draft = TagDraft { name, slug };
            match editing {
                Some(id) => tags::update(api, &id, &draft).await.map(|_| ()),
                None => tags::create(api, &draft).await.map(|_| ()),
            }
        }
    }
}

async fn delete_row(api: &Api, kind: TaxonomyKind, id: &str) -> Result<(), ApiError> {
    match kind {
        TaxonomyKind::Categories => categories::delete(api, id).await,
        TaxonomyKind::Tags => tags::delete(api, id).await,
    }
}

#[component]
pub fn CategoriesView() -> Element {
    rsx! {
        TaxonomyView { kind: TaxonomyKind::Categories }
    }
}

#[component]
pub fn TagsView() -> Element {
    rsx! {
        TaxonomyView { kind: TaxonomyKind::Tags }
    }
}

#[component]
fn TaxonomyView(kind: TaxonomyKind) -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();

    let mut rows = use_signal(Vec::<TaxonomyRow>::new);
    let mut reload = use_signal(|| 0u32);
    let mut name = use_signal(String::new);
    let mut slug = use_signal(String::new);
    let mut slug_touched = use_signal(|| false);
    let mut description = use_signal(String::new);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<TaxonomyRow>::None);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let _tick = reload();
        async move {
            match load_rows(&api, kind).await {
                Ok(list) => rows.set(list),
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
        }
    });

    let save_api = api.clone();
    let save = move |_| {
        let api = save_api.clone();
        async move {
            let name_value = name().trim().to_string();
            // Required-field check, no round-trip
            if name_value.is_empty() {
                push_notice(&mut notices, NoticeLevel::Error, "A name is required");
                return;
            }
            let slug_value = if slug().trim().is_empty() {
                slugify(&name_value)
            } else {
                slug().trim().to_string()
            };
            match save_row(&api, kind, editing(), name_value, slug_value, description()).await {
                Ok(()) => {
                    let verb = if editing().is_some() { "updated" } else { "created" };
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("The {} was {verb}", kind.singular()),
                    );
                    name.set(String::new());
                    slug.set(String::new());
                    slug_touched.set(false);
                    description.set(String::new());
                    editing.set(None);
                    let next = reload() + 1;
                    reload.set(next);
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
        }
    };

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let api = delete_api.clone();
        async move {
            let Some(row) = pending_delete() else {
                return;
            };
            match delete_row(&api, kind, &row.id).await {
                Ok(()) => {
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("The {} was deleted", kind.singular()),
                    );
                    let next = reload() + 1;
                    reload.set(next);
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
            pending_delete.set(None);
        }
    };

    let mut columns = vec![
        Column {
            label: "Name",
            value: row_name,
        },
        Column {
            label: "Slug",
            value: row_slug,
        },
    ];
    if kind.has_description() {
        columns.push(Column {
            label: "Description",
            value: row_description,
        });
    }

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            h2 { class: "view-title", "{kind.title()}" }

            div {
                class: "editor-form",

                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt| {
                            let value = evt.value();
                            if !slug_touched() {
                                slug.set(slugify(&value));
                            }
                            name.set(value);
                        },
                    }
                }

                div {
                    class: "form-field",
                    label { "Slug" }
                    input {
                        r#type: "text",
                        value: slug(),
                        oninput: move |evt| {
                            slug_touched.set(true);
                            slug.set(evt.value());
                        },
                    }
                }

                if kind.has_description() {
                    div {
                        class: "form-field",
                        label { "Description" }
                        input {
                            r#type: "text",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        onclick: save,
                        if editing().is_some() { "Update" } else { "Create" }
                    }
                    if editing().is_some() {
                        button {
                            class: "table-action",
                            onclick: move |_| {
                                name.set(String::new());
                                slug.set(String::new());
                                slug_touched.set(false);
                                description.set(String::new());
                                editing.set(None);
                            },
                            "Cancel"
                        }
                    }
                }
            }

            if let Some(ref row) = pending_delete() {
                div {
                    class: "confirm-bar",
                    span { "Delete \"{row.name}\"?" }
                    button { class: "table-action table-action--danger", onclick: confirm_delete, "Delete" }
                    button { class: "table-action", onclick: move |_| pending_delete.set(None), "Cancel" }
                }
            }

            ResourceTable {
                columns: columns,
                items: rows(),
                row_key: row_key,
                empty_message: "Nothing here yet.",
                on_edit: move |row: TaxonomyRow| {
                    name.set(row.name);
                    slug.set(row.slug);
                    slug_touched.set(true);
                    description.set(row.description);
                    editing.set(Some(row.id));
                },
                on_delete: move |row: TaxonomyRow| pending_delete.set(Some(row)),
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

    async fn signed_in_api() -> Api {
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
        api
    }

    #[tokio::test]
    async fn both_kinds_load_through_the_same_view_model() {
        let api = signed_in_api().await;

        let categories = load_rows(&api, TaxonomyKind::Categories).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert!(categories.iter().any(|r| r.name == "News"));

        let tags = load_rows(&api, TaxonomyKind::Tags).await.unwrap();
        assert_eq!(tags.len(), 3);
        assert!(tags.iter().all(|r| r.description.is_empty()));
    }

    #[tokio::test]
    async fn save_creates_and_updates_through_the_kind_dispatch() {
        let api = signed_in_api().await;

        save_row(
            &api,
            TaxonomyKind::Tags,
            None,
            "tooling".to_string(),
            "tooling".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let rows = load_rows(&api, TaxonomyKind::Tags).await.unwrap();
        let created = rows.iter().find(|r| r.name == "tooling").unwrap();

        save_row(
            &api,
            TaxonomyKind::Tags,
            Some(created.id.clone()),
            "build-tooling".to_string(),
            "build-tooling".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let rows = load_rows(&api, TaxonomyKind::Tags).await.unwrap();
        assert!(rows.iter().any(|r| r.name == "build-tooling"));

        delete_row(&api, TaxonomyKind::Tags, &created.id).await.unwrap();
        let rows = load_rows(&api, TaxonomyKind::Tags).await.unwrap();
        assert!(rows.iter().all(|r| r.id != created.id));
    }
}
