//! The article editor serves both the "new article" and "edit article"
//! flows: it opens over whatever article the navigation store is holding,
//! or over an empty draft.

use dioxus::prelude::*;

use api::services::articles::{self, ArticleDraft};
use api::services::{categories, tags};
use api::Api;
use store::models::{ArticleStatus, Category, Tag};

use crate::icons::FaArrowLeft;
use crate::nav::use_nav;
use crate::notices::{push_notice, report_api_error, use_notices, NoticeLevel};
use crate::session::use_session;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Client-side validation, run before any network round-trip.
pub(crate) fn validate_draft(draft: &ArticleDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("A title is required".to_string());
    }
    Ok(())
}

#[component]
pub fn ArticleEditorView() -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();
    let mut nav = use_nav();

    let source = nav().current_article;
    let editing = nav().editing_article;
    let article_id = source.as_ref().map(|a| a.id.clone());

    let mut draft = use_signal(move || {
        source
            .as_ref()
            .map(ArticleDraft::from)
            .unwrap_or_default()
    });
    let mut category_list = use_signal(Vec::<Category>::new);
    let mut tag_list = use_signal(Vec::<Tag>::new);
    let mut saving = use_signal(|| false);

    // Pick lists for the category select and tag checkboxes
    let options_api = api.clone();
    let _options = use_resource(move || {
        let api = options_api.clone();
        async move {
            let (categories, tags) = futures::join!(categories::list(&api), tags::list(&api));
            match categories {
                Ok(list) => category_list.set(list),
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
            match tags {
                Ok(list) => tag_list.set(list),
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
        }
    });

    let save_api = api.clone();
    let save = move |_| {
        let api = save_api.clone();
        let article_id = article_id.clone();
        async move {
            let current = draft();
            if let Err(message) = validate_draft(&current) {
                push_notice(&mut notices, NoticeLevel::Error, &message);
                return;
            }
            saving.set(true);
            let result = match &article_id {
                Some(id) => articles::update(&api, id, &current)
                    .await
                    .map(|_| "Article updated"),
                None => articles::create(&api, &current)
                    .await
                    .map(|_| "Article created"),
            };
            match result {
                Ok(message) => {
                    push_notice(&mut notices, NoticeLevel::Success, message);
                    nav.write().return_to_content();
                }
                Err(e) => {
                    saving.set(false);
                    report_api_error(&e, &mut session, &mut notices);
                }
            }
        }
    };

    let current = draft();
    let categories = category_list();
    let tag_options = tag_list();
    let status_value = match current.status {
        ArticleStatus::Draft => "draft",
        ArticleStatus::Published => "published",
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            div {
                class: "view-toolbar",
                button {
                    class: "table-action",
                    onclick: move |_| nav.write().return_to_content(),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    span { "Back" }
                }
                h2 {
                    class: "view-title",
                    if editing { "Edit article" } else { "New article" }
                }
            }

            div {
                class: "editor-form",

                div {
                    class: "form-field",
                    label { "Title" }
                    input {
                        r#type: "text",
                        placeholder: "Article title",
                        value: current.title.clone(),
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { "Body" }
                    textarea {
                        rows: "12",
                        value: current.content.clone(),
                        oninput: move |evt| draft.write().content = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { "Category" }
                    select {
                        value: current.category.clone().unwrap_or_default(),
                        onchange: move |evt| {
                            let value = evt.value();
                            draft.write().category =
                                if value.is_empty() { None } else { Some(value) };
                        },
                        option { value: "", "No category" }
                        for category in categories.iter() {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                "{category.name}"
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "Tags" }
                    div {
                        class: "tag-options",
                        for tag in tag_options.iter() {
                            label {
                                key: "{tag.id}",
                                class: "tag-option",
                                input {
                                    r#type: "checkbox",
                                    checked: current.tags.contains(&tag.id),
                                    onchange: {
                                        let id = tag.id.clone();
                                        move |evt: FormEvent| {
                                            let mut draft = draft.write();
                                            if evt.checked() {
                                                if !draft.tags.contains(&id) {
                                                    draft.tags.push(id.clone());
                                                }
                                            } else {
                                                draft.tags.retain(|t| t != &id);
                                            }
                                        }
                                    },
                                }
                                span { "{tag.name}" }
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "Status" }
                    select {
                        value: status_value,
                        onchange: move |evt| {
                            draft.write().status = if evt.value() == "published" {
                                ArticleStatus::Published
                            } else {
                                ArticleStatus::Draft
                            };
                        },
                        option { value: "draft", "Draft" }
                        option { value: "published", "Published" }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        disabled: saving(),
                        onclick: save,
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_blocks_submission() {
        let draft = ArticleDraft {
            title: "   ".to_string(),
            ..ArticleDraft::default()
        };
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn titled_draft_passes_validation() {
        let draft = ArticleDraft {
            title: "Launch notes".to_string(),
            ..ArticleDraft::default()
        };
        assert!(validate_draft(&draft).is_ok());
    }
}
