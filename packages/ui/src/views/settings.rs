use dioxus::prelude::*;

use api::services::settings;
use api::Api;
use store::models::SiteSettings;

use crate::notices::{push_notice, report_api_error, use_notices, NoticeLevel};
use crate::session::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn SettingsView() -> Element {
    let api = use_context::<Api>();
    let mut session = use_session();
    let mut notices = use_notices();

    let mut site_title = use_signal(String::new);
    let mut site_description = use_signal(String::new);
    let mut posts_per_page = use_signal(String::new);
    let mut save_status = use_signal(|| Option::<&str>::None);
    let mut saving = use_signal(|| false);

    // Load current settings on mount
    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            match settings::get(&api).await {
                Ok(current) => {
                    site_title.set(current.site_title);
                    site_description.set(current.site_description);
                    posts_per_page.set(current.posts_per_page.to_string());
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
        }
    });

    let save_api = api.clone();
    let handle_save = move |_| {
        let api = save_api.clone();
        async move {
            // Validated client-side before any request goes out
            let Ok(per_page) = posts_per_page().trim().parse::<u32>() else {
                push_notice(
                    &mut notices,
                    NoticeLevel::Error,
                    "Posts per page must be a number",
                );
                return;
            };
            saving.set(true);
            save_status.set(None);
            let payload = SiteSettings {
                site_title: site_title().trim().to_string(),
                site_description: site_description().trim().to_string(),
                posts_per_page: per_page,
            };
            match settings::update(&api, &payload).await {
                Ok(saved) => {
                    site_title.set(saved.site_title);
                    site_description.set(saved.site_description);
                    posts_per_page.set(saved.posts_per_page.to_string());
                    save_status.set(Some("Saved"));
                }
                Err(e) => report_api_error(&e, &mut session, &mut notices),
            }
            saving.set(false);
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            h2 { class: "view-title", "Settings" }

            div {
                class: "editor-form",

                div {
                    class: "form-field",
                    label { "Site title" }
                    input {
                        r#type: "text",
                        value: site_title(),
                        oninput: move |evt| site_title.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Site description" }
                    textarea {
                        rows: "3",
                        value: site_description(),
                        oninput: move |evt| site_description.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Posts per page" }
                    input {
                        r#type: "number",
                        value: posts_per_page(),
                        oninput: move |evt| posts_per_page.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        disabled: saving(),
                        onclick: handle_save,
                        if saving() { "Saving..." } else { "Save settings" }
                    }
                    if let Some(status) = save_status() {
                        span { class: "save-status", "{status}" }
                    }
                }
            }
        }
    }
}
