//! Login page with the email/password form.

use dioxus::prelude::*;

use api::services::auth::Credentials;

use crate::notices::NoticeList;
use crate::session::{use_session, use_session_store};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView() -> Element {
    let store = use_session_store();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let store = store.clone();
        async move {
            let email_value = email().trim().to_string();
            // Required-field check, no round-trip
            if email_value.is_empty() || password().is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);
            match store
                .login(&Credentials {
                    email: email_value,
                    password: password(),
                })
                .await
            {
                Ok(state) => session.set(state),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "login-container",

            h1 { class: "login-title", "Pressboard" }
            p { class: "login-subtitle", "Sign in to manage your site" }

            // Carries over e.g. the session-expiry notice
            NoticeList {}

            div {
                class: "login-form",

                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(ref message) = error() {
                    p { class: "login-error", "{message}" }
                }

                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
