use dioxus::prelude::*;

use crate::icons::{
    FaFolder, FaGauge, FaGear, FaImage, FaNewspaper, FaRightFromBracket, FaTags,
};
use crate::nav::{use_nav, Page};
use crate::session::{use_session, use_session_store};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

fn page_icon(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        Page::Content | Page::ArticleEditor => {
            rsx! { Icon { icon: FaNewspaper, width: 16, height: 16 } }
        }
        Page::Categories => rsx! { Icon { icon: FaFolder, width: 16, height: 16 } },
        Page::Tags => rsx! { Icon { icon: FaTags, width: 16, height: 16 } },
        Page::Media => rsx! { Icon { icon: FaImage, width: 16, height: 16 } },
        Page::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
    }
}

#[component]
pub fn AppSidebar() -> Element {
    let mut nav = use_nav();
    let session = use_session();
    let state = session();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        div {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                if let Some(ref user) = state.user {
                    span { class: "sidebar-user-name", "{user.display_name()}" }
                    span { class: "sidebar-user-role", "{user.role}" }
                } else {
                    span { class: "sidebar-user-name", "Pressboard" }
                }
            }

            // Page menu
            nav {
                class: "sidebar-menu",
                for page in Page::menu() {
                    button {
                        key: "{page.label()}",
                        class: if nav().active_page == page { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| nav.write().set_active_page(page),
                        {page_icon(page)}
                        span { "{page.label()}" }
                    }
                }
            }

            // Bottom actions
            div {
                class: "sidebar-bottom",
                LogoutItem {}
            }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let store = use_session_store();
    let mut session = use_session();

    let onclick = move |_| {
        let store = store.clone();
        async move {
            session.set(store.logout().await);
        }
    };

    rsx! {
        button {
            class: "sidebar-bottom-item",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "Log out" }
        }
    }
}
