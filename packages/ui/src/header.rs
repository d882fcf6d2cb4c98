use dioxus::prelude::*;

use crate::icons::FaBars;
use crate::nav::use_nav;
use crate::session::use_session;
use crate::Icon;

#[component]
pub fn Header() -> Element {
    let mut nav = use_nav();
    let session = use_session();
    let email = session().user.map(|u| u.email).unwrap_or_default();
    let title = nav().active_page.label();

    rsx! {
        header {
            class: "admin-header",
            button {
                class: "sidebar-toggle",
                title: "Toggle sidebar",
                onclick: move |_| {
                    let visible = nav().show_sidebar;
                    nav.write().set_show_sidebar(!visible);
                },
                Icon { icon: FaBars, width: 16, height: 16 }
            }
            h1 { class: "admin-header-title", "{title}" }
            span { class: "admin-header-user", "{email}" }
        }
    }
}
