use dioxus::prelude::*;

use crate::header::Header;
use crate::nav::{use_nav, Page};
use crate::notices::NoticeList;
use crate::sidebar::AppSidebar;
use crate::views::{
    ArticleEditorView, CategoriesView, ContentView, DashboardView, MediaView, SettingsView,
    TagsView,
};

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

fn active_view(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { DashboardView {} },
        Page::Content => rsx! { ContentView {} },
        Page::Categories => rsx! { CategoriesView {} },
        Page::Tags => rsx! { TagsView {} },
        Page::Media => rsx! { MediaView {} },
        Page::Settings => rsx! { SettingsView {} },
        Page::ArticleEditor => rsx! { ArticleEditorView {} },
    }
}

/// The authenticated shell: sidebar, header, notices and the active page.
#[component]
pub fn AdminLayout() -> Element {
    let nav = use_nav();
    let state = nav();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: "admin-shell",
            if state.show_sidebar {
                AppSidebar {}
            }
            div {
                class: "admin-main",
                Header {}
                NoticeList {}
                main {
                    class: "admin-content",
                    {active_view(state.active_page)}
                }
            }
        }
    }
}
