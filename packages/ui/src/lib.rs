//! This crate contains all shared UI for the workspace: the session and
//! navigation stores, the admin layout, and the page views.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_session, use_session_store, SessionProvider, SessionState, SessionStore};

mod nav;
pub use nav::{use_nav, NavState, Page};

mod notices;
pub use notices::{
    push_notice, report_api_error, use_notices, Notice, NoticeLevel, NoticeList, Notices,
};

mod sidebar;
pub use sidebar::AppSidebar;

mod header;
pub use header::Header;

mod table;
pub use table::{Column, ResourceTable};

mod layout;
pub use layout::AdminLayout;

pub mod views;
