//! Dismissable inline notices: the single surface every page-level failure
//! degrades to. A session expiry additionally resets the session signal,
//! which lands the root switch back on the login view.

use dioxus::prelude::*;

use api::ApiError;

use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub entries: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: &str) {
        self.entries.push(Notice {
            level,
            message: message.to_string(),
        });
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    notices.write().push(level, message);
}

/// Standard handling for a failed service call: surface the message, and on
/// session expiry also reset the session so the login view takes over.
pub fn report_api_error(
    error: &ApiError,
    session: &mut Signal<SessionState>,
    notices: &mut Signal<Notices>,
) {
    if error.is_session_expired() {
        session.set(SessionState::anonymous());
    }
    push_notice(notices, NoticeLevel::Error, &error.to_string());
}

/// Inline list of current notices with a dismiss button each.
#[component]
pub fn NoticeList() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries;

    rsx! {
        div {
            class: "notice-list",
            for (index, notice) in entries.into_iter().enumerate() {
                div {
                    class: notice.level.class(),
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| notices.write().dismiss(index),
                        "\u{00D7}"
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
    fn push_and_dismiss() {
        let mut notices = Notices::default();
        notices.push(NoticeLevel::Error, "first");
        notices.push(NoticeLevel::Info, "second");
        assert_eq!(notices.entries.len(), 2);

        notices.dismiss(0);
        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].message, "second");

        // Out-of-range dismiss is a no-op
        notices.dismiss(5);
        assert_eq!(notices.entries.len(), 1);
    }
}
