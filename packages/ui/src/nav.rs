//! Navigation state: a flat "current page" pointer plus the bits of UI
//! state the layout reads (sidebar visibility, content tab, the article
//! being edited). There is no history stack and no router.

use dioxus::prelude::*;

use store::models::Article;

/// The pages the admin console can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Content,
    Categories,
    Tags,
    Media,
    Settings,
    ArticleEditor,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Content => "Content",
            Page::Categories => "Categories",
            Page::Tags => "Tags",
            Page::Media => "Media",
            Page::Settings => "Settings",
            Page::ArticleEditor => "Article",
        }
    }

    /// Pages listed in the sidebar, in display order. The editor is reached
    /// through the content page, not the menu.
    pub fn menu() -> [Page; 6] {
        [
            Page::Dashboard,
            Page::Content,
            Page::Categories,
            Page::Tags,
            Page::Media,
            Page::Settings,
        ]
    }
}

/// Shared navigation/UI state.
///
/// `editing_article` is true only when `current_article` is set; both are
/// written together by [`NavState::open_article_editor`] and
/// [`NavState::return_to_content`].
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub active_page: Page,
    /// Filter tab on the content page.
    pub active_tab: String,
    pub show_sidebar: bool,
    pub current_article: Option<Article>,
    pub editing_article: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_page: Page::Dashboard,
            active_tab: "all".to_string(),
            show_sidebar: true,
            current_article: None,
            editing_article: false,
        }
    }
}

impl NavState {
    pub fn set_active_page(&mut self, page: Page) {
        self.active_page = page;
    }

    pub fn set_active_tab(&mut self, tab: &str) {
        self.active_tab = tab.to_string();
    }

    pub fn set_show_sidebar(&mut self, visible: bool) {
        self.show_sidebar = visible;
    }

    /// Go to the article editor. With an article this is an edit, without
    /// one it is a create — the same destination serves both flows.
    pub fn open_article_editor(&mut self, article: Option<Article>) {
        self.editing_article = article.is_some();
        self.current_article = article;
        self.active_page = Page::ArticleEditor;
    }

    /// Leave the editor and drop the article it was holding.
    pub fn return_to_content(&mut self) {
        self.current_article = None;
        self.editing_article = false;
        self.active_page = Page::Content;
    }
}

/// Get the shared navigation state signal.
pub fn use_nav() -> Signal<NavState> {
    use_context::<Signal<NavState>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::ArticleStatus;

    fn article() -> Article {
        Article {
            id: "a1".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            category: None,
            tags: Vec::new(),
            status: ArticleStatus::Draft,
            updated_at: None,
        }
    }

    #[test]
    fn starts_on_dashboard_with_sidebar_visible() {
        let nav = NavState::default();
        assert_eq!(nav.active_page, Page::Dashboard);
        assert_eq!(nav.active_tab, "all");
        assert!(nav.show_sidebar);
        assert!(nav.current_article.is_none());
        assert!(!nav.editing_article);
    }

    #[test]
    fn editor_without_article_is_a_create() {
        let mut nav = NavState::default();
        nav.open_article_editor(None);
        assert_eq!(nav.active_page, Page::ArticleEditor);
        assert!(!nav.editing_article);
        assert!(nav.current_article.is_none());
    }

    #[test]
    fn editor_with_article_is_an_edit() {
        let mut nav = NavState::default();
        nav.open_article_editor(Some(article()));
        assert_eq!(nav.active_page, Page::ArticleEditor);
        assert!(nav.editing_article);
        assert_eq!(
            nav.current_article.as_ref().map(|a| a.id.as_str()),
            Some("a1")
        );
    }

    #[test]
    fn returning_to_content_drops_the_article() {
        let mut nav = NavState::default();
        nav.open_article_editor(Some(article()));
        nav.return_to_content();
        assert_eq!(nav.active_page, Page::Content);
        assert!(nav.current_article.is_none());
        assert!(!nav.editing_article);
    }

    #[test]
    fn plain_setters_touch_nothing_else() {
        let mut nav = NavState::default();
        nav.set_active_tab("published");
        nav.set_show_sidebar(false);
        nav.set_active_page(Page::Media);
        assert_eq!(nav.active_tab, "published");
        assert!(!nav.show_sidebar);
        assert_eq!(nav.active_page, Page::Media);
        assert!(nav.current_article.is_none());
    }
}
