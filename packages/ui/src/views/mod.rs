mod article_editor;
mod content;
mod dashboard;
mod login;
mod media;
mod settings;
mod taxonomy;

pub use article_editor::ArticleEditorView;
pub use content::ContentView;
pub use dashboard::DashboardView;
pub use login::LoginView;
pub use media::MediaView;
pub use settings::SettingsView;
pub use taxonomy::{CategoriesView, TagsView};
