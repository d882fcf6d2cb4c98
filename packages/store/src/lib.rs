pub mod config;
pub mod models;

mod vault;
pub use vault::TokenVault;

pub use config::{BackendKind, PressboardConfig};
pub use models::{
    Article, ArticleStatus, Category, MediaAsset, SiteSettings, Tag, UserInfo,
};
