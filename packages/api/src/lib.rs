//! # API crate — REST client layer for the Pressboard admin console
//!
//! Everything the UI needs to talk to the backend lives here: the HTTP
//! adapter, the error taxonomy, and one thin domain-service module per
//! resource. The backend itself is swappable ([`FixtureTransport`] vs real
//! HTTP), selected by [`store::PressboardConfig`], so pages never branch on
//! mock-vs-live — they always go through the same service functions.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Api`] handle: attaches the bearer token, normalizes errors, clears the token on 401 |
//! | [`error`] | [`ApiError`] — network, session-expiry, backend and decode failures |
//! | [`http`] | Transport against the real REST backend (reqwest) |
//! | [`fixture`] | In-memory REST double seeded with demo data; drives the test suite |
//! | [`services`] | Per-resource operations: `auth`, `articles`, `categories`, `tags`, `media`, `settings` |

mod client;
mod error;
mod fixture;
mod http;

pub mod services;

pub use client::Api;
pub use error::ApiError;
pub use fixture::FixtureTransport;
pub use http::HttpTransport;

pub use store::models::{
    Article, ArticleStatus, Category, MediaAsset, SiteSettings, Tag, UserInfo,
};
