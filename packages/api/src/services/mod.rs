//! Domain services: one module per backend resource, one function per
//! operation. Each function is a thin pass-through to the [`crate::Api`]
//! adapter with a fixed path — no caching, no request deduplication.

pub mod articles;
pub mod auth;
pub mod categories;
pub mod media;
pub mod settings;
pub mod tags;
