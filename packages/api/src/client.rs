//! # HTTP client adapter
//!
//! [`Api`] is the single handle every domain service goes through. It owns the
//! transport and the token vault, and enforces the session contract in one
//! place:
//!
//! - every request carries `Authorization: Bearer <token>` if a token is
//!   persisted;
//! - a 401 response clears the persisted token and comes back as
//!   [`ApiError::SessionExpired`];
//! - other non-2xx responses carry the backend `message`/`error` payload
//!   field when present, else a generic failure message;
//! - one attempt per call, no retry.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use store::config::BackendKind;
use store::{PressboardConfig, TokenVault};

use crate::error::ApiError;
use crate::fixture::FixtureTransport;
use crate::http::HttpTransport;

/// HTTP verb, shared between transports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The transport behind the service interface.
#[derive(Clone)]
pub(crate) enum Transport {
    Http(HttpTransport),
    Fixture(FixtureTransport),
}

impl Transport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(u16, Value), ApiError> {
        match self {
            Transport::Http(http) => http.send(method, path, token, body).await,
            Transport::Fixture(fixture) => fixture.send(method, path, token, body),
        }
    }

    async fn upload(
        &self,
        path: &str,
        token: Option<&str>,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(u16, Value), ApiError> {
        match self {
            Transport::Http(http) => {
                http.upload(path, token, filename, content_type, bytes).await
            }
            Transport::Fixture(fixture) => {
                fixture.upload(path, token, filename, content_type, bytes)
            }
        }
    }
}

struct ApiInner {
    transport: Transport,
    vault: TokenVault,
}

/// Shared, cloneable handle to the backend.
#[derive(Clone)]
pub struct Api {
    inner: Arc<ApiInner>,
}

impl Api {
    /// Build the handle the configuration asks for.
    pub fn new(config: &PressboardConfig, vault: TokenVault) -> Self {
        let transport = match config.api.backend {
            BackendKind::Http => {
                Transport::Http(HttpTransport::new(&config.api.base_url))
            }
            BackendKind::Fixture => Transport::Fixture(FixtureTransport::new()),
        };
        Self {
            inner: Arc::new(ApiInner { transport, vault }),
        }
    }

    /// Build a handle over a specific fixture instance. Used by tests that
    /// need to keep a hand on the fixture's hooks.
    pub fn with_fixture(fixture: FixtureTransport, vault: TokenVault) -> Self {
        Self {
            inner: Arc::new(ApiInner {
                transport: Transport::Fixture(fixture),
                vault,
            }),
        }
    }

    /// The token vault this handle reads the bearer token from.
    pub fn vault(&self) -> &TokenVault {
        &self.inner.vault
    }

    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let token = self.inner.vault.load();
        let (status, payload) = self
            .inner
            .transport
            .send(method, path, token.as_deref(), body)
            .await?;
        self.check_status(method, path, status, payload)
    }

    fn check_status(
        &self,
        method: Method,
        path: &str,
        status: u16,
        payload: Value,
    ) -> Result<Value, ApiError> {
        if status == 401 {
            tracing::debug!("{} {} answered 401, clearing session token", method.as_str(), path);
            self.inner.vault.clear();
            return Err(ApiError::SessionExpired);
        }
        if !(200..300).contains(&status) {
            return Err(ApiError::Backend {
                status,
                message: backend_message(&payload),
            });
        }
        Ok(payload)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.request(Method::Get, path, None).await?)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        decode(self.request(Method::Post, path, Some(to_value(body)?)).await?)
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        decode(self.request(Method::Put, path, Some(to_value(body)?)).await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, path, None).await.map(|_| ())
    }

    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let token = self.inner.vault.load();
        let (status, payload) = self
            .inner
            .transport
            .upload(path, token.as_deref(), filename, content_type, bytes)
            .await?;
        decode(self.check_status(Method::Post, path, status, payload)?)
    }
}

/// Pull the human-readable message out of an error payload, if the backend
/// provided one.
fn backend_message(payload: &Value) -> String {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("the request failed, please try again")
        .to_string()
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_value(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
