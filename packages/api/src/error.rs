use thiserror::Error;

/// Errors surfaced by the API layer.
///
/// Every variant renders as a user-facing message suitable for an inline
/// notice; pages match on [`ApiError::SessionExpired`] to additionally clear
/// the session and return to the login view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 401. The persisted token has already been
    /// cleared by the adapter when this is returned.
    #[error("your session has expired, please sign in again")]
    SessionExpired,

    /// Any other non-2xx response, carrying the backend-provided message
    /// when one was present in the payload.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}
