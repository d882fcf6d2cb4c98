//! Session state and the store that drives it.
//!
//! [`SessionStore`] is a plain object over the [`Api`] handle, so the whole
//! login/logout/startup contract is testable without a running UI.
//! [`SessionProvider`] wraps it into the Dioxus context for the component
//! tree.

use dioxus::prelude::*;

use api::services::auth::{self, Credentials};
use api::{Api, ApiError};
use store::models::UserInfo;

/// Authentication state for the application.
///
/// `authenticated` is true exactly when `user` is present; both constructors
/// keep that pairing, so the two fields can never drift apart.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub authenticated: bool,
    /// True until the startup session check has resolved.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// Resolved, signed-out state.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: false,
        }
    }

    /// Resolved, signed-in state.
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
            loading: false,
        }
    }
}

/// The session contract: startup check, login, logout.
#[derive(Clone)]
pub struct SessionStore {
    api: Api,
}

impl SessionStore {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Startup check. Without a persisted token this resolves locally,
    /// no request leaves the client; with one, the token is validated
    /// against `/auth/me` and cleared if the backend rejects it. Any
    /// failure means "not authenticated", never a fatal error.
    pub async fn check_session(&self) -> SessionState {
        if self.api.vault().load().is_none() {
            tracing::debug!("no persisted token, starting signed out");
            return SessionState::anonymous();
        }
        match auth::me(&self.api).await {
            Ok(user) => SessionState::signed_in(user),
            Err(e) => {
                tracing::debug!("session check failed: {e}");
                // A 401 already cleared the vault; clear for the other
                // failure modes too so the next load starts clean.
                self.api.vault().clear();
                SessionState::anonymous()
            }
        }
    }

    /// Authenticate and persist the returned token. On failure nothing is
    /// persisted and the error is handed back for the form to display.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionState, ApiError> {
        let response = auth::login(&self.api, credentials).await?;
        self.api.vault().save(&response.token);
        Ok(SessionState::signed_in(response.user))
    }

    /// Sign out. The remote call is best-effort; the local token and state
    /// are cleared no matter what it returns.
    pub async fn logout(&self) -> SessionState {
        if let Err(e) = auth::logout(&self.api).await {
            tracing::warn!("remote logout failed: {e}");
        }
        self.api.vault().clear();
        SessionState::anonymous()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the session store for calling login/logout.
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

/// Provider component that manages session state.
/// Wrap the app with this component; it runs the startup check once and
/// keeps the UI on a loading indicator until the check resolves.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_context::<Api>();
    let store = use_context_provider(|| SessionStore::new(api));
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    // Resolve the persisted session on mount
    let _ = use_resource(move || {
        let store = store.clone();
        async move {
            session.set(store.check_session().await);
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::FixtureTransport;
    use store::TokenVault;

    fn session_store() -> (SessionStore, FixtureTransport) {
        let fixture = FixtureTransport::new();
        let api = Api::with_fixture(fixture.clone(), TokenVault::memory());
        (SessionStore::new(api), fixture)
    }

    fn admin_credentials() -> Credentials {
        Credentials {
            email: "example@gmail.com".to_string(),
            password: "test123456".to_string(),
        }
    }

    fn assert_coherent(state: &SessionState) {
        assert_eq!(state.authenticated, state.user.is_some());
    }

    #[tokio::test]
    async fn startup_without_token_resolves_locally() {
        let (store, fixture) = session_store();

        let state = store.check_session().await;
        assert!(!state.loading);
        assert!(!state.authenticated);
        assert_coherent(&state);
        // No token means no network traffic at all
        assert_eq!(fixture.request_count(), 0);
    }

    #[tokio::test]
    async fn login_persists_token_and_signs_in() {
        let (store, _) = session_store();

        let state = store.login(&admin_credentials()).await.unwrap();
        assert!(state.authenticated);
        assert_coherent(&state);
        assert_eq!(state.user.as_ref().map(|u| u.role.as_str()), Some("admin"));

        let token = store.api.vault().load().expect("token persisted");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn login_failure_persists_nothing() {
        let (store, _) = session_store();

        let err = store
            .login(&Credentials {
                email: "example@gmail.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Backend { .. }));
        assert_eq!(store.api.vault().load(), None);
    }

    #[tokio::test]
    async fn login_then_logout_leaves_no_session_behind() {
        let (store, _) = session_store();

        let signed_in = store.login(&admin_credentials()).await.unwrap();
        assert!(signed_in.authenticated);

        let state = store.logout().await;
        assert!(!state.authenticated);
        assert!(state.user.is_none());
        assert_coherent(&state);
        assert_eq!(store.api.vault().load(), None);
    }

    #[tokio::test]
    async fn logout_clears_locally_even_if_remote_fails() {
        let (store, fixture) = session_store();
        store.login(&admin_credentials()).await.unwrap();

        fixture.fail_once("/auth/logout", "backend down");
        let state = store.logout().await;
        assert!(!state.authenticated);
        assert_eq!(store.api.vault().load(), None);
    }

    #[tokio::test]
    async fn stale_token_is_cleared_by_the_startup_check() {
        let (store, _) = session_store();
        store.api.vault().save("stale-token");

        let state = store.check_session().await;
        assert!(!state.authenticated);
        assert!(!state.loading);
        assert_coherent(&state);
        assert_eq!(store.api.vault().load(), None);
    }

    #[tokio::test]
    async fn valid_token_resumes_the_session() {
        let (store, _) = session_store();
        store.login(&admin_credentials()).await.unwrap();

        // Simulate a fresh application load over the same persisted state
        let state = store.check_session().await;
        assert!(state.authenticated);
        assert_eq!(
            state.user.as_ref().map(|u| u.email.as_str()),
            Some("example@gmail.com")
        );
    }
}
