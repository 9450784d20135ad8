use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{LoginRequest, RegisterRequest, SessionState, SessionView};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CredentialStore;
use crate::services::auth::AuthService;
use crate::services::transport::ApiTransport;

/// Publishes every transition as one complete [`SessionState`] on a watch
/// channel. Transitions are serialized by an internal lock, so observers
/// never see a torn view.
pub struct SessionController<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    auth: Arc<AuthService<T, S>>,
    store: Arc<S>,
    state: watch::Sender<SessionState>,
    transition: Mutex<()>,
}

impl<T, S> SessionController<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    pub fn new(auth: Arc<AuthService<T, S>>, store: Arc<S>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            auth,
            store,
            state,
            transition: Mutex::new(()),
        }
    }

    pub fn auth(&self) -> &AuthService<T, S> {
        &self.auth
    }

    /// Receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> SessionView {
        self.state.borrow().view()
    }

    /// Resolve the startup state from the credential store.
    ///
    /// A storage fault resolves to `Unauthenticated` rather than leaving the
    /// front end stuck in the loading state.
    pub async fn initialize(&self) -> SessionState {
        let _guard = self.transition.lock().await;
        self.publish(SessionState::CheckingStorage);

        let next = match self.store.load_session().await {
            Ok(Some((_, user))) => SessionState::Authenticated(user),
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!("Failed to read stored session: {}", e);
                SessionState::Unauthenticated
            }
        };
        self.publish(next.clone());
        next
    }

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let _guard = self.transition.lock().await;
        let request = LoginRequest::new(email, password);

        match self.auth.login(&request).await {
            Ok(session) => {
                self.publish(SessionState::Authenticated(session.user.clone()));
                Ok(session.user)
            }
            Err(e) => {
                self.settle_failed_sign_in(&e).await;
                Err(e)
            }
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> DomainResult<User> {
        let _guard = self.transition.lock().await;

        match self.auth.register(request).await {
            Ok(session) => {
                self.publish(SessionState::Authenticated(session.user.clone()));
                Ok(session.user)
            }
            Err(e) => {
                self.settle_failed_sign_in(&e).await;
                Err(e)
            }
        }
    }

    /// Clear stored credentials and become `Unauthenticated`.
    ///
    /// The transition happens even when clearing the store fails; the
    /// storage error is still returned.
    pub async fn logout(&self) -> DomainResult<()> {
        let _guard = self.transition.lock().await;
        let cleared = self.store.clear_all().await;
        if let Err(e) = &cleared {
            warn!("Failed to clear credentials on logout: {}", e);
        }
        self.publish(SessionState::Unauthenticated);
        info!("Logged out");
        cleared
    }

    /// Re-fetch the profile and replace the in-memory user.
    ///
    /// Never flips the authenticated flag; a failure keeps the previous user.
    pub async fn refresh_user(&self) -> DomainResult<User> {
        let _guard = self.transition.lock().await;
        let user = self.auth.get_profile().await?;

        if self.state.borrow().is_authenticated() {
            self.publish(SessionState::Authenticated(user.clone()));
        }
        Ok(user)
    }

    /// Drop to `Unauthenticated` when the stored token or user has gone,
    /// as happens after a 401 teardown. Never promotes.
    pub async fn reconcile(&self) -> DomainResult<SessionState> {
        let _guard = self.transition.lock().await;
        self.end_session_if_credentials_gone().await?;
        Ok(self.state())
    }

    pub async fn request_password_reset(&self, email: &str) -> DomainResult<Option<String>> {
        self.auth.request_password_reset(email).await
    }

    /// A failed sign-in keeps an existing session, unless a 401 on the way
    /// already cleared its credentials from the store.
    async fn settle_failed_sign_in(&self, error: &DomainError) {
        let authenticated = self.state.borrow().is_authenticated();
        if !authenticated {
            self.publish(SessionState::Unauthenticated);
        } else if error.is_unauthorized() {
            if let Err(e) = self.end_session_if_credentials_gone().await {
                warn!("Failed to re-read credentials after 401: {}", e);
            }
        }
    }

    async fn end_session_if_credentials_gone(&self) -> DomainResult<()> {
        let stored = self.store.load_session().await?;
        let authenticated = self.state.borrow().is_authenticated();
        if stored.is_none() && authenticated {
            info!("Stored credentials are gone, ending session");
            self.publish(SessionState::Unauthenticated);
        }
        Ok(())
    }

    fn publish(&self, next: SessionState) {
        let previous = self.state.send_replace(next);
        debug!(
            from = state_name(&previous),
            to = state_name(&self.state.borrow()),
            "Session transition"
        );
    }
}

fn state_name(state: &SessionState) -> &'static str {
    match state {
        SessionState::Unknown => "unknown",
        SessionState::CheckingStorage => "checking_storage",
        SessionState::Authenticated(_) => "authenticated",
        SessionState::Unauthenticated => "unauthenticated",
    }
}
