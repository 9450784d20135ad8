//! Authentication service implementation

use std::sync::Arc;

use bk_shared::utils::validation::{mask_email, validators, Validate, ValidationErrors};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthSession, LoginRequest, RegisterRequest};
use crate::errors::DomainResult;
use crate::repositories::CredentialStore;
use crate::services::endpoints;
use crate::services::envelope::{decode, EnvelopeExt};
use crate::services::transport::{ApiTransport, ApiTransportExt};

/// Authentication calls plus their credential side effects
pub struct AuthService<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    transport: Arc<T>,
    store: Arc<S>,
}

impl<T, S> AuthService<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    pub fn new(transport: Arc<T>, store: Arc<S>) -> Self {
        Self { transport, store }
    }

    /// Log in and persist the session on success
    ///
    /// Succeeds only when the server flags success and returns a user.
    pub async fn login(&self, request: &LoginRequest) -> DomainResult<AuthSession> {
        request.validate()?;
        info!(email = %mask_email(&request.email), "Login attempt");

        let body = self.transport.post(endpoints::LOGIN, request).await?;
        let session = self.accept_session(body).await?;

        info!(user_id = session.user.id, role = %session.user.role, "Login succeeded");
        Ok(session)
    }

    /// Register a customer or shop account and persist the session on success
    pub async fn register(&self, request: &RegisterRequest) -> DomainResult<AuthSession> {
        request.validate()?;
        info!(
            email = %mask_email(&request.email),
            role = %request.role,
            "Registration attempt"
        );

        let body = self.transport.post(endpoints::REGISTER, request).await?;
        let session = self.accept_session(body).await?;

        info!(user_id = session.user.id, "Registration succeeded");
        Ok(session)
    }

    /// Fetch the current profile and refresh the cached user
    pub async fn get_profile(&self) -> DomainResult<User> {
        let body = self.transport.get(endpoints::PROFILE).await?;
        let user = decode::<User>(body)?.require_data("profile")?;

        self.store.save_user(&user).await?;
        debug!(user_id = user.id, "Profile refreshed");
        Ok(user)
    }

    /// Ask the server to send a password-reset email. No session side effect.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<Option<String>> {
        let email = email.trim();
        let mut errors = ValidationErrors::new();
        errors.check(validators::is_valid_email(email), "email", "Format email tidak valid");
        errors.into_result()?;

        let body = self
            .transport
            .post(endpoints::RESET_PASSWORD_REQUEST, &json!({ "email": email }))
            .await?;
        let envelope = decode::<serde_json::Value>(body)?.into_result()?;

        info!(email = %mask_email(email), "Password reset requested");
        Ok(envelope.message)
    }

    async fn accept_session(&self, body: serde_json::Value) -> DomainResult<AuthSession> {
        let envelope = decode::<User>(body)?.into_result()?;
        let token = envelope.token.clone();
        let message = envelope.message.clone();
        let user = envelope.require_data("user")?;

        match token.as_deref() {
            Some(token) => self.store.save_token(token).await?,
            None => {
                // a previous account's token must not pair with this user
                warn!(user_id = user.id, "Server issued no token, dropping any stored token");
                self.store.remove_token().await?;
            }
        }
        self.store.save_user(&user).await?;

        Ok(AuthSession { user, token, message })
    }
}
