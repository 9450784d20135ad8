//! Session state published by the session controller.
//!
//! The user lives inside the `Authenticated` variant, so "user set but not
//! authenticated" cannot be represented.

use crate::domain::entities::user::User;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Before the first storage check
    #[default]
    Unknown,
    CheckingStorage,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// True until the initial storage check resolves
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown | SessionState::CheckingStorage)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            user: self.user().cloned(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
        }
    }
}

/// Flat `{ user, is_authenticated, is_loading }` triple for UI bindings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}
