use dioxus::prelude::*;

use crate::{
    client::{
        api::{auth::get_session, browser::auth_client},
        model::error::ClientError,
    },
    model::auth::{SessionDto, SessionUserDto},
};

#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// Reactive check; components reading it re-render when the session changes.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    /// Asks the authentication provider for the current session.
    pub fn refresh(&self) {
        let mut inner = self.inner;
        spawn(async move {
            let state = match get_session(&auth_client()).await {
                Ok(session) => AuthState::from(session),
                Err(err) => AuthState::Error(err),
            };
            inner.set(state);
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(SessionUserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ClientError),
}

impl From<Option<SessionDto>> for AuthState {
    fn from(session: Option<SessionDto>) -> Self {
        match session {
            Some(session) => AuthState::Authenticated(session.user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Whether the session check has finished, successfully or not
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&SessionUserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
