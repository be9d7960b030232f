//! Authentication
//!
//! The session lives in local storage (`authToken` + `user`) and in an
//! [`AuthContext`] provided at the app root. The router only sees the derived
//! `is_authenticated` signal.

use crate::api::{ApiClient, SessionToken};
use crate::error::ApiError;
use crate::services;
use crate::web::{KeyValueStore, LocalStorage};
use admindash_shared::{Credentials, Session};
use leptos::prelude::*;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

// =========================================================
// Persistence
// =========================================================

pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        match serde_json::to_string(session) {
            Ok(json) => {
                self.store.set(USER_KEY, &json);
            }
            Err(e) => log::warn!("Could not persist user record: {}", e),
        }
    }

    pub fn clear(&self) {
        self.store.delete(TOKEN_KEY);
        self.store.delete(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// `None` when missing or unreadable.
    pub fn current_user(&self) -> Option<Session> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

// =========================================================
// Context
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub is_authenticated: bool,
}

#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    /// Same token the API client sends.
    pub token: SessionToken,
}

impl AuthContext {
    pub fn new(token: SessionToken) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            token,
        }
    }

    /// Injected into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    pub fn user(&self) -> Option<Session> {
        self.state.with(|s| s.user.clone())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Loads a previous session at mount.
pub fn init_auth(ctx: &AuthContext) {
    hydrate(ctx, &SessionStore::new(LocalStorage));
}

pub(crate) fn hydrate<S: KeyValueStore>(ctx: &AuthContext, store: &SessionStore<S>) {
    let token = store.token();
    ctx.token.set(token.clone());
    ctx.state.set(AuthState {
        user: store.current_user(),
        is_authenticated: token.is_some(),
    });
}

pub async fn login(
    ctx: &AuthContext,
    api: &ApiClient,
    credentials: Credentials,
) -> Result<Session, ApiError> {
    login_with(ctx, api, &SessionStore::new(LocalStorage), credentials).await
}

pub(crate) async fn login_with<S: KeyValueStore>(
    ctx: &AuthContext,
    api: &ApiClient,
    store: &SessionStore<S>,
    credentials: Credentials,
) -> Result<Session, ApiError> {
    let username = credentials.username.clone();
    let session = services::auth::login(api, credentials).await.map_err(|e| {
        log::warn!("Login failed for {}: {}", username, e);
        e
    })?;

    store.save(&session);
    ctx.token.set(Some(session.token.clone()));
    ctx.state.set(AuthState {
        user: Some(session.clone()),
        is_authenticated: true,
    });
    log::info!("Signed in as {}", session.username);
    Ok(session)
}

/// The router's auth watcher does the redirect.
pub fn logout(ctx: &AuthContext) {
    logout_with(ctx, &SessionStore::new(LocalStorage));
}

pub(crate) fn logout_with<S: KeyValueStore>(ctx: &AuthContext, store: &SessionStore<S>) {
    store.clear();
    ctx.token.set(None);
    ctx.state.set(AuthState::default());
    log::info!("Signed out");
}
