//! Session lifecycle
//!
//! Authentication is mocked on purpose: login and registration fabricate
//! a user with a random id and a token that is never validated. The
//! session object is the only holder of the current user; it is created
//! by [`Session::login`]/[`Session::register`] and consumed by
//! [`Session::logout`]. Nothing here keeps ambient global state.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::models::User;
use crate::storage::{keys, KeyValueStore};

/// Validation failures reported inline during login/registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both username and password")]
    MissingCredentials,
    #[error("All fields are required")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// One authenticated user plus the persistence handle scoped to them
pub struct Session {
    user: User,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("user", &self.user).finish()
    }
}

impl Session {
    /// Mock login: both fields required, then a user is fabricated
    ///
    /// The password is checked for presence only; nothing verifies it.
    pub fn login(
        store: Arc<dyn KeyValueStore>,
        username: &str,
        password: &str,
    ) -> Result<Self, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self::start(store, username))
    }

    /// Mock registration: all fields required and passwords must match
    pub fn register(
        store: Arc<dyn KeyValueStore>,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, AuthError> {
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(Self::start(store, username))
    }

    /// Restore the saved session, if any
    ///
    /// A malformed saved payload is treated as no session.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Option<Self> {
        let payload = match store.get(keys::SESSION_USER) {
            Ok(payload) => payload?,
            Err(err) => {
                warn!(%err, "could not read saved session");
                return None;
            }
        };
        match serde_json::from_str::<User>(&payload) {
            Ok(user) => Some(Self { user, store }),
            Err(err) => {
                warn!(%err, "saved session is malformed, ignoring");
                None
            }
        }
    }

    /// Tear the session down, clearing the saved user
    ///
    /// Task collections stay in storage; only the session key is removed.
    pub fn logout(self) {
        if let Err(err) = self.store.remove(keys::SESSION_USER) {
            warn!(%err, "could not clear saved session");
        }
    }

    fn start(store: Arc<dyn KeyValueStore>, username: &str) -> Self {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            token: format!("fake-jwt-token-{}", Utc::now().timestamp_millis()),
        };
        match serde_json::to_string(&user) {
            Ok(payload) => {
                // Saving the session is best-effort, same as every other
                // storage mirror write.
                if let Err(err) = store.set(keys::SESSION_USER, &payload) {
                    warn!(%err, "could not save session");
                }
            }
            Err(err) => warn!(%err, "could not serialize session user"),
        }
        Self { user, store }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }
}
