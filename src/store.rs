//! Process-wide state stores.
//!
//! Two independent signal-backed stores, provided once at the app root and
//! shared through Context instead of ambient globals:
//! - [`SessionStore`]: the authenticated user, persisted across sessions.
//! - [`ServerStatusStore`]: transient "is the backend down" flag, mutated
//!   exclusively by the HTTP response interceptor.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::User;
use crate::web::route::AppRoute;

const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Persisted subset of the session: only the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    user: Option<User>,
}

/// Session store: single-writer, synchronous mutation, readers observe
/// the latest value by signal subscription.
#[derive(Clone, Copy)]
pub struct SessionStore {
    user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
}

impl SessionStore {
    /// Creates the store, restoring the persisted user if one exists.
    pub fn new() -> Self {
        let restored = LocalStorage::get::<PersistedSession>(AUTH_STORAGE_KEY)
            .ok()
            .and_then(|session| session.user);
        let (user, set_user) = signal(restored);
        Self { user, set_user }
    }

    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user
    }

    // Wired into the store's surface but not called anywhere today: the
    // guard clears the session on failure yet intentionally never writes the
    // fetched user back on success.
    #[allow(dead_code)]
    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(_) => {
                let _ = LocalStorage::set(AUTH_STORAGE_KEY, PersistedSession { user: user.clone() });
            }
            None => LocalStorage::delete(AUTH_STORAGE_KEY),
        }
        self.set_user.set(user);
    }

    /// Clears the session. Idempotent.
    pub fn clear_auth(&self) {
        LocalStorage::delete(AUTH_STORAGE_KEY);
        if self.user.get_untracked().is_some() {
            self.set_user.set(None);
        }
    }

    /// Clears the session and forces a hard navigation to the sign-in page.
    pub fn logout(&self) {
        self.clear_auth();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(AppRoute::SignIn.to_path());
        }
    }
}

/// Next value of the server-down flag after observing a response status.
///
/// Any 5xx flips the flag on; the next 2xx flips it off; every other
/// status (401, 404, ...) leaves it unchanged.
pub fn server_down_transition(current: bool, status: u16) -> bool {
    if status >= 500 {
        true
    } else if (200..300).contains(&status) {
        false
    } else {
        current
    }
}

/// Transient backend-outage flag. Single source of truth for the global
/// outage banner; never persisted, resets on reload.
#[derive(Clone, Copy)]
pub struct ServerStatusStore {
    is_down: ReadSignal<bool>,
    set_down: WriteSignal<bool>,
}

impl ServerStatusStore {
    pub fn new() -> Self {
        let (is_down, set_down) = signal(false);
        Self { is_down, set_down }
    }

    pub fn is_server_down(&self) -> ReadSignal<bool> {
        self.is_down
    }

    pub fn set_server_down(&self, down: bool) {
        if self.is_down.get_untracked() != down {
            self.set_down.set(down);
        }
    }

    /// Applies [`server_down_transition`] for one observed response status.
    /// Only the HTTP interceptor calls this.
    pub fn observe_status(&self, status: u16) {
        let next = server_down_transition(self.is_down.get_untracked(), status);
        self.set_server_down(next);
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore should be provided")
}

pub fn use_server_status() -> ServerStatusStore {
    use_context::<ServerStatusStore>().expect("ServerStatusStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_5xx_sets_the_flag() {
        assert!(server_down_transition(false, 500));
        assert!(server_down_transition(false, 503));
        assert!(server_down_transition(true, 500));
    }

    #[test]
    fn a_2xx_clears_the_flag() {
        assert!(!server_down_transition(true, 200));
        assert!(!server_down_transition(true, 204));
        assert!(!server_down_transition(false, 200));
    }

    #[test]
    fn other_statuses_leave_the_flag_unchanged() {
        for status in [301, 400, 401, 403, 404, 409] {
            assert!(server_down_transition(true, status));
            assert!(!server_down_transition(false, status));
        }
    }
}
