//! Auth query and mutation hooks.
//!
//! Built on [`crate::query`] and [`crate::api`]: queries refetch when their
//! cache key is invalidated, mutations invalidate on success. All of it runs
//! on the single UI thread via `spawn_local`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, AuthApi, use_auth_api};
use crate::query::{QueryClient, QueryState, auth_keys, use_query_client};
use crate::types::{LoginResponse, MessageResponse, User};

/// Cached "current user" query.
///
/// Keyed by [`auth_keys::current_user`], retries disabled: one request per
/// epoch, and any failure stands until the key is invalidated. A result
/// resolving after its epoch was superseded is dropped.
pub fn use_get_me(enabled: Signal<bool>) -> ReadSignal<QueryState<User>> {
    let api = use_auth_api();
    let client = use_query_client();
    let (state, set_state) = signal(QueryState::loading());

    // memoized so only a change to this key's own version refires the
    // fetch, not every invalidation in the registry
    let version = {
        let client = client.clone();
        Memo::new(move |_| client.version(auth_keys::current_user()))
    };

    Effect::new(move |_| {
        let epoch = version.get();
        if !enabled.get() {
            set_state.set(QueryState::idle());
            return;
        }
        set_state.set(QueryState::loading());

        let api = api.clone();
        let client = client.clone();
        spawn_local(async move {
            let result = api.get_me().await;
            if client.version_untracked(auth_keys::current_user()) != epoch {
                // superseded while in flight
                return;
            }
            match result {
                Ok(user) => set_state.set(QueryState::ready(user)),
                Err(err) => set_state.set(QueryState::failed(err)),
            }
        });
    });

    state
}

/// Login mutation. Invalidates the current-user query on success so the
/// guard re-evaluates with fresh data.
#[derive(Clone)]
pub struct LoginMutation {
    api: AuthApi,
    client: QueryClient,
    is_pending: ReadSignal<bool>,
    set_pending: WriteSignal<bool>,
}

impl LoginMutation {
    pub fn is_pending(&self) -> ReadSignal<bool> {
        self.is_pending
    }

    pub fn dispatch(
        &self,
        email: String,
        password: String,
        on_settled: impl FnOnce(Result<LoginResponse, ApiError>) + 'static,
    ) {
        let api = self.api.clone();
        let client = self.client.clone();
        let set_pending = self.set_pending;
        set_pending.set(true);
        spawn_local(async move {
            let result = api.login(&email, &password).await;
            if result.is_ok() {
                client.invalidate(auth_keys::current_user());
            }
            set_pending.set(false);
            on_settled(result);
        });
    }
}

pub fn use_login() -> LoginMutation {
    let (is_pending, set_pending) = signal(false);
    LoginMutation {
        api: use_auth_api(),
        client: use_query_client(),
        is_pending,
        set_pending,
    }
}

/// Signup mutation; same invalidation rule as login.
#[derive(Clone)]
pub struct SignupMutation {
    api: AuthApi,
    client: QueryClient,
    is_pending: ReadSignal<bool>,
    set_pending: WriteSignal<bool>,
}

impl SignupMutation {
    pub fn is_pending(&self) -> ReadSignal<bool> {
        self.is_pending
    }

    pub fn dispatch(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        on_settled: impl FnOnce(Result<MessageResponse, ApiError>) + 'static,
    ) {
        let api = self.api.clone();
        let client = self.client.clone();
        let set_pending = self.set_pending;
        set_pending.set(true);
        spawn_local(async move {
            let result = api
                .signup(&first_name, &last_name, &email, &password)
                .await;
            if result.is_ok() {
                client.invalidate(auth_keys::current_user());
            }
            set_pending.set(false);
            on_settled(result);
        });
    }
}

pub fn use_signup() -> SignupMutation {
    let (is_pending, set_pending) = signal(false);
    SignupMutation {
        api: use_auth_api(),
        client: use_query_client(),
        is_pending,
        set_pending,
    }
}

/// Logout mutation. Best-effort: the callback runs either way, and success
/// invalidates every auth-scoped cache entry.
#[derive(Clone)]
pub struct LogoutMutation {
    api: AuthApi,
    client: QueryClient,
}

impl LogoutMutation {
    pub fn dispatch(&self, on_settled: impl FnOnce(Result<MessageResponse, ApiError>) + 'static) {
        let api = self.api.clone();
        let client = self.client.clone();
        spawn_local(async move {
            let result = api.logout().await;
            if result.is_ok() {
                client.invalidate(auth_keys::all());
            }
            on_settled(result);
        });
    }
}

pub fn use_logout() -> LogoutMutation {
    LogoutMutation {
        api: use_auth_api(),
        client: use_query_client(),
    }
}
