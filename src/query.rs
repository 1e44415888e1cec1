//! Cache keys and invalidation plumbing for the data-fetching hooks.
//!
//! A deliberately small counterpart to a query-cache library: every cached
//! query is tagged by a hierarchical [`QueryKey`], and mutations invalidate
//! by key prefix. Invalidation bumps an epoch counter; hooks track the epoch
//! reactively and refetch when it moves, and drop in-flight results that
//! resolve under a superseded epoch.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::api::ApiError;

/// Hierarchical cache key. Invalidating a key also invalidates every key
/// it is a prefix of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static [&'static str]);

impl QueryKey {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == *prefix.0
    }
}

/// Auth-scoped cache keys.
pub mod auth_keys {
    use super::QueryKey;

    pub const fn all() -> QueryKey {
        QueryKey::new(&["auth"])
    }

    pub const fn current_user() -> QueryKey {
        QueryKey::new(&["auth", "current-user"])
    }
}

/// Snapshot of one cached query, as consumed by the auth guard.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<ApiError>,
}

impl<T> QueryState<T> {
    /// Query disabled: no data, not loading, not errored.
    pub fn idle() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: false,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::idle()
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::idle()
        }
    }

    pub fn failed(error: ApiError) -> Self {
        Self {
            is_error: true,
            error: Some(error),
            ..Self::idle()
        }
    }
}

/// Shared invalidation registry, provided once at the app root.
#[derive(Clone, Default)]
pub struct QueryClient {
    epochs: ArcRwSignal<HashMap<QueryKey, u64>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the epoch of `key`, re-running every query it is a prefix of.
    pub fn invalidate(&self, key: QueryKey) {
        self.epochs.update(|epochs| {
            *epochs.entry(key).or_insert(0) += 1;
        });
    }

    /// Reactive epoch of `key`: the sum over all invalidated prefixes.
    pub fn version(&self, key: QueryKey) -> u64 {
        self.epochs.with(|epochs| Self::sum_prefixes(epochs, key))
    }

    /// Non-reactive read, used to detect stale in-flight results.
    pub fn version_untracked(&self, key: QueryKey) -> u64 {
        self.epochs
            .with_untracked(|epochs| Self::sum_prefixes(epochs, key))
    }

    fn sum_prefixes(epochs: &HashMap<QueryKey, u64>, key: QueryKey) -> u64 {
        epochs
            .iter()
            .filter(|(invalidated, _)| key.starts_with(invalidated))
            .map(|(_, epoch)| *epoch)
            .sum()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_prefix_matching() {
        assert!(auth_keys::current_user().starts_with(&auth_keys::all()));
        assert!(auth_keys::all().starts_with(&auth_keys::all()));
        assert!(!auth_keys::all().starts_with(&auth_keys::current_user()));
        assert!(!QueryKey::new(&["billing"]).starts_with(&auth_keys::all()));
    }

    #[test]
    fn invalidating_a_key_bumps_its_version() {
        let client = QueryClient::new();
        assert_eq!(client.version_untracked(auth_keys::current_user()), 0);

        client.invalidate(auth_keys::current_user());
        assert_eq!(client.version_untracked(auth_keys::current_user()), 1);
        // the parent scope is not affected by a child invalidation
        assert_eq!(client.version_untracked(auth_keys::all()), 0);
    }

    #[test]
    fn invalidating_a_prefix_bumps_every_key_under_it() {
        let client = QueryClient::new();
        client.invalidate(auth_keys::all());
        assert_eq!(client.version_untracked(auth_keys::all()), 1);
        assert_eq!(client.version_untracked(auth_keys::current_user()), 1);
        assert_eq!(client.version_untracked(QueryKey::new(&["billing"])), 0);
    }

    #[test]
    fn invalidations_outside_a_keys_prefix_chain_leave_its_version_alone() {
        let client = QueryClient::new();
        client.invalidate(QueryKey::new(&["billing"]));
        client.invalidate(QueryKey::new(&["billing", "portal"]));
        assert_eq!(client.version_untracked(auth_keys::current_user()), 0);
        assert_eq!(client.version_untracked(auth_keys::all()), 0);
    }

    #[test]
    fn versions_accumulate_across_scopes() {
        let client = QueryClient::new();
        client.invalidate(auth_keys::current_user());
        client.invalidate(auth_keys::all());
        client.invalidate(auth_keys::current_user());
        assert_eq!(client.version_untracked(auth_keys::current_user()), 3);
        assert_eq!(client.version_untracked(auth_keys::all()), 1);
    }
}
