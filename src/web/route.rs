//! Route definitions - domain model.
//!
//! Pure business layer with no DOM or web_sys dependency: the application's
//! routes, their paths, and their access classification.

use std::fmt::Display;

/// Every route is exactly one of these: an auth page anyone may see, or a
/// route that requires an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    PublicAuth,
    Private,
}

/// Application routes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Sign-in page (public).
    SignIn,
    /// Sign-up page (public).
    SignUp,
    /// Home feed (default route, requires auth).
    #[default]
    Home,
    /// Profile page (requires auth).
    Profile,
    /// Page not found.
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/auth/sign-in" => Self::SignIn,
            "/auth/sign-up" => Self::SignUp,
            "/" | "/home" => Self::Home,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::SignIn => "/auth/sign-in",
            Self::SignUp => "/auth/sign-up",
            Self::Home => "/home",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Static, exhaustive classification: only the two auth pages are
    /// public, everything else requires authentication.
    pub fn class(&self) -> RouteClass {
        match self {
            Self::SignIn | Self::SignUp => RouteClass::PublicAuth,
            Self::Home | Self::Profile | Self::NotFound => RouteClass::Private,
        }
    }

    /// Whether an already-authenticated user should be sent away from this
    /// route (the auth pages redirect to home).
    pub fn redirects_when_authenticated(&self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 5] = [
        AppRoute::SignIn,
        AppRoute::SignUp,
        AppRoute::Home,
        AppRoute::Profile,
        AppRoute::NotFound,
    ];

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::SignIn,
            AppRoute::SignUp,
            AppRoute::Home,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn root_and_unknown_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/does-not-exist"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/auth"), AppRoute::NotFound);
    }

    #[test]
    fn only_auth_pages_are_public() {
        for route in ALL {
            let expected = matches!(route, AppRoute::SignIn | AppRoute::SignUp);
            assert_eq!(route.class() == RouteClass::PublicAuth, expected);
            assert_eq!(route.redirects_when_authenticated(), expected);
        }
    }
}
