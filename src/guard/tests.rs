use super::*;
use crate::api::ApiError;
use crate::web::route::AppRoute;

// =========================================================
// Helpers
// =========================================================

fn user() -> User {
    User {
        id: "u-1".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
    }
}

fn loading() -> QueryState<User> {
    QueryState::loading()
}

/// Fetch settled successfully with a user.
fn settled_user() -> QueryState<User> {
    QueryState::ready(user())
}

/// Fetch settled with no user and no error.
fn settled_none() -> QueryState<User> {
    QueryState::idle()
}

fn failed() -> QueryState<User> {
    QueryState::failed(ApiError::Http {
        status: 401,
        message: None,
    })
}

fn eval(route: &AppRoute, query: &QueryState<User>, current: GuardState) -> (GuardState, GuardEffect) {
    evaluate(
        route.class(),
        route.redirects_when_authenticated(),
        query,
        current,
    )
}

fn render(route: &AppRoute, query: &QueryState<User>, state: GuardState) -> RenderDecision {
    render_decision(route.class(), query, state)
}

const PRIVATE_ROUTES: [AppRoute; 3] = [AppRoute::Home, AppRoute::Profile, AppRoute::NotFound];
const PUBLIC_ROUTES: [AppRoute; 2] = [AppRoute::SignIn, AppRoute::SignUp];

// =========================================================
// Private routes
// =========================================================

#[test]
fn private_routes_block_behind_the_loader_while_fetching() {
    for route in &PRIVATE_ROUTES {
        let (state, effect) = eval(route, &loading(), GuardState::Unknown);
        assert_eq!(state, GuardState::Unknown);
        assert_eq!(effect, GuardEffect::None);
        assert_eq!(render(route, &loading(), state), RenderDecision::Loader);
    }
}

#[test]
fn private_routes_show_the_loader_even_after_authentication_while_refetching() {
    // a cache invalidation re-runs the fetch; the settled state re-blocks
    for route in &PRIVATE_ROUTES {
        let (state, effect) = eval(route, &loading(), GuardState::Authenticated);
        assert_eq!(state, GuardState::Authenticated);
        assert_eq!(effect, GuardEffect::None);
        assert_eq!(render(route, &loading(), state), RenderDecision::Loader);
    }
}

#[test]
fn fetch_error_on_private_route_clears_and_redirects() {
    for route in &PRIVATE_ROUTES {
        for current in [
            GuardState::Unknown,
            GuardState::Authenticated,
            GuardState::Unauthenticated,
        ] {
            let (state, effect) = eval(route, &failed(), current);
            assert_eq!(state, GuardState::Unauthenticated);
            assert_eq!(effect, GuardEffect::ClearAndRedirectSignIn);
            assert_eq!(render(route, &failed(), state), RenderDecision::Nothing);
        }
    }
}

#[test]
fn settled_fetch_without_a_user_clears_and_redirects() {
    for route in &PRIVATE_ROUTES {
        let (state, effect) = eval(route, &settled_none(), GuardState::Unknown);
        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(effect, GuardEffect::ClearAndRedirectSignIn);
        assert_eq!(render(route, &settled_none(), state), RenderDecision::Nothing);
    }
}

#[test]
fn settled_user_authenticates_a_private_route() {
    for route in &PRIVATE_ROUTES {
        let (state, effect) = eval(route, &settled_user(), GuardState::Unknown);
        assert_eq!(state, GuardState::Authenticated);
        assert_eq!(effect, GuardEffect::None);
        assert_eq!(render(route, &settled_user(), state), RenderDecision::Children);
    }
}

#[test]
fn an_already_authenticated_state_is_held_without_a_second_transition() {
    let (state, effect) = eval(&AppRoute::Home, &settled_user(), GuardState::Authenticated);
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(effect, GuardEffect::None);
}

// =========================================================
// Public auth routes
// =========================================================

#[test]
fn public_routes_always_allow_render() {
    for route in &PUBLIC_ROUTES {
        for query in [loading(), settled_none(), failed()] {
            let (state, effect) = eval(route, &query, GuardState::Unknown);
            assert_eq!(state, GuardState::Authenticated);
            assert_eq!(effect, GuardEffect::None);
            assert_eq!(render(route, &query, state), RenderDecision::Children);
        }
    }
}

#[test]
fn a_settled_user_is_redirected_away_from_auth_pages() {
    for route in &PUBLIC_ROUTES {
        let (state, effect) = eval(route, &settled_user(), GuardState::Unknown);
        assert_eq!(state, GuardState::Authenticated);
        assert_eq!(effect, GuardEffect::RedirectHome);
    }
}

#[test]
fn a_loading_fetch_does_not_redirect_away_from_auth_pages() {
    let (_, effect) = eval(&AppRoute::SignIn, &loading(), GuardState::Unknown);
    assert_eq!(effect, GuardEffect::None);
}

// =========================================================
// Idempotence
// =========================================================

#[test]
fn evaluation_is_idempotent_for_identical_inputs() {
    let cases = [
        (AppRoute::Home, loading(), GuardState::Unknown),
        (AppRoute::Home, failed(), GuardState::Unknown),
        (AppRoute::Home, settled_user(), GuardState::Authenticated),
        (AppRoute::SignIn, settled_user(), GuardState::Authenticated),
        (AppRoute::SignUp, settled_none(), GuardState::Authenticated),
    ];
    for (route, query, current) in &cases {
        let first = eval(route, query, *current);
        let again = eval(route, query, first.0);
        let third = eval(route, query, again.0);
        assert_eq!(again, third, "{route} must settle after one transition");
    }
}

// =========================================================
// End-to-end transition sequences
// =========================================================

#[test]
fn unauthenticated_visit_to_home_redirects_to_sign_in() {
    let route = AppRoute::Home;

    // fetch in flight: nothing but the loader
    let (state, effect) = eval(&route, &loading(), GuardState::Unknown);
    assert_eq!(effect, GuardEffect::None);
    assert_eq!(render(&route, &loading(), state), RenderDecision::Loader);

    // fetch resolves with an error: session cleared, redirect issued
    let (state, effect) = eval(&route, &failed(), state);
    assert_eq!(state, GuardState::Unauthenticated);
    assert_eq!(effect, GuardEffect::ClearAndRedirectSignIn);

    // after the redirect the sign-in page renders immediately
    let (state, effect) = eval(&AppRoute::SignIn, &failed(), state);
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(effect, GuardEffect::None);
    assert_eq!(
        render(&AppRoute::SignIn, &failed(), state),
        RenderDecision::Children
    );
}

#[test]
fn authenticated_visit_to_sign_in_bounces_home() {
    let (state, effect) = eval(&AppRoute::SignIn, &settled_user(), GuardState::Unknown);
    assert_eq!(effect, GuardEffect::RedirectHome);

    let (state, effect) = eval(&AppRoute::Home, &settled_user(), state);
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(effect, GuardEffect::None);
    assert_eq!(
        render(&AppRoute::Home, &settled_user(), state),
        RenderDecision::Children
    );
}

#[test]
fn successful_login_settles_into_an_authenticated_home() {
    // on the sign-in page the anonymous fetch has settled empty
    let (state, effect) = eval(&AppRoute::SignIn, &settled_none(), GuardState::Unknown);
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(effect, GuardEffect::None);

    // login succeeds, the current-user key is invalidated and the form
    // navigates home while the refetch is in flight
    let (state, effect) = eval(&AppRoute::Home, &loading(), state);
    assert_eq!(effect, GuardEffect::None);
    assert_eq!(render(&AppRoute::Home, &loading(), state), RenderDecision::Loader);

    // refetch resolves with the fresh user
    let (state, effect) = eval(&AppRoute::Home, &settled_user(), state);
    assert_eq!(state, GuardState::Authenticated);
    assert_eq!(effect, GuardEffect::None);
    assert_eq!(
        render(&AppRoute::Home, &settled_user(), state),
        RenderDecision::Children
    );
}
