//! Pinboard frontend application.
//!
//! Context-driven layering, leaf-first:
//! - `web::route` / `web::router`: route domain model + history engine
//! - `api`: HTTP client wrapper and auth endpoints
//! - `store`: session and server-status stores
//! - `query` / `hooks`: cached queries and mutations
//! - `guard`: session-guarded navigation
//! - `components`: UI layer

mod api;
mod guard;
mod hooks;
mod query;
mod store;
mod types;
mod validate;

mod components {
    pub mod header;
    pub mod home;
    pub mod loader;
    pub mod profile;
    pub mod server_error_banner;
    pub mod sign_in;
    pub mod sign_up;
    pub mod toast;
}

pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::api::{ApiClient, AuthApi};
use crate::components::home::HomePage;
use crate::components::profile::ProfilePage;
use crate::components::server_error_banner::ServerErrorBanner;
use crate::components::sign_in::SignInPage;
use crate::components::sign_up::SignUpPage;
use crate::components::toast::{Toaster, provide_toasts};
use crate::guard::AuthGuard;
use crate::query::QueryClient;
use crate::store::{ServerStatusStore, SessionStore};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => {
            let router = use_router();
            view! {
                <div class="min-h-screen bg-white flex items-center justify-center px-4">
                    <div class="text-center mx-auto">
                        <h1 class="text-2xl font-bold text-gray-900 mb-4">
                            "Hmm... we can't find that page"
                        </h1>
                        <p class="text-gray-500 text-sm mb-8">
                            "The page you're looking for doesn't exist"
                        </p>
                        <button
                            class="w-full h-11 bg-[#E60023] hover:bg-[#d50520] text-white font-medium text-sm rounded-md cursor-pointer"
                            on:click=move |_| router.navigate(AppRoute::Home)
                        >
                            "Go to Home"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Singleton stores and clients, provided once and shared via Context.
    let server_status = ServerStatusStore::new();
    provide_context(server_status);
    let session = SessionStore::new();
    provide_context(session);
    provide_context(AuthApi::new(ApiClient::new(server_status)));
    provide_context(QueryClient::new());
    provide_toasts();

    view! {
        <ServerErrorBanner />
        <Router>
            <AuthGuard>
                <RouterOutlet matcher=route_matcher />
            </AuthGuard>
            <Toaster />
        </Router>
    }
}
