//! Loading indicators.

use leptos::prelude::*;

/// Inline spinner.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="w-8 h-8 border-4 border-[#E60023] border-t-transparent rounded-full animate-spin mx-auto"></div>
    }
}

/// Blocking full-screen loader shown while the auth guard is undecided.
#[component]
pub fn FullScreenLoader() -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center">
            <div class="text-center">
                <Loader />
                <p class="text-gray-600 mt-4">"Authenticating..."</p>
            </div>
        </div>
    }
}
