//! Global backend-outage banner.

use leptos::prelude::*;

use crate::store::use_server_status;

/// Persistent bottom banner, bound to the server-status store. Shown while
/// the outage flag is set; the next successful request hides it again.
#[component]
pub fn ServerErrorBanner() -> impl IntoView {
    let server_status = use_server_status();
    let is_down = server_status.is_server_down();

    view! {
        <Show when=move || is_down.get()>
            <div class="fixed bottom-0 z-[60] flex w-full items-center justify-center gap-3 bg-red-400/70 backdrop-blur-xl py-1 px-4 text-center text-white shadow-lg border-t border-red-300">
                <svg
                    class="size-4 shrink-0"
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <circle cx="12" cy="12" r="10" />
                    <line x1="12" x2="12" y1="8" y2="12" />
                    <line x1="12" x2="12.01" y1="16" y2="16" />
                </svg>
                <span class="font-medium drop-shadow">
                    "Backend server is currently down. Please try again later."
                </span>
            </div>
        </Show>
    }
}
