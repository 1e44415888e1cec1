//! Fixed app header with the dropdown menu.

use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::hooks::use_logout;
use crate::store::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let session = use_session();
    let logout = use_logout();
    let toasts = use_toasts();
    let (is_menu_open, set_menu_open) = signal(false);

    let on_sign_out = move |_| {
        set_menu_open.set(false);
        // best-effort server-side logout; the session is torn down either way
        logout.dispatch(move |result| {
            if let Err(err) = result {
                toasts.error(format!("Sign out failed on the server: {}", err));
            }
            session.logout();
        });
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 w-full bg-white/80 backdrop-blur-xl border-b border-gray-200 text-sm py-2.5">
            <nav class="mx-auto w-full px-4 sm:px-6 lg:px-8 flex basis-full items-center justify-between">
                <div class="me-5">
                    <button
                        class="flex-none rounded-md text-xl inline-block font-semibold text-[#E60023] cursor-pointer hover:opacity-80"
                        on:click=move |_| router.navigate(AppRoute::Home)
                        aria-label="Pinboard"
                    >
                        "Pinboard"
                    </button>
                </div>
                <div class="relative">
                    <button
                        class="size-9 inline-flex justify-center items-center rounded-full cursor-pointer hover:bg-gray-100"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg
                            class="size-4"
                            xmlns="http://www.w3.org/2000/svg"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <line x1="3" x2="21" y1="6" y2="6" />
                            <line x1="3" x2="21" y1="12" y2="12" />
                            <line x1="3" x2="21" y1="18" y2="18" />
                        </svg>
                    </button>

                    <Show when=move || is_menu_open.get()>
                        <div class="fixed top-16 right-4 bg-white backdrop-blur-xl border border-gray-200 rounded-2xl shadow-lg z-[60]">
                            <div class="p-4 sm:p-6 space-y-3 sm:space-y-4">
                                <a
                                    class="p-2 sm:p-3 flex items-start gap-3 text-sm text-gray-800 hover:bg-gray-100 rounded-lg cursor-pointer"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        router.navigate(AppRoute::Home);
                                    }
                                >
                                    <div class="min-w-0">
                                        <p class="font-medium text-gray-800">"Home Feed"</p>
                                        <p class="text-xs text-gray-500 mt-1 hidden sm:block">
                                            "Discover new pins and ideas"
                                        </p>
                                    </div>
                                </a>
                                <a
                                    class="p-2 sm:p-3 flex items-start gap-3 text-sm text-gray-800 hover:bg-gray-100 rounded-lg cursor-pointer"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        router.navigate(AppRoute::Profile);
                                    }
                                >
                                    <div class="min-w-0">
                                        <p class="font-medium text-gray-800">"Profile"</p>
                                        <p class="text-xs text-gray-500 mt-1 hidden sm:block">
                                            "View and edit your profile"
                                        </p>
                                    </div>
                                </a>
                                <button
                                    class="p-2 sm:p-3 flex items-start gap-3 text-gray-700 hover:bg-gray-50 rounded-lg cursor-pointer w-full text-left"
                                    on:click=on_sign_out.clone()
                                >
                                    <div class="min-w-0">
                                        <p class="font-medium text-gray-800">"Sign out"</p>
                                        <p class="text-xs text-gray-500 mt-1 hidden sm:block">
                                            "Sign out of your account"
                                        </p>
                                    </div>
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
