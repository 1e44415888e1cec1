//! Profile page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::store::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let user = session.user();

    // The session store's user stays empty until something writes it; the
    // guard intentionally never does, so the fallback is the common case
    // today.
    let display_name = move || {
        user.get()
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .unwrap_or_else(|| "Your profile".to_string())
    };
    let email = move || user.get().map(|u| u.email);

    view! {
        <div class="min-h-screen bg-white">
            <Header />
            <main class="pt-16">
                <section class="mx-auto max-w-xl px-4 py-10">
                    <div class="rounded-2xl border border-gray-200 p-8">
                        <h1 class="text-2xl font-bold text-gray-900 mb-2">{display_name}</h1>
                        <Show when=move || email().is_some()>
                            <p class="text-gray-500 text-sm">{email}</p>
                        </Show>
                        <p class="text-gray-500 text-sm mt-4">"View and edit your profile."</p>
                    </div>
                </section>
            </main>
        </div>
    }
}
