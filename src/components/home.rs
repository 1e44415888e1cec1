//! Home feed page.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <Header />
            <main class="pt-16">
                <section class="mx-auto max-w-5xl px-4 py-10">
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">"Home Feed"</h1>
                    <p class="text-gray-500 text-sm">
                        "Discover new pins and ideas. Fresh content lands here."
                    </p>
                </section>
            </main>
        </div>
    }
}
