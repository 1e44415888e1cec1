//! Sign-up page and registration form.
//!
//! Validation failures here surface as toasts, matching the sign-up flow's
//! notification style rather than the login form's inline errors.

use leptos::prelude::*;

use crate::api::signup_error_message;
use crate::components::toast::use_toasts;
use crate::hooks::use_signup;
use crate::validate::validate_signup;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const INPUT_CLASS: &str = "h-11 px-3 text-sm rounded-md border border-gray-200 hover:border-gray-300 focus:border-[#E60023] focus:ring-0 focus:outline-none bg-white";

#[component]
pub fn RegisterForm() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let signup = use_signup();
    let is_pending = signup.is_pending();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = validate_signup(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &password.get(),
        ) {
            toasts.error(message);
            return;
        }

        signup.dispatch(
            first_name.get(),
            last_name.get(),
            email.get(),
            password.get(),
            move |result| match result {
                Ok(res) => {
                    toasts.success(
                        res.message
                            .unwrap_or_else(|| "Account created successfully!".to_string()),
                    );
                    router.navigate(AppRoute::Home);
                }
                Err(err) => toasts.error(signup_error_message(&err)),
            },
        );
    };

    view! {
        <form class="flex flex-col gap-8" on:submit=on_submit>
            <div class="flex flex-col items-center gap-4 text-center">
                <span class="text-2xl font-bold text-[#E60023]">"Pinboard"</span>
                <p class="text-gray-600 text-xs max-w-sm">
                    "Create your Pinboard account to start discovering ideas"
                </p>
            </div>
            <div class="grid gap-6">
                <div class="grid gap-3">
                    <label for="firstName" class="text-gray-700 font-medium text-sm">
                        "First Name"
                    </label>
                    <input
                        id="firstName"
                        type="text"
                        placeholder="Your first name"
                        prop:value=first_name
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        class=INPUT_CLASS
                        required
                    />
                </div>
                <div class="grid gap-3">
                    <label for="lastName" class="text-gray-700 font-medium text-sm">
                        "Last Name"
                    </label>
                    <input
                        id="lastName"
                        type="text"
                        placeholder="Your last name"
                        prop:value=last_name
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        class=INPUT_CLASS
                        required
                    />
                </div>
                <div class="grid gap-3">
                    <label for="email" class="text-gray-700 font-medium text-sm">
                        "Email address"
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class=INPUT_CLASS
                        required
                    />
                </div>
                <div class="grid gap-3">
                    <label for="password" class="text-gray-700 font-medium text-sm">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class=INPUT_CLASS
                        required
                    />
                </div>
                <button
                    type="submit"
                    class="w-full h-11 bg-[#E60023] hover:bg-[#d50520] text-white font-medium text-sm rounded-md cursor-pointer disabled:opacity-70"
                    disabled=move || is_pending.get()
                >
                    {move || if is_pending.get() { "Registering..." } else { "Register" }}
                </button>
                <div class="text-center">
                    <span class="text-gray-600 text-xs">"Already have an account? "</span>
                    <a
                        class="text-[#E60023] hover:text-[#d50520] font-medium text-xs cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::SignIn)
                    >
                        "Sign in"
                    </a>
                </div>
            </div>
        </form>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full overflow-hidden flex items-center justify-center relative bg-gray-50">
            <div class="w-full max-w-md p-6 relative z-20">
                <div class="bg-white/80 backdrop-blur-xl rounded-2xl border border-gray-200 p-8 relative overflow-hidden">
                    <RegisterForm />
                </div>
            </div>
        </div>
    }
}
