//! Sign-in page and login form.

use leptos::prelude::*;

use crate::api::login_error_message;
use crate::components::toast::use_toasts;
use crate::hooks::use_login;
use crate::validate::{LoginField, validate_login};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Default, PartialEq)]
struct LoginErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

const INPUT_CLASS: &str = "h-11 px-3 text-sm rounded-md border border-gray-200 hover:border-gray-300 focus:border-[#E60023] focus:ring-0 focus:outline-none bg-white";
const INPUT_ERROR_CLASS: &str = "h-11 px-3 text-sm rounded-md border border-[#E60023] focus:border-[#E60023] focus:ring-0 focus:outline-none bg-white";

#[component]
pub fn LoginForm() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let login = use_login();
    let is_pending = login.is_pending();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(LoginErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_errors.set(LoginErrors::default());

        if let Err((field, message)) = validate_login(&email.get(), &password.get()) {
            set_errors.update(|errors| match field {
                LoginField::Email => errors.email = Some(message),
                LoginField::Password => errors.password = Some(message),
            });
            return;
        }

        login.dispatch(email.get(), password.get(), move |result| match result {
            Ok(res) => {
                toasts.success(res.message.unwrap_or_else(|| "Login successful".to_string()));
                router.navigate(AppRoute::Home);
            }
            Err(err) => toasts.error(login_error_message(&err)),
        });
    };

    let on_forgot_password = move |_| toasts.info("This feature is Coming Soon");

    view! {
        <form class="flex flex-col gap-8" on:submit=on_submit>
            <div class="flex flex-col items-center gap-4 text-center">
                <span class="text-2xl font-bold text-[#E60023]">"Pinboard"</span>
                <p class="text-gray-600 text-xs max-w-sm">
                    "Sign in to your Pinboard account to continue discovering ideas"
                </p>
            </div>
            <div class="grid gap-6">
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
                        class=move || {
                            if errors.get().email.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS }
                        }
                        required
                    />
                </div>
                <div class="grid gap-3">
                    <div class="flex items-center justify-between">
                        <label for="password" class="text-gray-700 font-medium text-sm">
                            "Password"
                        </label>
                        <button
                            type="button"
                            class="text-[#E60023] hover:text-[#d50520] font-medium text-xs bg-transparent border-none p-0 cursor-pointer"
                            on:click=on_forgot_password
                        >
                            "Forgot password?"
                        </button>
                    </div>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class=move || {
                            if errors.get().password.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS }
                        }
                        required
                    />
                </div>
                <Show when=move || errors.get() != LoginErrors::default()>
                    <div class="flex items-start gap-2 rounded-md bg-red-50 border border-red-200 p-3">
                        <div class="text-xs">
                            <Show when=move || errors.get().email.is_some()>
                                <p class="font-medium text-[#E60023] mb-1">
                                    {move || errors.get().email}
                                </p>
                            </Show>
                            <Show when=move || errors.get().password.is_some()>
                                <p class="font-medium text-[#E60023]">
                                    {move || errors.get().password}
                                </p>
                            </Show>
                        </div>
                    </div>
                </Show>
                <button
                    type="submit"
                    class="w-full h-11 bg-[#E60023] hover:bg-[#d50520] text-white font-medium text-sm rounded-md cursor-pointer disabled:opacity-70"
                    disabled=move || is_pending.get()
                >
                    {move || if is_pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
            <div class="text-center">
                <span class="text-gray-600 text-xs">"Don't have an account? "</span>
                <a
                    class="text-[#E60023] hover:text-[#d50520] font-medium text-xs cursor-pointer"
                    on:click=move |_| router.navigate(AppRoute::SignUp)
                >
                    "Sign up for free"
                </a>
            </div>
        </form>
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full overflow-hidden flex items-center justify-center relative bg-gray-50">
            <div class="w-full max-w-md p-6 relative z-20">
                <div class="bg-white/80 backdrop-blur-xl rounded-2xl border border-gray-200 p-8 relative overflow-hidden">
                    <LoginForm />
                </div>
            </div>
        </div>
    }
}
