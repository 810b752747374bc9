use log::debug;
use shared::display::Tone;
use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::notice::Notice;
use crate::config::ConfigContext;

const INPUT: &str = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500 focus:border-transparent";

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let config = use_context::<ConfigContext>().expect("Config context not found");

    let email = use_state(|| config.demo_account.email.clone());
    let password = use_state(|| config.demo_account.password.clone());
    let show_password = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let form_error = form_error.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest::new((*email).clone(), (*password).clone());
            match request.validate_fields() {
                Ok(()) => {
                    form_error.set(None);
                    login.emit(request);
                }
                Err(err) => {
                    debug!("Login form rejected: {}", err);
                    form_error.set(Some(err.to_string()));
                }
            }
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let loading = auth.state.loading;
    let error = (*form_error).clone().or_else(|| auth.state.error.clone());

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 dark:from-gray-900 dark:to-gray-800 px-4">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{config.app_name.clone()}</h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Sign in to your analytics dashboard"}</p>
                </div>
                <form class="bg-white dark:bg-gray-900 rounded-xl shadow-lg p-8 space-y-5" {onsubmit}>
                    if let Some(message) = error {
                        <Notice tone={Tone::Danger} {message} />
                    }
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                            {"Email address"}
                        </label>
                        <input
                            id="email"
                            type="email"
                            class={INPUT}
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                            {"Password"}
                        </label>
                        <div class="relative">
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                class={INPUT}
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500 hover:text-gray-700"
                                onclick={toggle_password}
                            >
                                {if *show_password { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled={loading}
                        class="w-full py-3 px-4 rounded-lg font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {if loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-lg p-4 text-sm">
                    <p class="font-medium text-blue-900 dark:text-blue-200">{"Demo credentials"}</p>
                    <p class="mt-1 text-blue-800 dark:text-blue-300">{format!("Email: {}", config.demo_account.email)}</p>
                    <p class="text-blue-800 dark:text-blue-300">{format!("Password: {}", config.demo_account.password)}</p>
                </div>
            </div>
        </div>
    }
}
