use gloo_timers::callback::Timeout;
use log::info;
use shared::display::{capitalize, Tone};
use shared::{Language, NotificationSettings, Theme};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::notice::Notice;
use crate::config::ConfigContext;
use crate::theme::ThemeContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Account,
    Notifications,
    Appearance,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Account, Tab::Notifications, Tab::Appearance];

    fn label(self) -> &'static str {
        match self {
            Tab::Account => "Account",
            Tab::Notifications => "Notifications",
            Tab::Appearance => "Appearance",
        }
    }
}

const FIELD: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-gray-50 dark:bg-gray-800 text-gray-900 dark:text-white";

fn account_tab(auth: &AuthContext) -> Html {
    let Some(user) = auth.state.user() else {
        return html! {};
    };
    let row = |label: &'static str, value: String| {
        html! {
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{label}</label>
                <input class={FIELD} value={value} readonly=true />
            </div>
        }
    };
    html! {
        <div class="space-y-4">
            {row("Full Name", user.name.clone())}
            {row("Email", user.email.clone())}
            {row("Role", user.role.clone())}
        </div>
    }
}

fn toggle_row(
    title: &'static str,
    description: &'static str,
    enabled: bool,
    on_toggle: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="flex items-center justify-between py-3">
            <div>
                <p class="font-medium text-gray-900 dark:text-white">{title}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
            </div>
            <button
                role="switch"
                aria-checked={enabled.to_string()}
                onclick={on_toggle}
                class={classes!(
                    "relative", "inline-flex", "h-6", "w-11", "items-center", "rounded-full", "transition-colors",
                    if enabled { "bg-blue-600" } else { "bg-gray-300" }
                )}
            >
                <span class={classes!(
                    "inline-block", "h-4", "w-4", "rounded-full", "bg-white", "transition-transform",
                    if enabled { "translate-x-6" } else { "translate-x-1" }
                )} />
            </button>
        </div>
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let theme = use_context::<ThemeContext>().expect("Theme context not found");
    let config = use_context::<ConfigContext>().expect("Config context not found");

    let tab = use_state(|| Tab::Account);
    let notifications = use_state(NotificationSettings::default);
    let language = use_state(Language::default);
    let saved = use_state(|| false);

    // Hide the confirmation again after a few seconds
    {
        let saved = saved.clone();
        let delay = config.saved_banner_ms;
        use_effect_with(*saved, move |shown| {
            if *shown {
                let timeout = Timeout::new(delay, move || saved.set(false));
                Box::new(move || drop(timeout)) as Box<dyn FnOnce()>
            } else {
                Box::new(|| {}) as Box<dyn FnOnce()>
            }
        });
    }

    let on_save = {
        let saved = saved.clone();
        let notifications = notifications.clone();
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            info!(
                "Saved settings: notifications {:?}, language {}",
                *notifications,
                language.code()
            );
            saved.set(true);
        })
    };

    let toggle = |update: fn(&mut NotificationSettings)| {
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *notifications;
            update(&mut next);
            notifications.set(next);
        })
    };

    let on_language = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(choice) = Language::from_code(&select.value()) {
                language.set(choice);
            }
        })
    };

    let body = match *tab {
        Tab::Account => account_tab(&auth),
        Tab::Notifications => html! {
            <div class="divide-y divide-gray-200 dark:divide-gray-700">
                {toggle_row("Email Notifications", "Receive updates by email", notifications.email,
                    toggle(|n| n.email = !n.email))}
                {toggle_row("Push Notifications", "Receive push notifications in the browser", notifications.push,
                    toggle(|n| n.push = !n.push))}
                {toggle_row("Weekly Report", "Get a summary of activity every week", notifications.weekly_report,
                    toggle(|n| n.weekly_report = !n.weekly_report))}
            </div>
        },
        Tab::Appearance => html! {
            <div class="space-y-6">
                <div>
                    <p class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-3">{"Theme"}</p>
                    <div class="grid grid-cols-3 gap-3">
                        {for Theme::ALL.iter().map(|option| {
                            let selected = *option == theme.theme;
                            let option = *option;
                            html! {
                                <button
                                    key={option.as_str()}
                                    onclick={theme.set_theme.reform(move |_: MouseEvent| option)}
                                    class={classes!(
                                        "px-4", "py-3", "rounded-lg", "border-2", "text-sm", "font-medium",
                                        if selected {
                                            classes!("border-blue-600", "text-blue-700", "dark:text-blue-300")
                                        } else {
                                            classes!("border-gray-200", "dark:border-gray-700", "text-gray-700", "dark:text-gray-300")
                                        }
                                    )}
                                >
                                    {capitalize(option.as_str())}
                                </button>
                            }
                        })}
                    </div>
                </div>
                <div>
                    <label for="language" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        {"Language"}
                    </label>
                    <select id="language" class={FIELD} onchange={on_language}>
                        {for Language::ALL.iter().map(|option| html! {
                            <option value={option.code()} selected={*option == *language}>{option.label()}</option>
                        })}
                    </select>
                </div>
            </div>
        },
    };

    html! {
        <div class="max-w-3xl space-y-6">
            if *saved {
                <Notice tone={Tone::Success} message="Settings saved successfully" />
            }
            <div class="bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700">
                <div class="flex border-b border-gray-200 dark:border-gray-700">
                    {for Tab::ALL.iter().map(|option| {
                        let option = *option;
                        let active = option == *tab;
                        let onclick = {
                            let tab = tab.clone();
                            Callback::from(move |_: MouseEvent| tab.set(option))
                        };
                        html! {
                            <button
                                key={option.label()}
                                {onclick}
                                class={classes!(
                                    "px-6", "py-3", "text-sm", "font-medium", "border-b-2",
                                    if active {
                                        classes!("border-blue-600", "text-blue-600")
                                    } else {
                                        classes!("border-transparent", "text-gray-500", "hover:text-gray-700")
                                    }
                                )}
                            >
                                {option.label()}
                            </button>
                        }
                    })}
                </div>
                <div class="p-6">{body}</div>
                <div class="px-6 py-4 border-t border-gray-200 dark:border-gray-700 flex justify-end">
                    <button
                        onclick={on_save}
                        class="px-4 py-2 rounded-lg text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                    >
                        {"Save Changes"}
                    </button>
                </div>
            </div>
        </div>
    }
}
