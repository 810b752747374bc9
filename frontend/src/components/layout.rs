use shared::navigation::{is_active, NAV_ITEMS};
use shared::View;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::config::ConfigContext;
use crate::Route;

fn nav_icon(view: View) -> &'static str {
    match view {
        View::Overview => "▦",
        View::Analytics => "📈",
        View::Transactions => "⇄",
        View::Users => "👥",
        View::Settings => "⚙",
        View::Login => "",
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub view: View,
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar, header and content frame shared by every dashboard page.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let config = use_context::<ConfigContext>().expect("Config context not found");
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| props.view.path().to_string());
    let sidebar_open = use_state(|| false);

    let on_logout = auth.logout.reform(|_: MouseEvent| ());
    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let user_card = match auth.state.user() {
        Some(user) => html! {
            <div class="flex items-center gap-3">
                if let Some(avatar) = &user.avatar {
                    <img src={avatar.clone()} alt={user.name.clone()} class="w-10 h-10 rounded-full bg-gray-200" />
                } else {
                    <div class="w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-semibold">
                        {user.initial()}
                    </div>
                }
                <div class="min-w-0">
                    <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{user.name.clone()}</p>
                    <p class="text-xs text-gray-500 dark:text-gray-400 truncate">{user.role.clone()}</p>
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <aside class={classes!(
                "fixed", "inset-y-0", "left-0", "z-40", "w-64", "flex", "flex-col",
                "bg-white", "dark:bg-gray-900", "border-r", "border-gray-200", "dark:border-gray-800",
                "transform", "transition-transform", "lg:translate-x-0",
                if *sidebar_open { "translate-x-0" } else { "-translate-x-full" }
            )}>
                <div class="h-16 flex items-center px-6 border-b border-gray-200 dark:border-gray-800">
                    <span class="text-xl font-bold text-blue-600">{config.app_name.clone()}</span>
                </div>
                <nav class="flex-1 px-3 py-4 space-y-1">
                    {for NAV_ITEMS.iter().map(|item| {
                        let active = is_active(*item, &current_path);
                        html! {
                            <Link<Route>
                                to={Route::from(*item)}
                                classes={classes!(
                                    "flex", "items-center", "gap-3", "px-3", "py-2", "rounded-lg",
                                    "text-sm", "font-medium", "transition-colors",
                                    if active {
                                        classes!("bg-blue-50", "text-blue-700", "dark:bg-blue-900/30", "dark:text-blue-300")
                                    } else {
                                        classes!("text-gray-700", "dark:text-gray-300", "hover:bg-gray-100", "dark:hover:bg-gray-800")
                                    }
                                )}
                            >
                                <span aria-hidden="true">{nav_icon(*item)}</span>
                                {item.title()}
                            </Link<Route>>
                        }
                    })}
                </nav>
                <div class="p-4 border-t border-gray-200 dark:border-gray-800 space-y-3">
                    {user_card}
                    <button
                        onclick={on_logout}
                        class="w-full px-3 py-2 text-sm font-medium text-red-600 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20"
                    >
                        {"Logout"}
                    </button>
                </div>
            </aside>
            <div class="flex-1 lg:ml-64 flex flex-col min-w-0">
                <header class="h-16 flex items-center gap-4 px-6 bg-white dark:bg-gray-900 border-b border-gray-200 dark:border-gray-800">
                    <button class="lg:hidden text-gray-600" onclick={toggle_sidebar}>{"☰"}</button>
                    <h1 class="text-lg font-semibold text-gray-900 dark:text-white">{props.view.title()}</h1>
                </header>
                <main class="flex-1 p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
