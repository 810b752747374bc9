use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use shared::{authorize, Access, View};
use crate::auth::{AuthProvider, AuthContext};
use crate::components::layout::DashboardLayout;
use crate::config::Config;
use crate::theme::ThemeProvider;

pub mod auth;
pub mod components;
pub mod config;
pub mod storage;
pub mod theme;
pub mod pages {
    pub mod analytics;
    pub mod login;
    pub mod overview;
    pub mod settings;
    pub mod transactions;
    pub mod users;
}

use pages::{analytics::Analytics, login::Login, overview::Overview, settings::Settings, transactions::Transactions, users::Users};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/analytics")]
    Analytics,
    #[at("/dashboard/transactions")]
    Transactions,
    #[at("/dashboard/users")]
    Users,
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The view a route shows. The root and unknown paths have no view of
    /// their own.
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Login => Some(View::Login),
            Route::Overview => Some(View::Overview),
            Route::Analytics => Some(View::Analytics),
            Route::Transactions => Some(View::Transactions),
            Route::Users => Some(View::Users),
            Route::Settings => Some(View::Settings),
            Route::Root | Route::NotFound => None,
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Login => Route::Login,
            View::Overview => Route::Overview,
            View::Analytics => Route::Analytics,
            View::Transactions => Route::Transactions,
            View::Users => Route::Users,
            View::Settings => Route::Settings,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let config = use_memo((), |_| Config::load());
    html! {
        <ContextProvider<config::ConfigContext> context={config}>
            <AuthProvider>
                <ThemeProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ThemeProvider>
            </AuthProvider>
        </ContextProvider<config::ConfigContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub view: View,
    pub children: Children,
}

/// Renders its children only when the session may see `view`, otherwise
/// redirects.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    match authorize(props.view, auth.state.is_authenticated()) {
        Access::Render => html! { <>{props.children.clone()}</> },
        Access::Redirect(target) => {
            debug!("Redirecting from {:?} to {:?}", props.view, target);
            html! { <Redirect<Route> to={Route::from(target)} /> }
        }
    }
}

fn page(view: View) -> Html {
    match view {
        View::Login => html! { <Login /> },
        View::Overview => html! { <Overview /> },
        View::Analytics => html! { <Analytics /> },
        View::Transactions => html! { <Transactions /> },
        View::Users => html! { <Users /> },
        View::Settings => html! { <Settings /> },
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    let Some(view) = route.view() else {
        return html! { <Redirect<Route> to={Route::Overview} /> };
    };

    if view.is_protected() {
        html! {
            <Guard {view}>
                <DashboardLayout {view}>
                    {page(view)}
                </DashboardLayout>
            </Guard>
        }
    } else {
        html! {
            <Guard {view}>
                {page(view)}
            </Guard>
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
