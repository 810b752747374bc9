use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use shared::{AuthenticatedUser, DashboardConfig, LoginRequest, SessionService, Theme};
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::config::ConfigContext;
use crate::storage::BrowserStore;

#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: SessionService<BrowserStore>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && self.session.theme() == other.session.theme()
            && self.session.current_user() == other.session.current_user()
    }
}

impl AuthState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            session: SessionService::init(BrowserStore, config),
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn theme(&self) -> Theme {
        self.session.theme()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    Login(LoginRequest),
    Logout,
    SetTheme(Theme),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::Login(request) => {
                let mut session = self.session.clone();
                let error = match session.login(&request) {
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Login failed: {}", e);
                        Some(e.to_string())
                    }
                };
                Rc::new(Self {
                    session,
                    loading: false,
                    error,
                })
            }
            AuthAction::Logout => {
                let mut session = self.session.clone();
                if let Err(e) = session.logout() {
                    error!("Failed to clear stored session: {}", e);
                }
                Rc::new(Self {
                    session,
                    loading: false,
                    error: None,
                })
            }
            AuthAction::SetTheme(theme) => {
                let mut session = self.session.clone();
                if let Err(e) = session.set_theme(theme) {
                    error!("Failed to store theme: {}", e);
                }
                Rc::new(Self {
                    session,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
    pub set_theme: Callback<Theme>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let config = use_context::<ConfigContext>().expect("Config context not found");
    let auth = {
        let config = config.clone();
        use_reducer_eq(move || AuthState::new(&config))
    };

    // Sign-in is checked locally; the delay stands in for a network round trip
    let login = {
        let auth = auth.clone();
        let delay = config.login_delay_ms;
        Callback::from(move |request: LoginRequest| {
            debug!("Signing in {}", request.email);
            auth.dispatch(AuthAction::LoginStarted);
            let auth = auth.clone();
            Timeout::new(delay, move || auth.dispatch(AuthAction::Login(request))).forget();
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::Logout))
    };

    let set_theme = {
        let auth = auth.clone();
        Callback::from(move |theme: Theme| auth.dispatch(AuthAction::SetTheme(theme)))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        set_theme,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
