use gloo_utils::{document, window};
use log::{debug, warn};
use shared::Theme;
use yew::prelude::*;

use crate::auth::AuthContext;

/// Current theme and a setter that persists the choice.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

fn system_prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggles the `dark` class on the root element.
fn apply_theme(theme: Theme) {
    let dark = theme.is_dark(system_prefers_dark());
    let Some(root) = document().document_element() else {
        warn!("No document element to apply the {} theme to", theme);
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    match result {
        Ok(()) => debug!("Applied {} theme (dark: {})", theme, dark),
        Err(e) => warn!("Failed to apply theme: {:?}", e),
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let theme = auth.state.theme();

    use_effect_with(theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let context = ThemeContext {
        theme,
        set_theme: auth.set_theme.clone(),
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
