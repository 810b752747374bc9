#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::Route;
    use pretty_assertions::assert_eq;
    use shared::{View, DashboardConfig};
    use yew_router::Routable;

    #[test]
    fn test_every_view_has_a_route_at_its_path() {
        for view in View::ALL {
            let route = Route::from(view);
            assert_eq!(route.to_path(), view.path());
            assert_eq!(route.view(), Some(view));
        }
    }

    #[test]
    fn test_root_and_unknown_paths_have_no_view() {
        assert_eq!(Route::recognize("/"), Some(Route::Root));
        assert_eq!(Route::Root.view(), None);
        assert_eq!(Route::recognize("/does/not/exist"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.view(), None);
    }

    #[test]
    fn test_recognize_dashboard_children() {
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Overview));
        assert_eq!(Route::recognize("/dashboard/users"), Some(Route::Users));
        assert_eq!(Route::recognize("/dashboard/settings"), Some(Route::Settings));
    }

    #[test]
    fn test_bundled_config_parses() {
        let bundled = Config::load();
        assert_eq!(bundled.app_name, "Insighta");
        assert_eq!(bundled.default_page_size.get(), 10);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        assert_eq!(Config::parse("{ not json"), DashboardConfig::default());
    }
}
