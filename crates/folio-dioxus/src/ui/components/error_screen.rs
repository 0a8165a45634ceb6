use dioxus::prelude::*;

/// Full-screen notice for failures that stop the portfolio from starting.
/// When the failure came from the config file, `config_path` points the user
/// at the file to repair.
#[component]
pub fn ErrorScreen(
    title: String,
    message: String,
    details: Option<String>,
    config_path: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "startup-error",
            role: "alert",
            h1 { class: "startup-error-title", "{title}" }
            p { class: "startup-error-message", "{message}" }
            if let Some(detail_text) = details {
                pre { class: "startup-error-details", "{detail_text}" }
            }
            if let Some(path) = config_path {
                p {
                    class: "startup-error-hint",
                    "Fix or delete "
                    code { "{path}" }
                    " and restart folio. Without a config file the built-in defaults are used."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_screen(props: ErrorScreenProps) -> String {
        let mut dom = VirtualDom::new_with_props(ErrorScreen, props);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_network_error_has_no_config_hint() {
        let html = render_screen(ErrorScreenProps {
            title: "Network Error".to_string(),
            message: "Could not create the HTTP client".to_string(),
            details: None,
            config_path: None,
        });

        assert!(html.contains("startup-error"));
        assert!(html.contains("Could not create the HTTP client"));
        assert!(!html.contains("startup-error-details"));
        assert!(!html.contains("startup-error-hint"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn test_config_error_points_at_file() {
        let html = render_screen(ErrorScreenProps {
            title: "Configuration Error".to_string(),
            message: "The config file could not be read".to_string(),
            details: Some("TOML parse error at line 3".to_string()),
            config_path: Some("/home/sara/.config/folio/config.toml".to_string()),
        });

        assert!(html.contains("TOML parse error at line 3"));
        assert!(html.contains("startup-error-hint"));
        assert!(html.contains("<code>/home/sara/.config/folio/config.toml</code>"));
        assert!(html.contains("Fix or delete"));
    }
}
