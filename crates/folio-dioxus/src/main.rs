use dioxus::prelude::*;
use std::sync::OnceLock;

mod services;
mod ui;

use folio_config::Config;
use ui::App;
use ui::components::ErrorScreen;

/// Configuration resolved before launch, or the reason it could not be
static STARTUP: OnceLock<Result<Config, String>> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("folio starting up!");
    log::info!("Config path: {}", Config::config_path().display());

    let startup = Config::load_or_default().map_err(|e| {
        log::error!("Config::load_or_default() failed with error: {e}");
        e.to_string()
    });
    if let Ok(config) = &startup {
        log::info!(
            "Using blog service at {} (editor locale {})",
            config.api.blog_url,
            config.editor.locale
        );
    }
    let _ = STARTUP.set(startup);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    match STARTUP.get() {
        Some(Ok(config)) => rsx! {
            App { config: config.clone() }
        },
        Some(Err(message)) => {
            let config_path = Config::config_path().display().to_string();
            rsx! {
                ErrorScreen {
                    title: "Configuration Error",
                    message: "The config file could not be read",
                    details: Some(message.clone()),
                    config_path: Some(config_path)
                }
            }
        }
        None => rsx! {
            ErrorScreen {
                title: "Startup Error",
                message: "Configuration was not resolved before launch",
                details: None,
                config_path: None
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("folio")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
