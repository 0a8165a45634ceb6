use crate::services::Services;
use crate::ui::components::{
    ArticleList, ArticleView, ErrorScreen, NavigationDrawer, Profile, PublishPanel, SwipeSurface,
};
use dioxus::prelude::*;
use folio_config::Config;
use folio_client::Article;
use folio_engine::gesture::SwipeConfig;

const APP_CSS: &str = include_str!("../assets/folio.css");

/// Pages of the app
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Blog,
    Article(String),
    Write,
    Profile,
}

impl View {
    /// Drawer entries, in display order
    pub const MENU: [View; 3] = [View::Blog, View::Write, View::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            View::Blog | View::Article(_) => "Blog",
            View::Write => "Write",
            View::Profile => "Profile",
        }
    }

    /// Drawer entry this view belongs to
    pub fn section(&self) -> View {
        match self {
            View::Article(_) => View::Blog,
            other => other.clone(),
        }
    }
}

#[component]
pub fn App(config: Config) -> Element {
    let services = use_hook(|| Services::connect(&config.api).map_err(|e| e.to_string()));

    match services {
        Ok(services) => rsx! {
            Portfolio { services, config }
        },
        Err(message) => {
            log::error!("Failed to create HTTP client: {message}");
            rsx! {
                ErrorScreen {
                    title: "Network Error",
                    message: "Could not create the HTTP client",
                    details: Some(message),
                    config_path: None
                }
            }
        }
    }
}

#[component]
fn Portfolio(services: Services, config: Config) -> Element {
    use_context_provider(|| services.clone());

    let mut view = use_signal(|| View::Blog);
    let mut drawer_open = use_signal(|| false);

    use_hook(|| {
        let visits = services.visits.clone();
        spawn(async move { visits.report_visit().await })
    });

    let swipe = SwipeConfig::default()
        .with_threshold(config.gesture.threshold)
        .with_prevent_scroll(config.gesture.prevent_scroll)
        .with_edge_band(config.gesture.edge_band);
    let title = view.read().title();

    let page = match view() {
        View::Blog => rsx! {
            ArticleList { on_open: move |id: String| view.set(View::Article(id)) }
        },
        View::Article(id) => rsx! {
            ArticleView {
                key: "{id}",
                id: id.clone(),
                on_back: move |_| view.set(View::Blog)
            }
        },
        View::Write => rsx! {
            PublishPanel {
                settings: config.editor.clone(),
                on_published: move |article: Article| view.set(View::Article(article.id))
            }
        },
        View::Profile => rsx! { Profile {} },
    };

    rsx! {
        style { {APP_CSS} }
        SwipeSurface {
            config: swipe,
            on_swipe_right: move |_| drawer_open.set(true),
            on_swipe_left: move |_| drawer_open.set(false),
            div {
                class: "app-container",
                header {
                    class: "top-bar",
                    button {
                        class: "menu-button",
                        onclick: move |_| {
                            let open = drawer_open();
                            drawer_open.set(!open);
                        },
                        "☰"
                    }
                    h1 { "{title}" }
                }
                NavigationDrawer {
                    open: drawer_open(),
                    current: view(),
                    on_navigate: move |target: View| {
                        view.set(target);
                        drawer_open.set(false);
                    },
                    on_close: move |_| drawer_open.set(false)
                }
                main {
                    class: "main-content",
                    {page}
                }
            }
        }
    }
}
