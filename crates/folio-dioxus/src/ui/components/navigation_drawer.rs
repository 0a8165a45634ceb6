use crate::ui::app::View;
use dioxus::prelude::*;

/// Side drawer listing the top-level pages. Opened by a right swipe or the
/// menu button, closed by a left swipe, the backdrop or a navigation.
#[component]
pub fn NavigationDrawer(
    open: bool,
    current: View,
    on_navigate: EventHandler<View>,
    on_close: EventHandler<()>,
) -> Element {
    let class_name = if open { "drawer open" } else { "drawer" };
    let hidden = (!open).to_string();

    rsx! {
        if open {
            div {
                class: "drawer-backdrop",
                onclick: move |_| on_close.call(())
            }
        }
        nav {
            class: "{class_name}",
            "aria-hidden": "{hidden}",
            h2 { "Folio" }
            ul {
                for (index, entry) in View::MENU.into_iter().enumerate() {
                    DrawerLink {
                        key: "{index}",
                        active: entry.section() == current.section(),
                        view: entry.clone(),
                        on_navigate
                    }
                }
            }
        }
    }
}

#[component]
fn DrawerLink(view: View, active: bool, on_navigate: EventHandler<View>) -> Element {
    let class_name = if active { "nav-link active" } else { "nav-link" };
    let title = view.title();

    rsx! {
        li {
            button {
                class: "{class_name}",
                onclick: move |_| on_navigate.call(view.clone()),
                "{title}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_drawer(open: bool, current: View) -> String {
        let mut dom = VirtualDom::new_with_props(
            |(open, current): (bool, View)| {
                rsx! {
                    NavigationDrawer {
                        open,
                        current,
                        on_navigate: move |_| {},
                        on_close: move |_| {}
                    }
                }
            },
            (open, current),
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_closed_drawer_has_no_backdrop() {
        let html = render_drawer(false, View::Blog);
        assert!(!html.contains("drawer-backdrop"));
        assert!(html.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn test_open_drawer_marks_current_section() {
        let html = render_drawer(true, View::Article("7".to_string()));
        assert!(html.contains("drawer open"));
        assert!(html.contains("drawer-backdrop"));
        assert!(html.contains("nav-link active"));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains("Blog"));
        assert!(html.contains("Write"));
        assert!(html.contains("Profile"));
    }
}
