use dioxus::prelude::*;

/// Section break drawn as three centered dots
#[component]
pub fn Delimiter() -> Element {
    rsx! {
        div {
            class: "delimiter flex justify-center my-8",
            "aria-hidden": "true",
            span {}
            span {}
            span {}
        }
    }
}
