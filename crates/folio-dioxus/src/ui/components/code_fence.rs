use dioxus::prelude::*;

#[component]
pub fn CodeFence(code: String) -> Element {
    rsx! {
        div {
            class: "code-block",
            pre {
                class: "rounded-lg p-4 my-6 overflow-x-auto",
                code { "{code}" }
            }
        }
    }
}
