use dioxus::prelude::*;
use folio_engine::render::CalloutNode;

#[component]
pub fn Callout(node: CalloutNode) -> Element {
    rsx! {
        div {
            class: "callout border-l-4 p-4 my-6",
            role: "note",
            strong { "⚠️ {node.title}" }
            p { "{node.message}" }
        }
    }
}
