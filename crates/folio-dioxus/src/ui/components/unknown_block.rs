use dioxus::prelude::*;
use folio_engine::render::FallbackNode;

/// Fallback for block kinds the renderer has no component for. Shows the
/// kind label and, when present, the block's text.
#[component]
pub fn UnknownBlock(node: FallbackNode) -> Element {
    let label = node.label();

    rsx! {
        div {
            class: "unknown-block my-4 p-3 rounded border-l-4",
            small { "{label}" }
            if let FallbackNode::LabelledText { ref text, .. } = node {
                p { "{text}" }
            }
        }
    }
}
