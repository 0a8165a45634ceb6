use dioxus::prelude::*;
use folio_engine::render::ListNode;

/// Flat ordered or unordered list, items carry trusted inline markup
#[component]
pub fn ListBlock(node: ListNode) -> Element {
    let items: Vec<String> = node
        .items
        .iter()
        .map(|item| item.as_str().to_string())
        .collect();

    if node.ordered {
        rsx! {
            ol {
                class: "block-list mb-4 list-decimal list-inside",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", class: "mb-1", dangerous_inner_html: "{item}" }
                }
            }
        }
    } else {
        rsx! {
            ul {
                class: "block-list mb-4 list-disc list-inside",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", class: "mb-1", dangerous_inner_html: "{item}" }
                }
            }
        }
    }
}
