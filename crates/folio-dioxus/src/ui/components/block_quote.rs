use dioxus::prelude::*;
use folio_engine::render::QuoteNode;

#[component]
pub fn BlockQuote(node: QuoteNode) -> Element {
    let class_name = if node.centered {
        "block-quote border-l-4 pl-6 my-6 text-center"
    } else {
        "block-quote border-l-4 pl-6 my-6"
    };

    rsx! {
        blockquote {
            class: "{class_name}",
            p { class: "text-lg italic mb-2", "\"{node.text}\"" }
            if let Some(ref caption) = node.caption {
                cite { class: "text-sm", "- {caption}" }
            }
        }
    }
}
