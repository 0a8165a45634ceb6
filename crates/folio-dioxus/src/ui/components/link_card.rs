use dioxus::prelude::*;
use folio_engine::render::CardNode;

#[component]
pub fn LinkCard(node: CardNode) -> Element {
    rsx! {
        div {
            class: "link-card border rounded-lg p-4 my-6",
            a {
                href: "{node.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                if let Some(ref image) = node.image {
                    img { src: "{image}", alt: "" }
                }
                h4 { "{node.title}" }
                if let Some(ref description) = node.description {
                    p { "{description}" }
                }
                span { class: "text-sm", "{node.href}" }
            }
        }
    }
}
