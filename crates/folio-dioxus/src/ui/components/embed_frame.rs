use dioxus::prelude::*;
use folio_engine::render::FrameNode;

/// Embedded third-party player kept at a fixed aspect ratio
#[component]
pub fn EmbedFrame(node: FrameNode) -> Element {
    let aspect = node.aspect.css();

    rsx! {
        div {
            class: "embed my-6",
            div {
                style: "aspect-ratio: {aspect}",
                iframe {
                    src: "{node.src}",
                    title: "{node.title}",
                    class: "w-full h-full rounded-lg",
                    allowfullscreen: true
                }
            }
            if let Some(ref caption) = node.caption {
                p { class: "text-center text-sm mt-2", "{caption}" }
            }
        }
    }
}
