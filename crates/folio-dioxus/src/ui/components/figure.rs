use dioxus::prelude::*;
use folio_engine::render::FigureNode;

#[component]
pub fn Figure(node: FigureNode) -> Element {
    let image_class = node.style.class_attr();
    let alt = node.alt().to_string();

    rsx! {
        figure {
            class: "figure my-8",
            img {
                src: "{node.src}",
                alt: "{alt}",
                class: "{image_class}"
            }
            if let Some(ref caption) = node.caption {
                figcaption {
                    class: "text-center text-sm mt-2",
                    "{caption}"
                }
            }
        }
    }
}
