use dioxus::prelude::*;
use folio_engine::render::HeadingNode;

#[component]
pub fn Heading(node: HeadingNode) -> Element {
    let class_name = format!("heading font-bold mb-4 mt-6 {}", node.size_class());

    match node.level {
        1 => rsx! { h1 { class: "{class_name}", "{node.text}" } },
        2 => rsx! { h2 { class: "{class_name}", "{node.text}" } },
        3 => rsx! { h3 { class: "{class_name}", "{node.text}" } },
        4 => rsx! { h4 { class: "{class_name}", "{node.text}" } },
        5 => rsx! { h5 { class: "{class_name}", "{node.text}" } },
        _ => rsx! { h6 { class: "{class_name}", "{node.text}" } },
    }
}
