use dioxus::prelude::*;
use folio_engine::render::html::EMPTY_NOTICE;

#[component]
pub fn EmptyDocument() -> Element {
    rsx! {
        div {
            class: "empty-document text-center py-8",
            p { class: "text-gray-500", "{EMPTY_NOTICE}" }
        }
    }
}
