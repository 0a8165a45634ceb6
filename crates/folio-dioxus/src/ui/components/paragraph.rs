use dioxus::prelude::*;
use folio_engine::render::TrustedHtml;

/// Paragraph whose inline markup was sanitized upstream and is inserted as-is
#[component]
pub fn Paragraph(html: TrustedHtml) -> Element {
    let inner = html.as_str().to_string();

    rsx! {
        p {
            class: "paragraph leading-relaxed mb-4",
            dangerous_inner_html: "{inner}"
        }
    }
}
