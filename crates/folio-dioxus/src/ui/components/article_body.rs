use crate::ui::components::{BlockView, EmptyDocument};
use dioxus::prelude::*;
use folio_engine::model::BlockDocument;
use folio_engine::render::project;

/// Rendered article content, one component per block in document order
#[component]
pub fn ArticleBody(document: BlockDocument) -> Element {
    let nodes = project(&document);

    if nodes.is_empty() {
        return rsx! { EmptyDocument {} };
    }

    rsx! {
        article {
            class: "article-body prose prose-lg max-w-none",
            for node in nodes {
                BlockView { key: "{node.key}", node: node.clone() }
            }
        }
    }
}
