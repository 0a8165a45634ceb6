use crate::ui::components::{
    BlockQuote, Callout, CodeFence, Delimiter, EmbedFrame, Figure, Heading, LinkCard, ListBlock,
    Paragraph, TableBlock, UnknownBlock,
};
use dioxus::prelude::*;
use folio_engine::render::{RenderKind, RenderNode};

/// Dispatch a projected node to the component for its kind
#[component]
pub fn BlockView(node: RenderNode) -> Element {
    match node.kind {
        RenderKind::Heading(heading) => rsx! { Heading { node: heading } },
        RenderKind::Text(html) => rsx! { Paragraph { html } },
        RenderKind::Figure(figure) => rsx! { Figure { node: figure } },
        RenderKind::List(list) => rsx! { ListBlock { node: list } },
        RenderKind::Quote(quote) => rsx! { BlockQuote { node: quote } },
        RenderKind::Preformatted { code } => rsx! { CodeFence { code } },
        RenderKind::Grid(grid) => rsx! { TableBlock { node: grid } },
        RenderKind::Separator => rsx! { Delimiter {} },
        RenderKind::Callout(callout) => rsx! { Callout { node: callout } },
        RenderKind::Frame(frame) => rsx! { EmbedFrame { node: frame } },
        RenderKind::Card(card) => rsx! { LinkCard { node: card } },
        RenderKind::Fallback(fallback) => rsx! { UnknownBlock { node: fallback } },
    }
}
