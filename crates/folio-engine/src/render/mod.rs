//! # Rendering Projector
//!
//! Maps a [`BlockDocument`] to presentational [`RenderNode`]s. Projection is
//! a pure, total function: one node per block, in block order, with a
//! fallback node for anything it does not recognize. The document is only
//! borrowed.
//!
//! ```rust
//! # use folio_engine::model::{Block, BlockDocument};
//! # use folio_engine::render::{project, RenderKind};
//! let doc = BlockDocument::new(vec![Block::heading("Hello", 1), Block::paragraph("World")]);
//! let nodes = project(&doc);
//! assert_eq!(nodes.len(), 2);
//! assert!(matches!(nodes[0].kind, RenderKind::Heading(_)));
//! ```

pub mod html;
pub mod node;

pub use node::*;

use crate::model::{Alignment, BlockContent, BlockDocument, ListStyle};

const DEFAULT_EMBED_TITLE: &str = "Embedded content";

pub fn project(document: &BlockDocument) -> Vec<RenderNode> {
    document
        .blocks
        .iter()
        .enumerate()
        .map(|(key, block)| RenderNode {
            key,
            kind: project_block(&block.content),
        })
        .collect()
}

/// Projection rule for a single block
pub fn project_block(content: &BlockContent) -> RenderKind {
    match content {
        BlockContent::Heading(data) => RenderKind::Heading(HeadingNode {
            level: data.level.clamp(1, 6),
            text: data.text.clone(),
        }),
        BlockContent::Paragraph(data) => RenderKind::Text(TrustedHtml::new(data.text.clone())),
        BlockContent::Image(data) => RenderKind::Figure(FigureNode {
            src: data.url.clone(),
            caption: non_empty(&data.caption),
            style: ImageStyle {
                stretched: data.stretched,
                bordered: data.with_border,
                backdrop: data.with_background,
            },
        }),
        BlockContent::List(data) => RenderKind::List(ListNode {
            ordered: data.style == ListStyle::Ordered,
            items: data.items.iter().cloned().map(TrustedHtml::new).collect(),
        }),
        BlockContent::Quote(data) => RenderKind::Quote(QuoteNode {
            text: data.text.clone(),
            caption: non_empty(&data.caption),
            centered: data.alignment == Alignment::Center,
        }),
        BlockContent::Code(data) => RenderKind::Preformatted {
            code: data.code.clone(),
        },
        BlockContent::Table(data) => RenderKind::Grid(GridNode {
            rows: data
                .rows
                .iter()
                .enumerate()
                .map(|(index, cells)| GridRow {
                    header: index == 0 && data.first_row_is_header,
                    cells: cells.clone(),
                })
                .collect(),
        }),
        BlockContent::Delimiter => RenderKind::Separator,
        BlockContent::Warning(data) => RenderKind::Callout(CalloutNode {
            title: data.title.clone(),
            message: data.message.clone(),
        }),
        BlockContent::Embed(data) => {
            let caption = non_empty(&data.caption);
            RenderKind::Frame(FrameNode {
                src: data.url.clone(),
                title: caption
                    .clone()
                    .unwrap_or_else(|| DEFAULT_EMBED_TITLE.to_string()),
                caption,
                aspect: AspectRatio::VIDEO,
            })
        }
        BlockContent::LinkPreview(data) => RenderKind::Card(CardNode {
            href: data.url.clone(),
            title: non_empty(&data.preview_title).unwrap_or_else(|| data.url.clone()),
            description: non_empty(&data.preview_description),
            image: non_empty(&data.preview_image),
        }),
        BlockContent::Unrecognized { kind, payload } => {
            let text = payload
                .get("text")
                .and_then(|value| value.as_str())
                .filter(|text| !text.is_empty());
            RenderKind::Fallback(match text {
                Some(text) => FallbackNode::LabelledText {
                    kind: kind.clone(),
                    text: text.to_string(),
                },
                None => FallbackNode::Placeholder { kind: kind.clone() },
            })
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Block, BlockContent, BlockDocument, EmbedData, ImageData, LinkPreviewData, TableData,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn single(content: BlockContent) -> RenderKind {
        let doc = BlockDocument::new(vec![Block::new(content)]);
        project(&doc).remove(0).kind
    }

    #[test]
    fn test_empty_document_projects_to_nothing() {
        assert!(project(&BlockDocument::empty()).is_empty());
    }

    #[test]
    fn test_keys_follow_block_order() {
        let doc = BlockDocument::new(vec![
            Block::paragraph("a"),
            Block::new(BlockContent::Delimiter),
            Block::paragraph("b"),
        ]);
        let keys: Vec<_> = project(&doc).iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[rstest]
    #[case(0, 1, "text-3xl")]
    #[case(1, 1, "text-3xl")]
    #[case(2, 2, "text-2xl")]
    #[case(4, 4, "text-lg")]
    #[case(6, 6, "text-base")]
    #[case(9, 6, "text-base")]
    fn test_heading_level_is_clamped(
        #[case] level: u8,
        #[case] expected_level: u8,
        #[case] size: &str,
    ) {
        let RenderKind::Heading(heading) = single(Block::heading("H", level).content) else {
            panic!("expected heading");
        };
        assert_eq!(heading.level, expected_level);
        assert_eq!(heading.size_class(), size);
    }

    #[test]
    fn test_table_header_only_when_flagged() {
        let rows = vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ];
        let RenderKind::Grid(grid) = single(BlockContent::Table(TableData {
            rows: rows.clone(),
            first_row_is_header: true,
        })) else {
            panic!("expected grid");
        };
        assert!(grid.rows[0].header);
        assert!(!grid.rows[1].header);

        let RenderKind::Grid(grid) = single(BlockContent::Table(TableData {
            rows,
            first_row_is_header: false,
        })) else {
            panic!("expected grid");
        };
        assert!(grid.rows.iter().all(|row| !row.header));
    }

    #[test]
    fn test_image_flags_compose() {
        let RenderKind::Figure(figure) = single(BlockContent::Image(ImageData {
            url: "a.png".to_string(),
            stretched: true,
            with_border: true,
            ..Default::default()
        })) else {
            panic!("expected figure");
        };

        assert!(figure.style.stretched);
        assert!(figure.style.bordered);
        assert!(!figure.style.backdrop);
        let classes = figure.style.classes();
        assert!(classes.contains(&"max-w-none"));
        assert!(classes.iter().any(|c| c.starts_with("border ")));
    }

    #[test]
    fn test_image_style_order_independent() {
        let a = ImageStyle {
            stretched: true,
            bordered: false,
            backdrop: true,
        };
        let mut b = ImageStyle::default();
        b.backdrop = true;
        b.stretched = true;
        assert_eq!(a.class_attr(), b.class_attr());
    }

    #[test]
    fn test_empty_caption_is_dropped() {
        let RenderKind::Figure(figure) = single(BlockContent::Image(ImageData {
            url: "a.png".to_string(),
            caption: Some(String::new()),
            ..Default::default()
        })) else {
            panic!("expected figure");
        };
        assert_eq!(figure.caption, None);
        assert_eq!(figure.alt(), "");
    }

    #[test]
    fn test_embed_has_fixed_aspect_and_default_title() {
        let RenderKind::Frame(frame) = single(BlockContent::Embed(EmbedData {
            url: "https://www.youtube.com/embed/xyz".to_string(),
            caption: None,
            service: Some("youtube".to_string()),
        })) else {
            panic!("expected frame");
        };
        assert_eq!(frame.aspect, AspectRatio::VIDEO);
        assert_eq!(frame.title, "Embedded content");
    }

    #[test]
    fn test_link_card_with_url_only() {
        let RenderKind::Card(card) = single(BlockContent::LinkPreview(LinkPreviewData {
            url: "https://example.com".to_string(),
            ..Default::default()
        })) else {
            panic!("expected card");
        };
        assert_eq!(card.title, "https://example.com");
        assert_eq!(card.description, None);
        assert_eq!(card.image, None);
    }

    #[rstest]
    #[case(json!({ "text": "hello" }), Some("hello"))]
    #[case(json!({ "text": "" }), None)]
    #[case(json!({ "items": [] }), None)]
    #[case(json!(null), None)]
    #[case(json!("just a string"), None)]
    fn test_unrecognized_fallback(#[case] payload: serde_json::Value, #[case] text: Option<&str>) {
        let kind = single(BlockContent::Unrecognized {
            kind: "checklist".to_string(),
            payload,
        });
        let RenderKind::Fallback(fallback) = kind else {
            panic!("expected fallback");
        };
        match (fallback, text) {
            (FallbackNode::LabelledText { kind, text: got }, Some(expected)) => {
                assert_eq!(kind, "checklist");
                assert_eq!(got, expected);
            }
            (FallbackNode::Placeholder { kind }, None) => assert_eq!(kind, "checklist"),
            (other, _) => panic!("unexpected fallback {other:?}"),
        }
    }

    #[test]
    fn test_projection_does_not_touch_document() {
        let doc = BlockDocument::new(vec![Block::paragraph("<b>x</b>")]);
        let before = doc.clone();
        let _ = project(&doc);
        assert_eq!(doc, before);
    }
}
