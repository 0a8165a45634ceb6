use folio_engine::model::{BlockContent, BlockDocument, BlockKind};
use folio_engine::render::{FallbackNode, RenderKind, html, project};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> BlockDocument {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    BlockDocument::from_json(&json).unwrap()
}

#[test]
fn legacy_article_decodes_every_kind() {
    let doc = load_fixture("legacy_article");

    assert_eq!(doc.saved_at, Some(1718000000000));
    assert_eq!(doc.schema_version.as_deref(), Some("2.28.2"));
    assert_eq!(
        doc.kinds(),
        vec![
            Some(BlockKind::Heading),
            Some(BlockKind::Paragraph),
            Some(BlockKind::Image),
            Some(BlockKind::List),
            Some(BlockKind::Quote),
            Some(BlockKind::Code),
            Some(BlockKind::Table),
            Some(BlockKind::Delimiter),
            Some(BlockKind::Warning),
            Some(BlockKind::Embed),
            Some(BlockKind::LinkPreview),
            None,
            None,
        ]
    );
    assert_eq!(doc.blocks[0].identity.as_ref().map(|id| id.as_str()), Some("h1"));
}

#[test]
fn legacy_shapes_are_normalized() {
    let doc = load_fixture("legacy_article");

    let BlockContent::Image(image) = &doc.blocks[2].content else {
        panic!("expected image");
    };
    assert_eq!(image.url, "https://cdn.example.com/cover.png");

    let BlockContent::List(list) = &doc.blocks[3].content else {
        panic!("expected list");
    };
    assert_eq!(list.items, vec!["First", "Nested", "Second"]);

    let BlockContent::LinkPreview(link) = &doc.blocks[10].content else {
        panic!("expected link preview");
    };
    assert_eq!(link.url, "https://example.com");
    assert_eq!(link.preview_image.as_deref(), Some("https://example.com/og.png"));
}

#[test]
fn malformed_known_block_survives_round_trip() {
    let doc = load_fixture("legacy_article");
    let json = doc.to_json().unwrap();
    let reloaded = BlockDocument::from_json(&json).unwrap();

    assert_eq!(reloaded, doc);
    assert!(json.contains(r#""kind":"header","payload":{"level":2}"#));
    assert!(json.contains(r#""kind":"link-preview""#));
}

#[test]
fn projection_has_one_node_per_block_in_order() {
    let doc = load_fixture("legacy_article");
    let nodes = project(&doc);

    assert_eq!(nodes.len(), doc.len());
    assert!(nodes.iter().enumerate().all(|(i, node)| node.key == i));

    let RenderKind::Grid(grid) = &nodes[6].kind else {
        panic!("expected grid");
    };
    assert!(grid.rows[0].header);
    assert!(!grid.rows[1].header);

    let RenderKind::Quote(quote) = &nodes[4].kind else {
        panic!("expected quote");
    };
    assert!(quote.centered);
    assert_eq!(quote.caption, None);

    assert!(matches!(
        &nodes[11].kind,
        RenderKind::Fallback(FallbackNode::Placeholder { kind }) if kind == "checklist"
    ));
    assert!(matches!(
        &nodes[12].kind,
        RenderKind::Fallback(FallbackNode::Placeholder { kind }) if kind == "header"
    ));
}

#[test]
fn static_html_keeps_inline_markup_and_escapes_code() {
    let doc = load_fixture("legacy_article");
    let markup = html::to_html(&project(&doc));

    assert!(markup.starts_with("<article"));
    assert!(markup.contains("Notes on <b>block</b> editors &amp; rendering."));
    assert!(markup.contains("<ol class=\"mb-4 list-decimal list-inside\">"));
    assert!(markup.contains("<code>fn main() {}</code>"));
    assert!(markup.contains("title=\"Embedded content\""));
    assert!(markup.contains("Unsupported block type: checklist"));
}

#[test]
fn reading_time_of_fixture() {
    let doc = load_fixture("legacy_article");
    assert_eq!(doc.reading_time_minutes(), 1);
    assert!(doc.plain_text().starts_with("Building a blog\n\nNotes on block editors & rendering."));
}
