use folio_engine::editing::{
    AdapterState, AuthoringAdapter, BlockCapability, Edit, EditorConfig, Locale, Surface,
    TextDirection, ToolRegistry,
};
use folio_engine::model::{Block, BlockContent, BlockDocument, BlockKind};
use folio_engine::render::project;
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn ready(initial: Option<BlockDocument>, config: EditorConfig) -> AuthoringAdapter<BlockCapability> {
    let mut adapter = AuthoringAdapter::new(BlockCapability::new());
    adapter
        .initialize(&Surface::new("editor-holder"), initial, config)
        .unwrap();
    adapter
}

#[test]
fn save_round_trips_initial_content() {
    let initial = BlockDocument::new(vec![
        Block::heading("Title", 2),
        Block::paragraph("Body with <i>style</i>"),
        Block::new(BlockContent::Delimiter),
    ]);
    let adapter = ready(Some(initial.clone()), EditorConfig::default());

    let saved = block_on(adapter.save()).unwrap();
    let contents: Vec<_> = saved.blocks.iter().map(|b| b.content.clone()).collect();
    let expected: Vec<_> = initial.blocks.into_iter().map(|b| b.content).collect();
    assert_eq!(contents, expected);
}

#[test]
fn saving_twice_without_edits_is_identical() {
    let adapter = ready(None, EditorConfig::default());
    let first = block_on(adapter.save()).unwrap();
    let second = block_on(adapter.save()).unwrap();
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn saved_document_survives_serialization() {
    let mut adapter = ready(None, EditorConfig::default());
    adapter
        .capability_mut()
        .unwrap()
        .apply(Edit::SetText {
            index: 1,
            text: "Edited body".to_string(),
        })
        .unwrap();

    let saved = block_on(adapter.save()).unwrap();
    let reloaded = BlockDocument::from_json(&saved.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, saved);
    assert_eq!(project(&reloaded).len(), 2);
}

#[test]
fn change_notifications_follow_edit_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut adapter = AuthoringAdapter::new(BlockCapability::new());
    let sink = seen.clone();
    adapter.on_change(move |doc: BlockDocument| {
        sink.borrow_mut().push(doc.plain_text());
    });
    adapter
        .initialize(
            &Surface::new("editor-holder"),
            Some(BlockDocument::empty()),
            EditorConfig::default(),
        )
        .unwrap();

    let editor = adapter.capability_mut().unwrap();
    for word in ["one", "two", "three"] {
        editor
            .apply(Edit::Append {
                content: Block::paragraph(word).content,
            })
            .unwrap();
    }

    assert_eq!(
        *seen.borrow(),
        vec!["one", "one\n\ntwo", "one\n\ntwo\n\nthree"]
    );
}

#[test]
fn two_editors_with_different_locales_coexist() {
    let english = ready(None, EditorConfig::default());
    let arabic = ready(
        None,
        EditorConfig::for_locale(Locale::arabic()).with_tools(ToolRegistry::basic()),
    );

    let english_config = english.config().unwrap();
    let arabic_config = arabic.config().unwrap();
    assert_eq!(english_config.locale.direction, TextDirection::Ltr);
    assert_eq!(arabic_config.locale.direction, TextDirection::Rtl);
    assert_eq!(english_config.locale.tool_name(BlockKind::Quote), "Quote");
    assert_eq!(arabic_config.locale.tool_name(BlockKind::Quote), "اقتباس");
    assert!(!arabic_config.tools.allows(BlockKind::Image));
    assert!(english_config.tools.allows(BlockKind::Image));
}

#[test]
fn read_only_editor_still_saves() {
    let mut adapter = ready(
        Some(BlockDocument::new(vec![Block::paragraph("fixed")])),
        EditorConfig::default().read_only(true),
    );
    assert!(
        adapter
            .capability_mut()
            .unwrap()
            .apply(Edit::Remove { index: 0 })
            .is_err()
    );
    assert_eq!(block_on(adapter.save()).unwrap().len(), 1);
}

#[test]
fn dispose_then_drop_is_safe() {
    let mut adapter = ready(None, EditorConfig::default());
    adapter.dispose();
    assert_eq!(adapter.state(), AdapterState::Disposed);
    adapter.dispose();
    drop(adapter);
}
