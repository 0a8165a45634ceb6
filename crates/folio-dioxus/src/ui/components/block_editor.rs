use crate::ui::components::BlockView;
use anyhow::Context;
use dioxus::prelude::*;
use folio_config::EditorSettings;
use folio_engine::editing::{
    AdapterError, AuthoringAdapter, BlockCapability, Edit, EditorConfig, Locale, Surface,
    ToolRegistry,
};
use folio_engine::model::{Block, BlockContent, BlockDocument, BlockKind};
use folio_engine::render::{RenderNode, project_block};
use std::fs;
use std::path::{Path, PathBuf};

const SURFACE_ID: &str = "article-editor";

/// Editor configuration for the configured locale, tool set and mode
pub fn editor_config(settings: &EditorSettings) -> EditorConfig {
    let locale = Locale::from_tag(&settings.locale).unwrap_or_else(|| {
        log::warn!("Unknown editor locale '{}', using English", settings.locale);
        Locale::english()
    });
    let tools = if settings.basic_tools {
        ToolRegistry::basic()
    } else {
        ToolRegistry::full()
    };
    EditorConfig::for_locale(locale)
        .with_tools(tools)
        .read_only(settings.read_only)
}

/// Write `document` into `dir` as `draft-<savedAt>.json`
pub fn save_draft(dir: &Path, document: &BlockDocument) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create drafts folder {}", dir.display()))?;

    let stamp = document
        .saved_at
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let path = dir.join(format!("draft-{stamp}.json"));
    let json = document.to_json().context("Failed to serialize draft")?;
    fs::write(&path, json).with_context(|| format!("Failed to write draft {}", path.display()))?;

    log::info!("Saved draft to {}", path.display());
    Ok(path)
}

/// Content of the mounted editor, read synchronously
fn current_document(
    adapter: &AuthoringAdapter<BlockCapability>,
) -> Result<BlockDocument, AdapterError> {
    adapter
        .capability()
        .and_then(BlockCapability::document)
        .ok_or(AdapterError::EditorNotReady(adapter.state()))
}

/// Textarea height for the content, capped at 20 rows
fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.lines().count().max(1);
    (line_count as u32).min(20)
}

/// Block editor surface. Owns an [`AuthoringAdapter`] for its lifetime:
/// initialized on mount with `initial` (or the locale's starter content),
/// disposed when the component is dropped. Every edit is reported through
/// `on_change`. With `on_publish` set, the footer offers a Publish button
/// that hands over the current document.
#[component]
pub fn BlockEditor(
    settings: EditorSettings,
    initial: Option<BlockDocument>,
    on_change: EventHandler<BlockDocument>,
    on_publish: Option<EventHandler<BlockDocument>>,
) -> Element {
    let mut adapter = use_signal(|| {
        let mut adapter = AuthoringAdapter::new(BlockCapability::new());
        adapter.on_change(move |document| on_change.call(document));
        if let Err(e) = adapter.initialize(
            &Surface::new(SURFACE_ID),
            initial.clone(),
            editor_config(&settings),
        ) {
            log::error!("Block editor unavailable: {e}");
        }
        adapter
    });
    let mut status = use_signal(|| None::<String>);

    let (config, blocks, document) = {
        let adapter = adapter.read();
        match (adapter.config(), adapter.capability()) {
            (Some(config), Some(capability)) => (
                config.clone(),
                capability.blocks().to_vec(),
                capability.document().unwrap_or_default(),
            ),
            _ => {
                return rsx! {
                    div {
                        class: "editor-unavailable",
                        role: "alert",
                        p { "The editor could not be started." }
                    }
                };
            }
        }
    };

    let mut apply = move |edit: Edit| {
        let mut adapter = adapter.write();
        let Some(capability) = adapter.capability_mut() else {
            return;
        };
        match capability.apply(edit) {
            Ok(_) => status.set(None),
            Err(e) => {
                log::warn!("Edit rejected: {e}");
                status.set(Some(e.to_string()));
            }
        }
    };

    let direction = config.locale.direction.as_str();
    let read_only = config.read_only;
    let last_index = blocks.len().saturating_sub(1);
    let tools: Vec<(BlockKind, String)> = config
        .tools
        .available_kinds()
        .into_iter()
        .map(|kind| (kind, config.locale.tool_name(kind).to_string()))
        .collect();
    let rows: Vec<(String, Block, String, String)> = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let row_key = block
                .identity
                .as_ref()
                .map_or_else(|| index.to_string(), |id| id.to_string());
            let (label, placeholder) = match block.kind() {
                Some(kind) => (
                    config.locale.tool_name(kind).to_string(),
                    row_placeholder(&config, kind),
                ),
                None => (block.content.kind_name().to_string(), String::new()),
            };
            (row_key, block, label, placeholder)
        })
        .collect();
    let words = document.word_count();
    let minutes = document.reading_time_minutes();
    let drafts_path = settings.drafts_path.clone();

    rsx! {
        div {
            class: "block-editor",
            id: SURFACE_ID,
            dir: "{direction}",
            lang: "{config.locale.tag}",
            if !read_only {
                div {
                    class: "editor-toolbar",
                    for (kind, name) in tools {
                        button {
                            key: "{kind}",
                            class: "add-block-button",
                            onclick: move |_| apply(Edit::Append { content: BlockContent::blank(kind) }),
                            "+ {name}"
                        }
                    }
                }
            }
            div {
                class: "editor-rows",
                for (index, (row_key, block, label, placeholder)) in rows.into_iter().enumerate() {
                    EditorRow {
                        key: "{row_key}",
                        index,
                        block: block.clone(),
                        label,
                        placeholder,
                        read_only,
                        is_last: index == last_index,
                        on_edit: move |edit: Edit| apply(edit)
                    }
                }
            }
            div {
                class: "editor-footer",
                span { class: "editor-stats", "{words} words, {minutes} min read" }
                if !read_only {
                    button {
                        class: "clear-button",
                        onclick: move |_| {
                            if let Err(e) = adapter.write().clear() {
                                log::warn!("Failed to clear editor: {e}");
                                status.set(Some(e.to_string()));
                            }
                        },
                        "Clear"
                    }
                }
                button {
                    class: "save-draft-button",
                    onclick: move |_| {
                        let outcome = current_document(&adapter.peek())
                            .map_err(anyhow::Error::from)
                            .and_then(|document| save_draft(&drafts_path, &document));
                        match outcome {
                            Ok(path) => status.set(Some(format!("Draft saved to {}", path.display()))),
                            Err(e) => {
                                log::error!("Failed to save draft: {e:#}");
                                status.set(Some(format!("{e:#}")));
                            }
                        }
                    },
                    "Save draft"
                }
                if let Some(on_publish) = on_publish {
                    button {
                        class: "publish-button",
                        onclick: move |_| match current_document(&adapter.peek()) {
                            Ok(document) => on_publish.call(document),
                            Err(e) => {
                                log::warn!("Nothing to publish: {e}");
                                status.set(Some(e.to_string()));
                            }
                        },
                        "Publish"
                    }
                }
            }
            if let Some(message) = status() {
                p { class: "editor-status", role: "status", "{message}" }
            }
        }
    }
}

fn row_placeholder(config: &EditorConfig, kind: BlockKind) -> String {
    match config.tool_placeholder(kind) {
        Some(placeholder) => placeholder.to_string(),
        None if kind == BlockKind::Paragraph => config.placeholder.clone(),
        None => String::new(),
    }
}

/// One block of the editor: a textarea for kinds with a text field, a
/// rendered preview for everything else.
#[component]
fn EditorRow(
    index: usize,
    block: Block,
    label: String,
    placeholder: String,
    read_only: bool,
    is_last: bool,
    on_edit: EventHandler<Edit>,
) -> Element {
    let kind = block.content.kind_name().to_string();
    let text = block.content.text_field().map(str::to_string);
    let preview = RenderNode {
        key: index,
        kind: project_block(&block.content),
    };

    rsx! {
        div {
            class: "editor-row",
            "data-kind": "{kind}",
            span { class: "editor-row-label", "{label}" }
            if let Some(text) = text {
                textarea {
                    class: "editor-textarea",
                    value: "{text}",
                    placeholder: "{placeholder}",
                    spellcheck: false,
                    readonly: read_only,
                    rows: calculate_textarea_rows(&text),
                    oninput: move |event: Event<FormData>| {
                        on_edit.call(Edit::SetText { index, text: event.value() });
                    }
                }
            } else {
                div {
                    class: "editor-preview",
                    BlockView { node: preview }
                }
            }
            if !read_only {
                div {
                    class: "editor-row-actions",
                    if index > 0 {
                        button {
                            class: "move-up",
                            onclick: move |_| on_edit.call(Edit::Move { from: index, to: index - 1 }),
                            "↑"
                        }
                    }
                    if !is_last {
                        button {
                            class: "move-down",
                            onclick: move |_| on_edit.call(Edit::Move { from: index, to: index + 1 }),
                            "↓"
                        }
                    }
                    button {
                        class: "remove-block",
                        onclick: move |_| on_edit.call(Edit::Remove { index }),
                        "✕"
                    }
                }
            }
        }
    }
}
