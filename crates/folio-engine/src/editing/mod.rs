/*!
 * # Authoring Adapter
 *
 * Wraps a rich block-editing engine behind a small lifecycle API so the UI
 * never talks to the engine directly.
 *
 * ## Architecture Overview
 *
 * ### 1. Capability seam
 * - Any editor engine implements [`EditingCapability`]: mount, save, clear, destroy
 * - [`BlockCapability`] is the in-process engine, edited through [`Edit`] commands
 *   that return a [`Patch`]
 *
 * ### 2. Explicit lifecycle
 * - [`AuthoringAdapter`] moves `Uninitialized -> Ready -> Disposed`, or
 *   `Uninitialized -> InitFailed` when mounting fails
 * - `save` and `clear` require `Ready`; `dispose` is idempotent and also runs on drop
 *
 * ### 3. Per-instance configuration
 * - [`EditorConfig`] carries locale strings, text direction, tool set and the
 *   starter document, so editors with different locales can coexist
 *
 * ### 4. Change notification
 * - A single listener slot ([`ChangeNotifier`]) shared between adapter and
 *   capability; it is emptied on dispose so no notification outlives the editor
 *
 * ## Usage Pattern
 *
 * ```rust
 * use folio_engine::editing::*;
 * use folio_engine::model::BlockContent;
 *
 * let mut adapter = AuthoringAdapter::new(BlockCapability::new());
 * adapter.on_change(|doc| println!("{} blocks", doc.len()));
 * adapter
 *     .initialize(&Surface::new("editor-holder"), None, EditorConfig::default())
 *     .unwrap();
 *
 * if let Some(editor) = adapter.capability_mut() {
 *     editor.apply(Edit::Append { content: BlockContent::Delimiter }).unwrap();
 * }
 *
 * let saved = futures::executor::block_on(adapter.save()).unwrap();
 * assert_eq!(saved.len(), 3);
 * adapter.dispose();
 * ```
 */

pub mod adapter;
pub mod block_capability;
pub mod capability;
pub mod commands;
pub mod config;
pub mod patch;

pub use adapter::{AdapterError, AdapterState, AuthoringAdapter};
pub use block_capability::{BlockCapability, EditError};
pub use capability::{CapabilityError, ChangeNotifier, EditingCapability, Surface};
pub use commands::Edit;
pub use config::{
    EditorConfig, Locale, TextDirection, ToolConfig, ToolRegistry, UiMessages, starter_document,
};
pub use patch::Patch;
