use super::EditorConfig;
use crate::model::BlockDocument;
use async_trait::async_trait;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Host element an editing capability attaches to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surface {
    id: String,
}

impl Surface {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("surface '{0}' is not available")]
    SurfaceUnavailable(String),
    #[error("editor is already mounted on '{0}'")]
    AlreadyMounted(String),
    #[error("editor is not mounted")]
    NotMounted,
    #[error("failed to serialize editor content: {0}")]
    Serialization(String),
}

type Listener = Box<dyn FnMut(BlockDocument)>;

/// Shared slot holding the single change listener. The capability keeps a
/// clone and calls [`notify`](Self::notify) after each edit; the adapter
/// owns registration.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listener: Rc<RefCell<Option<Listener>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener, replacing any previous one
    pub fn set(&self, listener: impl FnMut(BlockDocument) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn clear(&self) {
        self.listener.borrow_mut().take();
    }

    pub fn is_set(&self) -> bool {
        self.listener.borrow().is_some()
    }

    pub fn notify(&self, document: BlockDocument) {
        // Taken out of the slot so the listener may re-register itself
        let listener = self.listener.borrow_mut().take();
        if let Some(mut listener) = listener {
            listener(document);
            let mut slot = self.listener.borrow_mut();
            if slot.is_none() {
                *slot = Some(listener);
            }
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("registered", &self.is_set())
            .finish()
    }
}

/// A rich-text block editing engine the authoring adapter can drive.
///
/// Implementations are single-threaded: they live on the UI thread next to
/// the surface they render into.
#[async_trait(?Send)]
pub trait EditingCapability {
    /// Attach to `surface` and load `document`. Edits are reported through
    /// `notifier`.
    fn mount(
        &mut self,
        surface: &Surface,
        document: BlockDocument,
        config: &EditorConfig,
        notifier: ChangeNotifier,
    ) -> Result<(), CapabilityError>;

    /// Serialize the current content
    async fn save(&self) -> Result<BlockDocument, CapabilityError>;

    /// Remove every block
    fn clear(&mut self) -> Result<(), CapabilityError>;

    /// Detach and release the surface. Must tolerate repeated calls.
    fn destroy(&mut self);
}
