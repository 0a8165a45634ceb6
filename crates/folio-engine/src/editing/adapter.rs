use super::{CapabilityError, ChangeNotifier, EditingCapability, EditorConfig, Surface};
use crate::model::BlockDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Uninitialized,
    Ready,
    Disposed,
    /// Mount failed; the handle cannot be initialized again
    InitFailed,
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("editor is not ready (state: {0:?})")]
    EditorNotReady(AdapterState),
    #[error("editor cannot be initialized from state {0:?}")]
    AlreadyInitialized(AdapterState),
    #[error("editor failed to mount: {0}")]
    Mount(#[source] CapabilityError),
    #[error("editor failed to save: {0}")]
    Save(#[source] CapabilityError),
    #[error("editor failed to clear: {0}")]
    Clear(#[source] CapabilityError),
}

/// Lifecycle wrapper around an [`EditingCapability`].
///
/// Owns the capability exclusively: one handle, one mounted editor. The
/// capability is destroyed exactly once, on [`dispose`](Self::dispose) or
/// when the handle is dropped.
pub struct AuthoringAdapter<C: EditingCapability> {
    capability: C,
    state: AdapterState,
    notifier: ChangeNotifier,
    config: Option<EditorConfig>,
}

impl<C: EditingCapability> AuthoringAdapter<C> {
    pub fn new(capability: C) -> Self {
        Self {
            capability,
            state: AdapterState::Uninitialized,
            notifier: ChangeNotifier::new(),
            config: None,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == AdapterState::Ready
    }

    pub fn config(&self) -> Option<&EditorConfig> {
        self.config.as_ref()
    }

    /// Mount the capability on `surface`, seeding it with `initial` or the
    /// config's starter document.
    pub fn initialize(
        &mut self,
        surface: &Surface,
        initial: Option<BlockDocument>,
        config: EditorConfig,
    ) -> Result<(), AdapterError> {
        if self.state != AdapterState::Uninitialized {
            return Err(AdapterError::AlreadyInitialized(self.state));
        }

        let document = initial.unwrap_or_else(|| config.starter.clone());
        match self
            .capability
            .mount(surface, document, &config, self.notifier.clone())
        {
            Ok(()) => {
                log::info!(
                    "Editor ready on '{}' (locale {}, read-only {})",
                    surface.id(),
                    config.locale.tag,
                    config.read_only
                );
                self.state = AdapterState::Ready;
                self.config = Some(config);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to initialize editor on '{}': {}", surface.id(), e);
                self.state = AdapterState::InitFailed;
                Err(AdapterError::Mount(e))
            }
        }
    }

    /// Register the change listener, replacing any previous one. May be
    /// called before initialization.
    pub fn on_change(&self, listener: impl FnMut(BlockDocument) + 'static) {
        self.notifier.set(listener);
    }

    pub async fn save(&self) -> Result<BlockDocument, AdapterError> {
        self.ensure_ready()?;
        self.capability.save().await.map_err(AdapterError::Save)
    }

    pub fn clear(&mut self) -> Result<(), AdapterError> {
        self.ensure_ready()?;
        self.capability.clear().map_err(AdapterError::Clear)
    }

    /// Release the capability. Safe to call in any state and more than once.
    pub fn dispose(&mut self) {
        match self.state {
            AdapterState::Ready | AdapterState::InitFailed => {
                self.capability.destroy();
                self.notifier.clear();
                log::info!("Editor disposed");
            }
            AdapterState::Uninitialized => self.notifier.clear(),
            AdapterState::Disposed => return,
        }
        self.state = AdapterState::Disposed;
    }

    /// Direct access to the mounted capability
    pub fn capability(&self) -> Option<&C> {
        self.is_ready().then_some(&self.capability)
    }

    pub fn capability_mut(&mut self) -> Option<&mut C> {
        if self.is_ready() {
            Some(&mut self.capability)
        } else {
            None
        }
    }

    fn ensure_ready(&self) -> Result<(), AdapterError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(AdapterError::EditorNotReady(self.state))
        }
    }
}

impl<C: EditingCapability> Drop for AuthoringAdapter<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
