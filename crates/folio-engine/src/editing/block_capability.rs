use super::{
    CapabilityError, ChangeNotifier, Edit, EditingCapability, EditorConfig, Patch, Surface,
    ToolRegistry,
};
use crate::model::{Block, BlockContent, BlockDocument, BlockId, SCHEMA_VERSION};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("editor is not mounted")]
    NotMounted,
    #[error("editor is read-only")]
    ReadOnly,
    #[error("block index {index} is out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("no tool registered for block kind '{0}'")]
    ToolNotRegistered(String),
    #[error("block kind '{0}' has no editable text")]
    NoTextField(String),
}

#[derive(Debug)]
struct Mounted {
    surface: Surface,
    blocks: Vec<Block>,
    read_only: bool,
    tools: ToolRegistry,
    version: u64,
    modified_at: i64,
    notifier: ChangeNotifier,
}

/// In-process block editor driven by [`Edit`] commands.
///
/// Holds the document as an ordered block list, stamps every block with a
/// stable identity on mount and notifies the registered listener after each
/// successful edit.
#[derive(Debug, Default)]
pub struct BlockCapability {
    mounted: Option<Mounted>,
}

impl BlockCapability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.mounted.as_ref().map(|m| &m.surface)
    }

    pub fn blocks(&self) -> &[Block] {
        self.mounted.as_ref().map_or(&[], |m| m.blocks.as_slice())
    }

    /// Incremented on every successful edit or clear
    pub fn version(&self) -> u64 {
        self.mounted.as_ref().map_or(0, |m| m.version)
    }

    pub fn is_read_only(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.read_only)
    }

    /// Snapshot of the current content
    pub fn document(&self) -> Option<BlockDocument> {
        self.mounted.as_ref().map(Mounted::snapshot)
    }

    pub fn apply(&mut self, edit: Edit) -> Result<Patch, EditError> {
        let mounted = self.mounted.as_mut().ok_or(EditError::NotMounted)?;
        if mounted.read_only {
            return Err(EditError::ReadOnly);
        }

        let changed = mounted.apply(edit)?;
        mounted.touch();
        log::debug!(
            "Applied edit on '{}', version {}",
            mounted.surface.id(),
            mounted.version
        );
        mounted.notifier.notify(mounted.snapshot());

        Ok(Patch {
            changed,
            len: mounted.blocks.len(),
            version: mounted.version,
        })
    }
}

impl Mounted {
    fn snapshot(&self) -> BlockDocument {
        BlockDocument {
            blocks: self.blocks.clone(),
            schema_version: Some(SCHEMA_VERSION.to_string()),
            saved_at: Some(self.modified_at),
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.modified_at = chrono::Utc::now().timestamp_millis();
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(EditError::OutOfBounds {
                index,
                len: self.blocks.len(),
            })
        }
    }

    fn check_tool(&self, content: &BlockContent) -> Result<(), EditError> {
        match content.kind() {
            Some(kind) if self.tools.allows(kind) => Ok(()),
            _ => Err(EditError::ToolNotRegistered(content.kind_name().to_string())),
        }
    }

    /// Perform the edit and return the touched indices
    fn apply(&mut self, edit: Edit) -> Result<Vec<usize>, EditError> {
        match edit {
            Edit::Insert { index, content } => {
                if index > self.blocks.len() {
                    return Err(EditError::OutOfBounds {
                        index,
                        len: self.blocks.len(),
                    });
                }
                self.check_tool(&content)?;
                self.blocks
                    .insert(index, Block::with_identity(BlockId::generate(), content));
                Ok(vec![index])
            }
            Edit::Append { content } => {
                self.check_tool(&content)?;
                self.blocks
                    .push(Block::with_identity(BlockId::generate(), content));
                Ok(vec![self.blocks.len() - 1])
            }
            Edit::Replace { index, content } => {
                self.check_index(index)?;
                self.check_tool(&content)?;
                self.blocks[index].content = content;
                Ok(vec![index])
            }
            Edit::SetText { index, text } => {
                self.check_index(index)?;
                let content = &mut self.blocks[index].content;
                let kind = content.kind_name().to_string();
                let field = content
                    .text_field_mut()
                    .ok_or(EditError::NoTextField(kind))?;
                *field = text;
                Ok(vec![index])
            }
            Edit::Remove { index } => {
                self.check_index(index)?;
                self.blocks.remove(index);
                Ok(vec![])
            }
            Edit::Move { from, to } => {
                self.check_index(from)?;
                self.check_index(to)?;
                let block = self.blocks.remove(from);
                self.blocks.insert(to, block);
                Ok((from.min(to)..=from.max(to)).collect())
            }
        }
    }
}

#[async_trait(?Send)]
impl EditingCapability for BlockCapability {
    fn mount(
        &mut self,
        surface: &Surface,
        document: BlockDocument,
        config: &EditorConfig,
        notifier: ChangeNotifier,
    ) -> Result<(), CapabilityError> {
        if surface.id().trim().is_empty() {
            return Err(CapabilityError::SurfaceUnavailable(surface.id().to_string()));
        }
        if let Some(current) = &self.mounted {
            return Err(CapabilityError::AlreadyMounted(current.surface.id().to_string()));
        }

        let blocks = document
            .blocks
            .into_iter()
            .map(|mut block| {
                block.identity.get_or_insert_with(BlockId::generate);
                block
            })
            .collect::<Vec<_>>();
        log::info!(
            "Mounted editor on '{}' with {} blocks",
            surface.id(),
            blocks.len()
        );

        self.mounted = Some(Mounted {
            surface: surface.clone(),
            blocks,
            read_only: config.read_only,
            tools: config.tools.clone(),
            version: 0,
            modified_at: document
                .saved_at
                .unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
            notifier,
        });
        Ok(())
    }

    async fn save(&self) -> Result<BlockDocument, CapabilityError> {
        self.document().ok_or(CapabilityError::NotMounted)
    }

    fn clear(&mut self) -> Result<(), CapabilityError> {
        let mounted = self.mounted.as_mut().ok_or(CapabilityError::NotMounted)?;
        mounted.blocks.clear();
        mounted.touch();
        Ok(())
    }

    fn destroy(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            log::info!("Destroyed editor on '{}'", mounted.surface.id());
        }
    }
}
