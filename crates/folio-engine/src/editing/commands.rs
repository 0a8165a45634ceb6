use crate::model::BlockContent;

/// Structural edits accepted by [`BlockCapability`](super::BlockCapability)
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Insert a new block before `index` (`index == len` appends)
    Insert { index: usize, content: BlockContent },
    Append { content: BlockContent },
    /// Swap the content of a block, keeping its identity
    Replace { index: usize, content: BlockContent },
    /// Replace the primary text of a text-bearing block
    SetText { index: usize, text: String },
    Remove { index: usize },
    Move { from: usize, to: usize },
}
