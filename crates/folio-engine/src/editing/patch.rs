/// Result of applying an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Block indices touched by the edit, in the post-edit document
    pub changed: Vec<usize>,
    /// Number of blocks after the edit
    pub len: usize,
    pub version: u64,
}
