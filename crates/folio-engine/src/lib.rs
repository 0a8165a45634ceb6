pub mod editing;
pub mod gesture;
pub mod model;
pub mod render;

// Re-export key types for easier usage
pub use editing::{AuthoringAdapter, BlockCapability, EditorConfig, Locale};
pub use gesture::{SwipeConfig, SwipeDirection, SwipeGesture, SwipeRecognizer, TouchPoint};
pub use model::{Block, BlockContent, BlockDocument, BlockId, BlockKind, ParseError};
pub use render::{RenderKind, RenderNode, project};
