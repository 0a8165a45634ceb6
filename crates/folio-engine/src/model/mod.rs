//! # Block Document Model
//!
//! The canonical shape of an article body, shared by the authoring side
//! ([`crate::editing`]) and the rendering side ([`crate::render`]).
//!
//! Wire format:
//!
//! ```json
//! { "blocks": [{ "kind": "paragraph", "payload": { "text": "Hi" }, "identity": "a1" }],
//!   "schemaVersion": "1.0", "savedAt": 1718000000000 }
//! ```
//!
//! Block order is significant and preserved end to end. A document with zero
//! blocks is valid. Blocks whose kind is not recognized, or whose payload
//! does not match the shape its kind requires, are kept verbatim as
//! [`BlockContent::Unrecognized`] so they survive a load/save cycle.

pub mod kind;
pub mod payload;
pub mod text;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

pub use kind::BlockKind;
pub use payload::*;

/// Schema version stamped on documents produced by this crate
pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("content is empty")]
    Empty,
    #[error("content is not a valid block document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable block identifier used to reconcile blocks across edits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed payload of a block, one variant per [`BlockKind`]
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Heading(HeadingData),
    Paragraph(ParagraphData),
    Image(ImageData),
    List(ListData),
    Quote(QuoteData),
    Code(CodeData),
    Table(TableData),
    Delimiter,
    Warning(WarningData),
    Embed(EmbedData),
    LinkPreview(LinkPreviewData),
    /// Unknown kind, or a known kind with an unusable payload
    Unrecognized { kind: String, payload: Value },
}

impl BlockContent {
    /// Known kind of this content, `None` for unrecognized blocks
    pub fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            BlockContent::Heading(_) => BlockKind::Heading,
            BlockContent::Paragraph(_) => BlockKind::Paragraph,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::List(_) => BlockKind::List,
            BlockContent::Quote(_) => BlockKind::Quote,
            BlockContent::Code(_) => BlockKind::Code,
            BlockContent::Table(_) => BlockKind::Table,
            BlockContent::Delimiter => BlockKind::Delimiter,
            BlockContent::Warning(_) => BlockKind::Warning,
            BlockContent::Embed(_) => BlockKind::Embed,
            BlockContent::LinkPreview(_) => BlockKind::LinkPreview,
            BlockContent::Unrecognized { .. } => return None,
        };
        Some(kind)
    }

    /// Name written to the `kind` field
    pub fn kind_name(&self) -> &str {
        match self {
            BlockContent::Unrecognized { kind, .. } => kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// Decode a raw `(kind, payload)` pair, degrading to `Unrecognized`
    /// instead of failing.
    pub fn decode(kind: String, payload: Value) -> BlockContent {
        let Some(known) = BlockKind::parse(&kind) else {
            return BlockContent::Unrecognized { kind, payload };
        };

        let decoded = match known {
            BlockKind::Heading => serde_json::from_value(payload.clone()).map(BlockContent::Heading),
            BlockKind::Paragraph => {
                serde_json::from_value(payload.clone()).map(BlockContent::Paragraph)
            }
            BlockKind::Image => serde_json::from_value(payload.clone()).map(BlockContent::Image),
            BlockKind::List => serde_json::from_value(payload.clone()).map(BlockContent::List),
            BlockKind::Quote => serde_json::from_value(payload.clone()).map(BlockContent::Quote),
            BlockKind::Code => serde_json::from_value(payload.clone()).map(BlockContent::Code),
            BlockKind::Table => serde_json::from_value(payload.clone()).map(BlockContent::Table),
            BlockKind::Delimiter => Ok(BlockContent::Delimiter),
            BlockKind::Warning => serde_json::from_value(payload.clone()).map(BlockContent::Warning),
            BlockKind::Embed => serde_json::from_value(payload.clone()).map(BlockContent::Embed),
            BlockKind::LinkPreview => {
                serde_json::from_value(payload.clone()).map(BlockContent::LinkPreview)
            }
        };

        decoded.unwrap_or_else(|e| {
            log::warn!("Keeping '{kind}' block as unrecognized, payload did not match: {e}");
            BlockContent::Unrecognized { kind, payload }
        })
    }

    /// Empty content of a known kind, as inserted by an editor toolbar
    pub fn blank(kind: BlockKind) -> BlockContent {
        match kind {
            BlockKind::Heading => BlockContent::Heading(HeadingData {
                text: String::new(),
                level: 2,
            }),
            BlockKind::Paragraph => BlockContent::Paragraph(ParagraphData {
                text: String::new(),
            }),
            BlockKind::Image => BlockContent::Image(ImageData::default()),
            BlockKind::List => BlockContent::List(ListData {
                style: ListStyle::Unordered,
                items: vec![String::new()],
            }),
            BlockKind::Quote => BlockContent::Quote(QuoteData {
                text: String::new(),
                caption: None,
                alignment: Alignment::Left,
            }),
            BlockKind::Code => BlockContent::Code(CodeData {
                code: String::new(),
            }),
            BlockKind::Table => BlockContent::Table(TableData {
                rows: vec![vec![String::new(), String::new()]],
                first_row_is_header: false,
            }),
            BlockKind::Delimiter => BlockContent::Delimiter,
            BlockKind::Warning => BlockContent::Warning(WarningData {
                title: String::new(),
                message: String::new(),
            }),
            BlockKind::Embed => BlockContent::Embed(EmbedData {
                url: String::new(),
                caption: None,
                service: None,
            }),
            BlockKind::LinkPreview => BlockContent::LinkPreview(LinkPreviewData::default()),
        }
    }

    /// The single free-text field an editor edits in place, if the kind has one
    pub fn text_field(&self) -> Option<&str> {
        match self {
            BlockContent::Heading(data) => Some(&data.text),
            BlockContent::Paragraph(data) => Some(&data.text),
            BlockContent::Quote(data) => Some(&data.text),
            BlockContent::Code(data) => Some(&data.code),
            BlockContent::Warning(data) => Some(&data.message),
            _ => None,
        }
    }

    pub fn text_field_mut(&mut self) -> Option<&mut String> {
        match self {
            BlockContent::Heading(data) => Some(&mut data.text),
            BlockContent::Paragraph(data) => Some(&mut data.text),
            BlockContent::Quote(data) => Some(&mut data.text),
            BlockContent::Code(data) => Some(&mut data.code),
            BlockContent::Warning(data) => Some(&mut data.message),
            _ => None,
        }
    }

    fn serialize_payload<S: SerializeStruct>(&self, state: &mut S) -> Result<(), S::Error> {
        match self {
            BlockContent::Heading(data) => state.serialize_field("payload", data),
            BlockContent::Paragraph(data) => state.serialize_field("payload", data),
            BlockContent::Image(data) => state.serialize_field("payload", data),
            BlockContent::List(data) => state.serialize_field("payload", data),
            BlockContent::Quote(data) => state.serialize_field("payload", data),
            BlockContent::Code(data) => state.serialize_field("payload", data),
            BlockContent::Table(data) => state.serialize_field("payload", data),
            BlockContent::Delimiter => state.serialize_field("payload", &serde_json::Map::new()),
            BlockContent::Warning(data) => state.serialize_field("payload", data),
            BlockContent::Embed(data) => state.serialize_field("payload", data),
            BlockContent::LinkPreview(data) => state.serialize_field("payload", data),
            BlockContent::Unrecognized { payload, .. } => state.serialize_field("payload", payload),
        }
    }
}

/// The atomic unit of article content
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub identity: Option<BlockId>,
    pub content: BlockContent,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(alias = "type")]
    kind: String,
    #[serde(default, alias = "data")]
    payload: Value,
    #[serde(default, alias = "id")]
    identity: Option<BlockId>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Block {
            identity: raw.identity,
            content: BlockContent::decode(raw.kind, raw.payload),
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = if self.identity.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Block", field_count)?;
        state.serialize_field("kind", self.content.kind_name())?;
        self.content.serialize_payload(&mut state)?;
        if let Some(identity) = &self.identity {
            state.serialize_field("identity", identity)?;
        }
        state.end()
    }
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            identity: None,
            content,
        }
    }

    pub fn with_identity(identity: BlockId, content: BlockContent) -> Self {
        Self {
            identity: Some(identity),
            content,
        }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::new(BlockContent::Heading(HeadingData {
            text: text.into(),
            level,
        }))
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockContent::Paragraph(ParagraphData { text: text.into() }))
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }
}

/// Ordered sequence of blocks forming one article body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDocument {
    pub blocks: Vec<Block>,
    #[serde(default, alias = "version", skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(default, alias = "time", skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<i64>,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            schema_version: None,
            saved_at: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        if json.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Kinds of every block in order, `None` marking unrecognized blocks
    pub fn kinds(&self) -> Vec<Option<BlockKind>> {
        self.blocks.iter().map(Block::kind).collect()
    }
}
