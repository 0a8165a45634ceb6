use std::fmt;

/// The fixed set of block kinds an article body can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Image,
    List,
    Quote,
    Code,
    Table,
    Delimiter,
    Warning,
    Embed,
    LinkPreview,
}

impl BlockKind {
    pub const ALL: [BlockKind; 11] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::List,
        BlockKind::Quote,
        BlockKind::Code,
        BlockKind::Table,
        BlockKind::Delimiter,
        BlockKind::Warning,
        BlockKind::Embed,
        BlockKind::LinkPreview,
    ];

    /// Wire name written into `kind`
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::Table => "table",
            BlockKind::Delimiter => "delimiter",
            BlockKind::Warning => "warning",
            BlockKind::Embed => "embed",
            BlockKind::LinkPreview => "link-preview",
        }
    }

    /// Resolve a wire name, including the names used by the legacy editor
    /// output (`header`, `linkTool`).
    pub fn parse(name: &str) -> Option<BlockKind> {
        let kind = match name {
            "heading" | "header" => BlockKind::Heading,
            "paragraph" => BlockKind::Paragraph,
            "image" => BlockKind::Image,
            "list" => BlockKind::List,
            "quote" => BlockKind::Quote,
            "code" => BlockKind::Code,
            "table" => BlockKind::Table,
            "delimiter" => BlockKind::Delimiter,
            "warning" => BlockKind::Warning,
            "embed" => BlockKind::Embed,
            "link-preview" | "linkTool" => BlockKind::LinkPreview,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
