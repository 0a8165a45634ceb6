/// Inline markup that was sanitized before it entered the document and is
/// emitted verbatim by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One presentational node per block, keyed by the block's index
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub key: usize,
    pub kind: RenderKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderKind {
    Heading(HeadingNode),
    Text(TrustedHtml),
    Figure(FigureNode),
    List(ListNode),
    Quote(QuoteNode),
    Preformatted { code: String },
    Grid(GridNode),
    Separator,
    Callout(CalloutNode),
    Frame(FrameNode),
    Card(CardNode),
    Fallback(FallbackNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingNode {
    /// Always within 1..=6
    pub level: u8,
    pub text: String,
}

impl HeadingNode {
    pub fn tag(&self) -> &'static str {
        match self.level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }

    /// Text size class, largest for level 1
    pub fn size_class(&self) -> &'static str {
        match self.level {
            1 => "text-3xl",
            2 => "text-2xl",
            3 => "text-xl",
            4 => "text-lg",
            _ => "text-base",
        }
    }
}

/// Independent image modifiers. Each flag owns a disjoint set of style
/// properties so any combination composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageStyle {
    pub stretched: bool,
    pub bordered: bool,
    pub backdrop: bool,
}

impl ImageStyle {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["w-full", "h-auto"];
        classes.push(if self.stretched {
            "max-w-none"
        } else {
            "max-w-full"
        });
        if self.bordered {
            classes.push("border border-gray-300 dark:border-gray-600");
        }
        if self.backdrop {
            classes.push("bg-gray-100 dark:bg-gray-800 p-4");
        }
        classes
    }

    pub fn class_attr(&self) -> String {
        self.classes().join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureNode {
    pub src: String,
    pub caption: Option<String>,
    pub style: ImageStyle,
}

impl FigureNode {
    pub fn alt(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub ordered: bool,
    pub items: Vec<TrustedHtml>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteNode {
    pub text: String,
    pub caption: Option<String>,
    pub centered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub header: bool,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridNode {
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalloutNode {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const VIDEO: AspectRatio = AspectRatio {
        width: 16,
        height: 9,
    };

    /// CSS `aspect-ratio` value
    pub fn css(&self) -> String {
        format!("{} / {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameNode {
    pub src: String,
    pub title: String,
    pub caption: Option<String>,
    pub aspect: AspectRatio,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardNode {
    pub href: String,
    /// Preview title, or the url when no metadata was fetched
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FallbackNode {
    /// Unrecognized block that still carries a `text` field
    LabelledText { kind: String, text: String },
    Placeholder { kind: String },
}

impl FallbackNode {
    pub fn label(&self) -> String {
        match self {
            FallbackNode::LabelledText { kind, .. } => format!("Unknown block type: {kind}"),
            FallbackNode::Placeholder { kind } => format!("Unsupported block type: {kind}"),
        }
    }
}
