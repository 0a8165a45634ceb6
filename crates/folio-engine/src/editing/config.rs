//! Per-instance editor configuration.
//!
//! Locale strings, tool registry and the starter document are plain data
//! handed to [`AuthoringAdapter::initialize`](super::AuthoringAdapter::initialize),
//! so several editors with different locales can coexist.

use crate::model::{Block, BlockDocument, BlockKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Localized UI strings, grouped by namespace (`toolNames`, `toolbox`,
/// `tools.image`, ...) and keyed by the English source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiMessages {
    entries: HashMap<String, HashMap<String, String>>,
}

impl UiMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        source: impl Into<String>,
        translated: impl Into<String>,
    ) {
        self.entries
            .entry(namespace.into())
            .or_default()
            .insert(source.into(), translated.into());
    }

    /// Add every `(source, translated)` pair of one namespace
    pub fn extend<'a>(&mut self, namespace: &str, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (source, translated) in pairs {
            self.insert(namespace, source, translated);
        }
    }

    /// Translated text, or `source` itself when no translation exists
    pub fn translate<'a>(&'a self, namespace: &str, source: &'a str) -> &'a str {
        self.entries
            .get(namespace)
            .and_then(|strings| strings.get(source))
            .map(String::as_str)
            .unwrap_or(source)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    /// BCP 47 language tag
    pub tag: String,
    pub direction: TextDirection,
    pub messages: UiMessages,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub fn english() -> Self {
        Self {
            tag: "en".to_string(),
            direction: TextDirection::Ltr,
            messages: UiMessages::new(),
        }
    }

    /// Right-to-left Arabic UI
    pub fn arabic() -> Self {
        let mut messages = UiMessages::new();
        messages.extend(
            "toolbox",
            [
                ("Add", "إضافة"),
                ("Filter", "فلتر"),
                ("Nothing found", "لم يتم العثور على شيء"),
                ("Click to tune", "انقر للتخصيص"),
                ("or drag to move", "أو اسحب للنقل"),
                ("Convert to", "تحويل إلى"),
            ],
        );
        messages.extend(
            "toolNames",
            [
                ("Text", "نص"),
                ("Heading", "عنوان"),
                ("List", "قائمة"),
                ("Warning", "تحذير"),
                ("Quote", "اقتباس"),
                ("Code", "كود"),
                ("Delimiter", "فاصل"),
                ("Table", "جدول"),
                ("Link", "رابط"),
                ("Marker", "تمييز"),
                ("InlineCode", "كود مضمن"),
                ("Image", "صورة"),
                ("Embed", "تضمين"),
            ],
        );
        messages.extend("tools.warning", [("Title", "العنوان"), ("Message", "الرسالة")]);
        messages.extend(
            "tools.image",
            [
                ("Caption", "التسمية التوضيحية"),
                ("Select an Image", "اختر صورة"),
                ("With border", "مع حدود"),
                ("Stretch image", "تمديد الصورة"),
                ("With background", "مع خلفية"),
            ],
        );
        messages.extend("tools.list", [("Ordered", "مرقم"), ("Unordered", "غير مرقم")]);
        messages.extend(
            "tools.table",
            [("With headings", "مع عناوين"), ("Without headings", "بدون عناوين")],
        );
        messages.extend(
            "tools.quote",
            [("Align Left", "محاذاة لليسار"), ("Align Center", "محاذاة للوسط")],
        );
        messages.extend(
            "blockTunes",
            [
                ("Delete", "حذف"),
                ("Move up", "نقل لأعلى"),
                ("Move down", "نقل لأسفل"),
            ],
        );
        messages.extend(
            "placeholders",
            [
                ("Write your article here...", "اكتب مقالك هنا..."),
                ("Enter a heading", "اكتب عنوان..."),
                ("Enter a quote", "اكتب اقتباس..."),
                ("Quote source", "مصدر الاقتباس"),
                ("Warning title", "عنوان التحذير"),
                ("Warning message", "رسالة التحذير"),
                ("Enter code", "اكتب الكود هنا..."),
            ],
        );
        messages.extend(
            "starter",
            [
                ("Article title", "عنوان المقال"),
                ("Start writing your article here...", "ابدأ بكتابة مقالك هنا..."),
            ],
        );

        Self {
            tag: "ar".to_string(),
            direction: TextDirection::Rtl,
            messages,
        }
    }

    /// Preset for a language tag (`en`, `ar`, `ar-SA`, ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Self::english()),
            "ar" => Some(Self::arabic()),
            _ => None,
        }
    }

    /// Localized display name of the tool producing `kind`
    pub fn tool_name(&self, kind: BlockKind) -> &str {
        let source = match kind {
            BlockKind::Heading => "Heading",
            BlockKind::Paragraph => "Text",
            BlockKind::Image => "Image",
            BlockKind::List => "List",
            BlockKind::Quote => "Quote",
            BlockKind::Code => "Code",
            BlockKind::Table => "Table",
            BlockKind::Delimiter => "Delimiter",
            BlockKind::Warning => "Warning",
            BlockKind::Embed => "Embed",
            BlockKind::LinkPreview => "Link",
        };
        self.messages.translate("toolNames", source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub kind: BlockKind,
    pub inline_toolbar: bool,
    pub shortcut: Option<String>,
    /// English placeholder, translated through the `placeholders` namespace
    pub placeholder: Option<String>,
}

impl ToolConfig {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            inline_toolbar: false,
            shortcut: None,
            placeholder: None,
        }
    }

    pub fn inline_toolbar(mut self) -> Self {
        self.inline_toolbar = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Block tools (by name) and inline formatting tools enabled for an editor.
/// Paragraphs are always available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolConfig>,
    inline_tools: BTreeMap<String, Option<String>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, name: impl Into<String>, config: ToolConfig) -> Self {
        self.tools.insert(name.into(), config);
        self
    }

    pub fn with_inline_tool(mut self, name: impl Into<String>, shortcut: Option<&str>) -> Self {
        self.inline_tools
            .insert(name.into(), shortcut.map(str::to_string));
        self
    }

    /// Every block kind plus the marker and inline-code formatters
    pub fn full() -> Self {
        Self::basic()
            .with_tool("embed", ToolConfig::new(BlockKind::Embed))
            .with_tool("linkTool", ToolConfig::new(BlockKind::LinkPreview))
            .with_tool("image", ToolConfig::new(BlockKind::Image))
            .with_inline_tool("marker", Some("CMD+SHIFT+M"))
            .with_inline_tool("inlineCode", Some("CMD+SHIFT+C"))
    }

    /// Reduced tool set of the simple article editor
    pub fn basic() -> Self {
        Self::new()
            .with_tool(
                "header",
                ToolConfig::new(BlockKind::Heading).placeholder("Enter a heading"),
            )
            .with_tool("list", ToolConfig::new(BlockKind::List).inline_toolbar())
            .with_tool(
                "quote",
                ToolConfig::new(BlockKind::Quote)
                    .inline_toolbar()
                    .placeholder("Enter a quote"),
            )
            .with_tool("delimiter", ToolConfig::new(BlockKind::Delimiter))
            .with_tool(
                "warning",
                ToolConfig::new(BlockKind::Warning)
                    .inline_toolbar()
                    .placeholder("Warning message"),
            )
            .with_tool("code", ToolConfig::new(BlockKind::Code).placeholder("Enter code"))
            .with_tool("table", ToolConfig::new(BlockKind::Table).inline_toolbar())
    }

    pub fn get(&self, name: &str) -> Option<&ToolConfig> {
        self.tools.get(name)
    }

    pub fn tool_for(&self, kind: BlockKind) -> Option<&ToolConfig> {
        self.tools.values().find(|tool| tool.kind == kind)
    }

    pub fn allows(&self, kind: BlockKind) -> bool {
        kind == BlockKind::Paragraph || self.tool_for(kind).is_some()
    }

    /// Insertable kinds in toolbox order, paragraph first
    pub fn available_kinds(&self) -> Vec<BlockKind> {
        let mut kinds = vec![BlockKind::Paragraph];
        kinds.extend(
            BlockKind::ALL
                .into_iter()
                .filter(|kind| *kind != BlockKind::Paragraph && self.allows(*kind)),
        );
        kinds
    }

    pub fn inline_shortcut(&self, name: &str) -> Option<&str> {
        self.inline_tools.get(name).and_then(|s| s.as_deref())
    }

    pub fn has_inline_tool(&self, name: &str) -> bool {
        self.inline_tools.contains_key(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub read_only: bool,
    pub placeholder: String,
    pub locale: Locale,
    pub tools: ToolRegistry,
    /// Seed content used when no initial document is supplied
    pub starter: BlockDocument,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::for_locale(Locale::english())
    }
}

impl EditorConfig {
    /// Full tool set with placeholder and starter text in the locale's language
    pub fn for_locale(locale: Locale) -> Self {
        let placeholder = locale
            .messages
            .translate("placeholders", "Write your article here...")
            .to_string();
        let starter = starter_document(
            locale.messages.translate("starter", "Article title"),
            locale
                .messages
                .translate("starter", "Start writing your article here..."),
        );
        Self {
            read_only: false,
            placeholder,
            locale,
            tools: ToolRegistry::full(),
            starter,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_starter(mut self, starter: BlockDocument) -> Self {
        self.starter = starter;
        self
    }

    /// Translated placeholder for a tool, if it declares one
    pub fn tool_placeholder(&self, kind: BlockKind) -> Option<&str> {
        let source = self.tools.tool_for(kind)?.placeholder.as_deref()?;
        Some(self.locale.messages.translate("placeholders", source))
    }
}

/// Default starting content: one level-1 heading and one paragraph
pub fn starter_document(title: &str, body: &str) -> BlockDocument {
    BlockDocument::new(vec![Block::heading(title, 1), Block::paragraph(body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_falls_back_to_source() {
        let english = Locale::english();
        assert_eq!(english.messages.translate("toolNames", "Heading"), "Heading");
        assert!(english.messages.is_empty());
    }

    #[test]
    fn test_arabic_is_rtl_and_translated() {
        let arabic = Locale::arabic();
        assert_eq!(arabic.direction, TextDirection::Rtl);
        assert_eq!(arabic.tool_name(BlockKind::Table), "جدول");
        assert_eq!(arabic.tool_name(BlockKind::Paragraph), "نص");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("ar-SA").map(|l| l.tag), Some("ar".to_string()));
        assert_eq!(Locale::from_tag("EN").map(|l| l.direction), Some(TextDirection::Ltr));
        assert!(Locale::from_tag("fr").is_none());
    }

    #[test]
    fn test_default_starter_document() {
        let config = EditorConfig::default();
        assert_eq!(
            config.starter.kinds(),
            vec![Some(BlockKind::Heading), Some(BlockKind::Paragraph)]
        );
        assert_eq!(config.placeholder, "Write your article here...");
    }

    #[test]
    fn test_localized_starter_document() {
        let config = EditorConfig::for_locale(Locale::arabic());
        assert_eq!(config.placeholder, "اكتب مقالك هنا...");
        assert_eq!(
            config.starter.blocks[0],
            Block::heading("عنوان المقال", 1)
        );
    }

    #[test]
    fn test_basic_registry_excludes_media() {
        let tools = ToolRegistry::basic();
        assert!(tools.allows(BlockKind::Paragraph));
        assert!(tools.allows(BlockKind::Table));
        assert!(!tools.allows(BlockKind::Image));
        assert!(!tools.allows(BlockKind::Embed));
        assert!(!tools.has_inline_tool("marker"));
    }

    #[test]
    fn test_full_registry() {
        let tools = ToolRegistry::full();
        assert_eq!(tools.available_kinds().len(), BlockKind::ALL.len());
        assert_eq!(tools.available_kinds()[0], BlockKind::Paragraph);
        assert_eq!(tools.inline_shortcut("marker"), Some("CMD+SHIFT+M"));
        assert_eq!(tools.get("linkTool").map(|t| t.kind), Some(BlockKind::LinkPreview));
    }

    #[test]
    fn test_empty_registry_still_allows_paragraphs() {
        let tools = ToolRegistry::new();
        assert_eq!(tools.available_kinds(), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn test_tool_placeholder_is_localized() {
        let config = EditorConfig::for_locale(Locale::arabic());
        assert_eq!(config.tool_placeholder(BlockKind::Heading), Some("اكتب عنوان..."));
        assert_eq!(config.tool_placeholder(BlockKind::Delimiter), None);
    }
}
