//! Kind-specific payload records.
//!
//! Each payload serializes with camelCase field names. Deserialization is
//! lenient about the shapes produced by the legacy block editor (nested
//! `file.url` for images, `content`/`withHeadings` for tables, `link` +
//! `meta` for link previews, object list items) so stored articles written
//! before the canonical contract still load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingData {
    pub text: String,
    pub level: u8,
}

/// Paragraph text may contain trusted inline markup (`<b>`, `<a>`, `<mark>`...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawImage")]
pub struct ImageData {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub stretched: bool,
    pub with_border: bool,
    pub with_background: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImage {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    file: Option<RawImageFile>,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    stretched: bool,
    #[serde(default)]
    with_border: bool,
    #[serde(default)]
    with_background: bool,
}

#[derive(Deserialize)]
struct RawImageFile {
    url: String,
}

impl TryFrom<RawImage> for ImageData {
    type Error = String;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        let url = raw
            .file
            .map(|file| file.url)
            .or(raw.url)
            .ok_or_else(|| "image payload has no source url".to_string())?;
        Ok(ImageData {
            url,
            caption: raw.caption,
            stretched: raw.stretched,
            with_border: raw.with_border,
            with_background: raw.with_background,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawList")]
pub struct ListData {
    pub style: ListStyle,
    pub items: Vec<String>,
}

#[derive(Deserialize)]
struct RawList {
    #[serde(default)]
    style: ListStyle,
    items: Vec<RawListItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListItem {
    Text(String),
    Nested {
        content: String,
        #[serde(default)]
        items: Vec<RawListItem>,
    },
}

impl RawListItem {
    /// Nested items are flattened depth-first, keeping document order.
    fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            RawListItem::Text(text) => out.push(text),
            RawListItem::Nested { content, items } => {
                out.push(content);
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<RawList> for ListData {
    fn from(raw: RawList) -> Self {
        let mut items = Vec::with_capacity(raw.items.len());
        for item in raw.items {
            item.flatten_into(&mut items);
        }
        ListData {
            style: raw.style,
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    #[serde(alias = "content")]
    pub rows: Vec<Vec<String>>,
    #[serde(default, alias = "withHeadings")]
    pub first_row_is_header: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningData {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    #[serde(alias = "embed")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Provider name reported by the editor (youtube, codepen, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLinkPreview")]
pub struct LinkPreviewData {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLinkPreview {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    meta: Option<RawLinkMeta>,
    #[serde(default)]
    preview_title: Option<String>,
    #[serde(default)]
    preview_description: Option<String>,
    #[serde(default)]
    preview_image: Option<String>,
}

#[derive(Deserialize, Default)]
struct RawLinkMeta {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<RawLinkImage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLinkImage {
    Url(String),
    Object { url: String },
}

impl TryFrom<RawLinkPreview> for LinkPreviewData {
    type Error = String;

    fn try_from(raw: RawLinkPreview) -> Result<Self, Self::Error> {
        let url = raw
            .url
            .or(raw.link)
            .ok_or_else(|| "link preview payload has no target url".to_string())?;
        let meta = raw.meta.unwrap_or_default();
        let meta_image = meta.image.map(|image| match image {
            RawLinkImage::Url(url) => url,
            RawLinkImage::Object { url } => url,
        });
        Ok(LinkPreviewData {
            url,
            preview_title: raw.preview_title.or(meta.title),
            preview_description: raw.preview_description.or(meta.description),
            preview_image: raw.preview_image.or(meta_image),
        })
    }
}
