//! Plain-text extraction for excerpts and reading-time estimates.

use super::{BlockContent, BlockDocument};
use regex::Regex;
use std::sync::OnceLock;

const WORDS_PER_MINUTE: usize = 200;

/// Strip inline markup tags and decode entities
pub fn strip_inline_markup(html: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let tag_regex = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

    let without_tags = tag_regex.replace_all(html, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}

impl BlockContent {
    /// Readable text carried by this block, without markup
    pub fn plain_text(&self) -> Option<String> {
        let text = match self {
            BlockContent::Heading(data) => strip_inline_markup(&data.text),
            BlockContent::Paragraph(data) => strip_inline_markup(&data.text),
            BlockContent::List(data) => data
                .items
                .iter()
                .map(|item| strip_inline_markup(item))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockContent::Quote(data) => match &data.caption {
                Some(caption) => format!("{}\n{}", strip_inline_markup(&data.text), caption),
                None => strip_inline_markup(&data.text),
            },
            BlockContent::Code(data) => data.code.clone(),
            BlockContent::Table(data) => data
                .rows
                .iter()
                .map(|row| row.join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockContent::Warning(data) => format!("{}\n{}", data.title, data.message),
            BlockContent::Image(data) => data.caption.clone()?,
            BlockContent::Embed(data) => data.caption.clone()?,
            BlockContent::LinkPreview(data) => data.preview_title.clone()?,
            BlockContent::Delimiter => return None,
            BlockContent::Unrecognized { payload, .. } => {
                strip_inline_markup(payload.get("text")?.as_str()?)
            }
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl BlockDocument {
    /// All readable text of the document, one block per paragraph
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| block.content.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Estimated reading time, never less than one minute
    pub fn reading_time_minutes(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// First `max_chars` characters of the plain text, cut at a word boundary
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = self.plain_text().split_whitespace().collect::<Vec<_>>().join(" ");
        if text.chars().count() <= max_chars {
            return text;
        }
        let cut: String = text.chars().take(max_chars).collect();
        let trimmed = match cut.rfind(' ') {
            Some(pos) if pos > 0 => &cut[..pos],
            _ => cut.as_str(),
        };
        format!("{trimmed}…")
    }
}
