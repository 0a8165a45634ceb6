//! Blog articles: listing, reading and publishing.
//!
//! Article bodies travel as a JSON string (`contentJson`) holding a
//! [`BlockDocument`].

use crate::transport::decode;
use crate::wire::id_from_any;
use crate::{ClientError, Transport, ValidationError};
use chrono::SecondsFormat;
use folio_engine::model::{BlockDocument, ParseError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawArticle")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    pub content_json: String,
    pub date_created: Option<String>,
    pub views: u64,
    pub loves: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(deserialize_with = "id_from_any")]
    id: String,
    title: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    short_description: String,
    #[serde(default)]
    tags: Vec<String>,
    // The service spells the tag list `tages`
    #[serde(default)]
    tages: Vec<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
    #[serde(default)]
    content_json: String,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    loves: u64,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let slug = raw
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&raw.title));
        let tags = if raw.tags.is_empty() { raw.tages } else { raw.tags };
        Article {
            id: raw.id,
            title: raw.title,
            slug,
            short_description: raw.short_description,
            tags,
            cover_image_url: raw.cover_image_url.filter(|url| !url.is_empty()),
            content_json: raw.content_json,
            date_created: raw.date_created,
            views: raw.views,
            loves: raw.loves,
        }
    }
}

impl Article {
    /// Decode the article body
    pub fn content(&self) -> Result<BlockDocument, ParseError> {
        BlockDocument::from_json(&self.content_json)
    }
}

/// Draft submitted to the blog service
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub cover_image_url: String,
    pub content: BlockDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateArticleRequest<'a> {
    title: &'a str,
    slug: &'a str,
    short_description: &'a str,
    tags: &'a [String],
    tages: &'a [String],
    cover_image_url: &'a str,
    content_json: String,
    date_created: String,
}

impl NewArticle {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            ..Default::default()
        }
    }

    /// Change the title and derive the slug from it
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = slugify(&self.title);
    }

    /// Add a trimmed tag unless it is blank or already present
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.short_description.trim().is_empty() {
            return Err(ValidationError::MissingField("short description"));
        }
        if self.content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }

    fn to_request(&self) -> Result<serde_json::Value, ClientError> {
        let content_json = self.content.to_json().map_err(|e| ClientError::Decode {
            url: String::new(),
            message: e.to_string(),
        })?;
        let request = CreateArticleRequest {
            title: &self.title,
            slug: &self.slug,
            short_description: &self.short_description,
            tags: &self.tags,
            tages: &self.tags,
            cover_image_url: &self.cover_image_url,
            content_json,
            date_created: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        serde_json::to_value(request).map_err(|e| ClientError::Decode {
            url: String::new(),
            message: e.to_string(),
        })
    }
}

/// URL-safe slug: lowercase ASCII words joined by dashes
pub fn slugify(title: &str) -> String {
    static STRIP_REGEX: OnceLock<Regex> = OnceLock::new();
    static SPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    let strip = STRIP_REGEX
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("Invalid slug strip regex"));
    let space = SPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Invalid slug space regex"));

    let lower = title.to_lowercase();
    let stripped = strip.replace_all(&lower, "");
    space.replace_all(stripped.trim(), "-").into_owned()
}

pub struct BlogClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl BlogClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Article>, ClientError> {
        let response = self.transport.get(&self.base_url).await?;
        decode(&self.base_url, response)
    }

    pub async fn get(&self, id: &str) -> Result<Article, ClientError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.transport.get(&url).await?;
        decode(&url, response)
    }

    /// Fetch an article and decode its body. A body that is not a block
    /// document is reported as [`ClientError::Decode`].
    pub async fn get_with_content(
        &self,
        id: &str,
    ) -> Result<(Article, BlockDocument), ClientError> {
        let article = self.get(id).await?;
        let content = article.content().map_err(|e| ClientError::Decode {
            url: format!("{}/{}", self.base_url, id),
            message: e.to_string(),
        })?;
        Ok((article, content))
    }

    /// Validate and publish a draft, returning the stored article
    pub async fn create(&self, draft: &NewArticle) -> Result<Article, ClientError> {
        draft.validate()?;
        let body = draft.to_request()?;
        let response = self.transport.post(&self.base_url, Some(body)).await?;
        let article: Article = decode(&self.base_url, response)?;
        log::info!("Published article {} ({})", article.id, article.slug);
        Ok(article)
    }
}
