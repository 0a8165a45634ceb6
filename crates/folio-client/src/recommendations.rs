use crate::transport::decode;
use crate::wire::AnyId;
use crate::{ClientError, Transport, ValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

const SUBMIT_FAILED: &str = "Failed to submit recommendation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecommendation")]
pub struct Recommendation {
    pub id: String,
    pub recommender_name: String,
    pub recommender_title: String,
    pub recommender_company: String,
    pub recommender_location: String,
    pub recommendation_text: String,
    pub linkedin_url: String,
    pub recommendation_date: String,
}

#[derive(Deserialize)]
struct RawRecommendation {
    #[serde(default)]
    id: Option<AnyId>,
    #[serde(default)]
    _id: Option<AnyId>,
    #[serde(default)]
    recommender_name: String,
    #[serde(default)]
    recommender_title: String,
    #[serde(default)]
    recommender_company: String,
    #[serde(default)]
    recommender_location: String,
    #[serde(default)]
    recommendation_text: String,
    #[serde(default)]
    linkedin_url: String,
    #[serde(default)]
    recommendation_date: String,
}

impl From<RawRecommendation> for Recommendation {
    fn from(raw: RawRecommendation) -> Self {
        let id = raw
            .id
            .or(raw._id)
            .map(String::from)
            .unwrap_or_else(|| format!("{}-{}", raw.recommender_name, raw.recommendation_date));
        Recommendation {
            id,
            recommender_name: raw.recommender_name,
            recommender_title: raw.recommender_title,
            recommender_company: raw.recommender_company,
            recommender_location: raw.recommender_location,
            recommendation_text: raw.recommendation_text,
            linkedin_url: raw.linkedin_url,
            recommendation_date: raw.recommendation_date,
        }
    }
}

impl Recommendation {
    /// Date for display, or the raw value when it cannot be parsed
    pub fn display_date(&self) -> String {
        format_date(&self.recommendation_date).unwrap_or_else(|| self.recommendation_date.clone())
    }
}

/// Recommendation form as posted to the service
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewRecommendation {
    pub recommender_name: String,
    pub recommender_title: String,
    pub recommender_company: String,
    pub recommender_location: String,
    pub recommendation_text: String,
    pub linkedin_url: String,
    pub email: String,
}

impl NewRecommendation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recommender_name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.recommendation_text.trim().is_empty() {
            return Err(ValidationError::MissingField("recommendation text"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let email_regex =
        EMAIL_REGEX.get_or_init(|| Regex::new(r".+@.+\..+").expect("Invalid email regex"));
    email_regex.is_match(email)
}

/// Long US-English date ("January 5, 2024") from the formats the service
/// emits: RFC 3339, RFC 2822, naive timestamps and plain dates.
pub fn format_date(value: &str) -> Option<String> {
    let value = value.trim();
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(value).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%B %-d, %Y").to_string())
}

pub struct RecommendationsClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl RecommendationsClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Recommendation>, ClientError> {
        let url = format!("{}/getall", self.base_url);
        let response = self.transport.get(&url).await?;
        decode(&url, response)
    }

    /// Validate locally, then post. A rejected submission surfaces the
    /// service's response text.
    pub async fn submit(&self, form: &NewRecommendation) -> Result<(), ClientError> {
        form.validate()?;
        let url = format!("{}/add", self.base_url);
        let body = serde_json::to_value(form).map_err(|e| ClientError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let response = self.transport.post(&url, Some(body)).await?;
        if !response.is_success() {
            let text = response.body.trim();
            log::warn!("Recommendation rejected with status {}", response.status);
            return Err(ClientError::Api(if text.is_empty() {
                SUBMIT_FAILED.to_string()
            } else {
                text.to_string()
            }));
        }
        log::info!("Recommendation from {} submitted", form.recommender_name);
        Ok(())
    }
}
