//! HTTP seam. Clients only see [`Transport`], so tests swap in an
//! in-memory implementation.

use crate::ClientError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError>;

    /// POST with an optional JSON body
    async fn post(
        &self,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ClientError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;
        read_response(url, response).await
    }

    async fn post(
        &self,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ClientError> {
        log::debug!("POST {url}");
        let mut request = self.client.post(url).header(ACCEPT, "*/*");
        if let Some(body) = &body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;
        read_response(url, response).await
    }
}

async fn read_response(url: &str, response: reqwest::Response) -> Result<HttpResponse, ClientError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(url, e))?;
    Ok(HttpResponse { status, body })
}

fn transport_error(url: &str, error: reqwest::Error) -> ClientError {
    ClientError::Transport {
        url: url.to_string(),
        message: error.to_string(),
    }
}

/// Check the status and decode the JSON body
pub(crate) fn decode<T: DeserializeOwned>(
    url: &str,
    response: HttpResponse,
) -> Result<T, ClientError> {
    if !response.is_success() {
        return Err(ClientError::Status {
            url: url.to_string(),
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(201, true)]
    #[case(204, true)]
    #[case(301, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn test_is_success(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(HttpResponse::new(status, "").is_success(), expected);
    }

    #[test]
    fn test_decode_rejects_error_status_before_parsing() {
        let result: Result<Vec<u32>, _> = decode("u", HttpResponse::new(500, "[1]"));
        assert!(matches!(result, Err(ClientError::Status { status: 500, .. })));
    }

    #[test]
    fn test_decode_bad_json() {
        let result: Result<Vec<u32>, _> = decode("u", HttpResponse::new(200, "<html>"));
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }
}
