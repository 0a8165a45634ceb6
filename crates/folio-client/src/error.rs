use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("article has no content")]
    EmptyContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("{0}")]
    Api(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// The request never produced usable data from the remote side
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. } | ClientError::Status { .. } | ClientError::Api(_)
        )
    }
}
