use crate::{ClientError, ValidationError};

/// Loading lifecycle of a remote resource as shown by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The request failed; retrying may help
    FetchFailed(String),
    /// Data arrived but could not be interpreted
    ParseFailed(String),
    /// The request was refused locally before anything was sent
    Invalid(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(ClientError::Decode { message, .. }) => LoadState::ParseFailed(message),
            Err(ClientError::Validation(e)) => LoadState::Invalid(e.to_string()),
            Err(e) => LoadState::FetchFailed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::FetchFailed(message)
            | LoadState::ParseFailed(message)
            | LoadState::Invalid(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, LoadState::FetchFailed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::FetchFailed(message) => LoadState::FetchFailed(message),
            LoadState::ParseFailed(message) => LoadState::ParseFailed(message),
            LoadState::Invalid(message) => LoadState::Invalid(message),
        }
    }
}

/// Progress of a form submission
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// Rejected by local validation; nothing was sent
    Invalid(ValidationError),
    /// Sent, but the service refused it or could not be reached
    Failed(String),
    Submitted,
}

impl SubmitState {
    pub fn from_result<T>(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(_) => SubmitState::Submitted,
            Err(ClientError::Validation(e)) => SubmitState::Invalid(e),
            Err(e) => SubmitState::Failed(e.to_string()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_result_taxonomy() {
        let ok: LoadState<u8> = LoadState::from_result(Ok(1));
        assert_eq!(ok.ready(), Some(&1));

        let status: LoadState<u8> = LoadState::from_result(Err(ClientError::Status {
            url: "u".to_string(),
            status: 500,
            body: String::new(),
        }));
        assert!(status.can_retry());

        let decode: LoadState<u8> = LoadState::from_result(Err(ClientError::Decode {
            url: "u".to_string(),
            message: "expected value".to_string(),
        }));
        assert_eq!(decode, LoadState::ParseFailed("expected value".to_string()));
        assert!(!decode.can_retry());

        let invalid: LoadState<u8> =
            LoadState::from_result(Err(ValidationError::InvalidEmail.into()));
        assert_eq!(
            invalid,
            LoadState::Invalid("email address is not valid".to_string())
        );
        assert!(!invalid.can_retry());
    }

    #[test]
    fn test_submit_state_taxonomy() {
        assert_eq!(SubmitState::from_result(Ok(())), SubmitState::Submitted);
        assert_eq!(
            SubmitState::from_result::<()>(Err(ValidationError::MissingField("name").into())),
            SubmitState::Invalid(ValidationError::MissingField("name"))
        );
        assert_eq!(
            SubmitState::from_result::<()>(Err(ClientError::Api("Duplicate email".to_string()))),
            SubmitState::Failed("Duplicate email".to_string())
        );
        assert!(!SubmitState::default().is_submitting());
    }

    #[test]
    fn test_map_keeps_failures() {
        let state: LoadState<u8> = LoadState::FetchFailed("down".to_string());
        assert_eq!(state.map(|v| v * 2), LoadState::FetchFailed("down".to_string()));
        assert_eq!(LoadState::Ready(2).map(|v| v * 2), LoadState::Ready(4));
        assert!(LoadState::<u8>::default().is_loading());
    }
}
