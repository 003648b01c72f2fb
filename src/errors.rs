use thiserror::Error;

/// Everything that can go wrong between sending a request upstream and
/// holding a decoded body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },
    #[error("response is not JSON (content-type: {})", .content_type.as_deref().unwrap_or("none"))]
    NotJson { content_type: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("response body has no `data` list")]
    MissingData,
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Timeout => "timeout",
            FetchError::Status { .. } => "status",
            FetchError::NotJson { .. } => "not_json",
            FetchError::Decode(_) => "decode",
            FetchError::MissingData => "missing_data",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(FetchError::Timeout.kind(), "timeout");
        assert_eq!(FetchError::Status { status: 500 }.kind(), "status");
        assert_eq!(FetchError::MissingData.kind(), "missing_data");
        assert_eq!(
            FetchError::NotJson { content_type: Some("text/html".to_string()) }.kind(),
            "not_json"
        );
    }

    #[test]
    fn display_mentions_content_type() {
        let err = FetchError::NotJson { content_type: None };
        assert_eq!(err.to_string(), "response is not JSON (content-type: none)");
        let err = FetchError::NotJson { content_type: Some("text/plain".to_string()) };
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn serde_errors_become_decode() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
