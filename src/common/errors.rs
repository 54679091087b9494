use thiserror::Error;

/// Failure of a call against the remote content API.
///
/// Non-2xx responses are normalized into `Status`, carrying whatever `detail`
/// (or `message`) the backend put in its JSON error body. Everything that
/// prevented a response from being read at all lands in `Transport`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    #[error("API request error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Human-readable form for inline admin banners.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                status,
                status_text,
                detail,
            } => match detail {
                Some(d) => format!("{status} {status_text}: {d}"),
                None => format!("{status} {status_text}"),
            },
            ApiError::Transport(e) => format!("request failed: {e}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_detail() {
        let err = ApiError::Status {
            status: 422,
            status_text: "Unprocessable Entity".to_string(),
            detail: Some("email is required".to_string()),
        };
        assert_eq!(
            err.user_message(),
            "422 Unprocessable Entity: email is required"
        );
    }

    #[test]
    fn status_error_message_without_detail() {
        let err = ApiError::Status {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            detail: None,
        };
        assert_eq!(err.user_message(), "502 Bad Gateway");
    }
}
