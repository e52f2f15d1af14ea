use crate::config::DEFAULT_ERROR_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("{}", http_message(.status, .message))]
    Http { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

fn http_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Network response was not ok (HTTP {status})"),
    }
}

impl TrendError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_prefers_backend_detail() {
        let error = TrendError::Http {
            status: 500,
            message: Some("An error occurred: quota exceeded".to_string()),
        };
        assert_eq!(error.user_message(), "An error occurred: quota exceeded");
    }

    #[test]
    fn test_http_error_without_detail() {
        let error = TrendError::Http {
            status: 502,
            message: None,
        };
        assert_eq!(
            error.user_message(),
            "Network response was not ok (HTTP 502)"
        );
    }

    #[test]
    fn test_empty_message_uses_generic_fallback() {
        let error = TrendError::Http {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(error.user_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_parse_error_message() {
        let error = TrendError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(
            error.user_message(),
            "Failed to parse response: expected value at line 1 column 1"
        );
    }
}
