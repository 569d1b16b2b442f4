use thiserror::Error;

use crate::shared::config::StewConfig;

/// Why an `.ajaxform` submission produced no usable envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    BadResponse(String),
}

impl SubmitError {
    /// Transport failures, timeouts and error statuses all read as "could not connect".
    pub fn is_connectivity(&self) -> bool {
        !matches!(self, SubmitError::BadResponse(_))
    }

    pub fn user_message<'a>(&self, config: &'a StewConfig) -> &'a str {
        if self.is_connectivity() {
            &config.connect_error_message
        } else {
            &config.bad_response_message
        }
    }
}
