use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Status(ErrorResponse),

    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode Atom feed: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl ApiError {
    /// HTTP status code of the server response, when the error is a
    /// non-2xx status reported by the server.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(response) => Some(response.status_code),
            _ => None,
        }
    }
}

/// Error payload returned by JIRA on non-2xx responses, combined with the
/// status line captured from the response itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "errorMessages", default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
    #[serde(skip)]
    pub status: String,
    #[serde(skip)]
    pub status_code: u16,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.messages.first() {
            Some(message) => write!(f, "{}: {}", self.status, message),
            None => f.write_str(&self.status),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
