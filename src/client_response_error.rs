//! Client Response Error type

use std::fmt;
use thiserror::Error;

/// ClientResponseError is a custom Error type that wraps and normalizes
/// any error raised while sending a single API request.
#[derive(Debug, Clone, Error)]
pub struct ClientResponseError {
    /// The URL of the request that failed.
    pub url: String,

    /// HTTP status code (0 if the request never produced a response).
    pub status: u16,

    /// The raw response body text, if any.
    pub body: String,

    /// The error message.
    pub message: String,
}

impl Default for ClientResponseError {
    fn default() -> Self {
        Self {
            url: String::new(),
            status: 0,
            body: String::new(),
            message: "Something went wrong.".to_string(),
        }
    }
}

impl ClientResponseError {
    /// Creates a new ClientResponseError from a non-success response.
    pub fn new(url: &str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "Something went wrong.".to_string());

        Self {
            url: url.to_string(),
            status,
            body: body.to_string(),
            message,
        }
    }

    /// Short one-line description: the status code when a response was
    /// received, the transport error message otherwise.
    pub fn summary(&self) -> String {
        if self.status > 0 {
            self.status.to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for ClientResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status > 0 {
            write!(f, "{} - {}", self.status, self.body)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl From<reqwest::Error> for ClientResponseError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientResponseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("JSON error: {}", err),
            ..Default::default()
        }
    }
}
