use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when crawling Commons categories
#[derive(Debug, Error)]
pub enum CommonsError {
    /// HTTP request error (transport failure or per-query timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reported by the MediaWiki API
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// Malformed root specification (empty category name, non-numeric depth)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Error object returned by the MediaWiki API
///
/// The API reports logical failures inside an HTTP 200 body as
/// `{"error": {"code": ..., "info": ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// Machine-readable error code
    #[serde(default)]
    pub code: String,
    /// Human-readable error message
    #[serde(default)]
    pub info: String,
    /// HTTP status code, when the error came from a non-2xx response
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.info)
    }
}

impl CommonsError {
    /// Returns true for failures of the remote query itself, as opposed to
    /// caller mistakes (`InvalidArgument`).
    ///
    /// A remote-query failure aborts only the affected subtree during
    /// traversal; an invalid argument fails the whole operation up front.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api(_) | Self::Serde(_))
    }
}

/// Maps a serde deserialization error to a `CommonsError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> CommonsError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    CommonsError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from a non-2xx response body
///
/// Attempts to parse the MediaWiki error envelope, falling back to plain text
/// on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> CommonsError {
    #[derive(Deserialize)]
    struct Envelope {
        error: ApiErrorObject,
    }

    let status_code = Some(status.as_u16());

    if let Ok(env) = serde_json::from_slice::<Envelope>(body) {
        let mut obj = env.error;
        obj.status_code = status_code;
        return CommonsError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    CommonsError::Api(ApiErrorObject {
        code: format!("http_{}", status.as_u16()),
        info: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        status_code,
    })
}
