//! Error types for the users API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because update and delete against a
//! missing id are the common failure. All other unexpected statuses land in
//! `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
