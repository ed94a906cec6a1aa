//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while encoding or decoding envelopes.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The request params value could not be serialized.
    #[error("failed to encode request params: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not a well-formed response envelope.
    #[error("malformed response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The envelope's error field is not a well-formed error object.
    #[error("malformed error object: {0}")]
    ErrorObject(#[source] serde_json::Error),

    /// The result payload does not match the expected reply type.
    #[error("result does not match the expected type: {0}")]
    Payload(#[source] serde_json::Error),

    /// A result was expected but the server returned none.
    #[error("result is null")]
    NullResult,
}
