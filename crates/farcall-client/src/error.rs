//! Client error types.

use farcall_protocol::ProtocolError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while driving a call through the codec.
///
/// None of these are retried internally, and none are fatal to the codec
/// (except that a [`Closed`](Self::Closed) codec stays closed); each failure
/// belongs to the call whose phase detected it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be completed, or its body could not be
    /// read: connection refused, timeout, DNS failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response violated the JSON-RPC wire format.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Failure reported by the server: the JSON-RPC error message, or the
    /// HTTP status line for a non-2xx response.
    #[error("{0}")]
    Remote(String),

    /// The response body was requested without a preceding successful
    /// response header read.
    #[error("response body requested before reading a response header")]
    BodyBeforeHeader,

    /// The codec has been closed.
    #[error("codec is closed")]
    Closed,
}
