//! The two-phase client codec contract.
//!
//! A call travels through a [`ClientCodec`] in two phases: a write phase that
//! sends the request, and a read phase split into a header step (success or
//! failure, plus the correlation id) and a body step (the decoded reply
//! payload). The [`Client`](crate::Client) driver sequences the phases; codec
//! implementations translate them onto a concrete wire protocol.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientResult;

/// Descriptor for one outgoing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    /// Fully qualified method name, e.g. "Service.Method".
    pub service_method: String,
    /// Sequence number assigned by the driver, used for correlation.
    pub seq: u64,
}

impl RequestHeader {
    /// Creates a request header.
    pub fn new(service_method: impl Into<String>, seq: u64) -> Self {
        Self {
            service_method: service_method.into(),
            seq,
        }
    }
}

/// Outcome of one call's header phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Sequence number decoded from the response, or 0 when no correlation
    /// id was available (e.g. the server answered with an HTTP error).
    pub seq: u64,
    /// Failure text, if the call failed on the server.
    pub error: Option<String>,
}

impl ResponseHeader {
    /// Returns true if the header reports a successful call.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Client side of a two-phase remote call protocol.
///
/// Implementations carry at most one call at a time: each
/// [`write_request`](Self::write_request) must be followed by a
/// [`read_response_header`](Self::read_response_header) and then exactly one
/// body operation before the next write. Reading a body without a preceding
/// successful header read fails with
/// [`ClientError::BodyBeforeHeader`](crate::ClientError::BodyBeforeHeader).
#[async_trait]
pub trait ClientCodec {
    /// Encodes and sends one request.
    async fn write_request<P>(&mut self, header: &RequestHeader, params: &P) -> ClientResult<()>
    where
        P: Serialize + Sync + ?Sized;

    /// Receives the pending response and decodes its header.
    async fn read_response_header(&mut self) -> ClientResult<ResponseHeader>;

    /// Decodes the pending response's payload into the reply type.
    fn read_response_body<R>(&mut self) -> ClientResult<R>
    where
        R: DeserializeOwned;

    /// Drops the pending response's payload, if any.
    ///
    /// This is the fire-and-forget variant of the body phase and always
    /// succeeds.
    fn discard_response_body(&mut self) -> ClientResult<()>;

    /// Closes the codec. An in-flight response hand-off is not aborted.
    fn close(&mut self) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_header_creation() {
        let header = RequestHeader::new("Mock.Echo", 5);
        assert_eq!(header.service_method, "Mock.Echo");
        assert_eq!(header.seq, 5);
    }

    #[test]
    fn response_header_success() {
        let header = ResponseHeader { seq: 5, error: None };
        assert!(header.is_success());

        let header = ResponseHeader {
            seq: 5,
            error: Some("boom".to_string()),
        };
        assert!(!header.is_success());
    }
}
