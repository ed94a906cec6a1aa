//! JSON-RPC 2.0 over HTTP client codec.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tracing::debug;
use url::Url;

use farcall_protocol::{ResponseEnvelope, decode_response, encode_request};

use crate::codec::{ClientCodec, RequestHeader, ResponseHeader};
use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpTransport, Transport};

/// Client codec speaking JSON-RPC 2.0 over HTTP POST.
///
/// One instance stands for one logical connection and is reused across many
/// sequential calls. The codec carries at most one response in flight through
/// its internal hand-off at any instant, but correlation by sequence id is
/// advisory only: issuing overlapping calls without external serialization
/// can silently mismatch replies, and is a caller contract violation.
pub struct HttpCodec {
    transport: Arc<dyn Transport>,
    // Capacity-1 hand-off from the write phase to the header phase. A write
    // waits here while an earlier response is still unconsumed.
    pending_tx: mpsc::Sender<reqwest::Response>,
    pending_rx: mpsc::Receiver<reqwest::Response>,
    // Decoded envelope retained between a successful header read and the
    // body read that consumes it.
    last_response: Option<ResponseEnvelope>,
}

impl HttpCodec {
    /// Creates a codec posting to `endpoint` with a stock HTTP client.
    pub fn new(endpoint: Url) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(endpoint)))
    }

    /// Creates a codec over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let (pending_tx, pending_rx) = mpsc::channel(1);
        Self {
            transport,
            pending_tx,
            pending_rx,
            last_response: None,
        }
    }

    /// Renders a status line the way HTTP spells it, e.g. "404 Not Found".
    fn status_line(status: StatusCode) -> String {
        match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        }
    }
}

#[async_trait]
impl ClientCodec for HttpCodec {
    async fn write_request<P>(&mut self, header: &RequestHeader, params: &P) -> ClientResult<()>
    where
        P: Serialize + Sync + ?Sized,
    {
        let body = encode_request(&header.service_method, params, header.seq)?;
        debug!(method = %header.service_method, seq = header.seq, "posting request");
        let response = self.transport.post(body).await?;
        self.pending_tx
            .send(response)
            .await
            .map_err(|_| ClientError::Closed)
    }

    async fn read_response_header(&mut self) -> ClientResult<ResponseHeader> {
        let response = self.pending_rx.recv().await.ok_or(ClientError::Closed)?;

        let status = response.status();
        if !status.is_success() {
            // Terminal for this call: the body is dropped unparsed and no
            // correlation id is available.
            debug!(status = %status, "non-2xx response");
            return Ok(ResponseHeader {
                seq: 0,
                error: Some(Self::status_line(status)),
            });
        }

        let body = response.bytes().await?;
        let envelope = decode_response(&body)?;
        let mut header = ResponseHeader {
            seq: envelope.id,
            error: None,
        };

        if let Some(remote) = envelope.remote_error()? {
            debug!(seq = envelope.id, code = remote.code, "remote error response");
            header.error = Some(remote.message);
            return Ok(header);
        }

        debug!(seq = envelope.id, "response header decoded");
        self.last_response = Some(envelope);
        Ok(header)
    }

    fn read_response_body<R>(&mut self) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        let envelope = self
            .last_response
            .take()
            .ok_or(ClientError::BodyBeforeHeader)?;
        Ok(envelope.decode_result()?)
    }

    fn discard_response_body(&mut self) -> ClientResult<()> {
        self.last_response = None;
        Ok(())
    }

    fn close(&mut self) -> ClientResult<()> {
        // A response already handed off stays readable; later writes fail
        // with Closed. Nothing else is held at this layer.
        self.pending_rx.close();
        Ok(())
    }
}
