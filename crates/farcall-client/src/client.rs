//! Sequential call driver over a client codec.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::codec::{ClientCodec, RequestHeader};
use crate::error::{ClientError, ClientResult};

/// Drives remote calls over a [`ClientCodec`], one at a time.
///
/// The client assigns sequence ids and sequences each call's write, header,
/// and body phases. Codecs require calls not to overlap; taking `&mut self`
/// per call enforces that here.
pub struct Client<C> {
    codec: C,
    seq: u64,
}

impl<C: ClientCodec> Client<C> {
    /// Creates a client over the given codec.
    pub fn new(codec: C) -> Self {
        Self { codec, seq: 0 }
    }

    /// Calls `service_method` with `params` and decodes the reply.
    pub async fn call<P, R>(&mut self, service_method: &str, params: &P) -> ClientResult<R>
    where
        P: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.exchange(service_method, params).await?;
        self.codec.read_response_body()
    }

    /// Calls `service_method` for effect only, discarding any reply payload.
    pub async fn call_no_reply<P>(&mut self, service_method: &str, params: &P) -> ClientResult<()>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.exchange(service_method, params).await?;
        self.codec.discard_response_body()
    }

    /// Closes the underlying codec.
    pub fn close(&mut self) -> ClientResult<()> {
        self.codec.close()
    }

    /// Writes one request and reads its response header, mapping a header
    /// failure to a failed call.
    async fn exchange<P>(&mut self, service_method: &str, params: &P) -> ClientResult<()>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.seq += 1;
        let request = RequestHeader::new(service_method, self.seq);
        self.codec.write_request(&request, params).await?;

        let response = self.codec.read_response_header().await?;
        if response.seq != 0 && response.seq != request.seq {
            // Correlation is advisory: responses come off the wire in
            // arrival order, and seq 0 means none was available.
            warn!(
                expected = request.seq,
                received = response.seq,
                "response sequence mismatch"
            );
        }

        if let Some(message) = response.error {
            self.codec.discard_response_body()?;
            return Err(ClientError::Remote(message));
        }
        Ok(())
    }
}
