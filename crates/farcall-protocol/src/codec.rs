//! Pure encode/decode operations over the wire envelopes.

use serde::Serialize;

use crate::error::{ProtocolError, ProtocolResult};
use crate::types::{RequestEnvelope, ResponseEnvelope};

/// Encodes one call as a serialized request envelope.
///
/// The params value is converted to JSON first, so a non-serializable
/// argument (e.g. a map with non-string keys) is reported as
/// [`ProtocolError::Encode`] before anything touches the wire.
pub fn encode_request<P>(method: &str, params: &P, id: u64) -> ProtocolResult<Vec<u8>>
where
    P: Serialize + ?Sized,
{
    let params = serde_json::to_value(params).map_err(ProtocolError::Encode)?;
    let envelope = RequestEnvelope::new(method, params, id);
    serde_json::to_vec(&envelope).map_err(ProtocolError::Encode)
}

/// Decodes one HTTP response body into a response envelope.
///
/// The `result` and `error` branches stay raw; see
/// [`ResponseEnvelope::remote_error`] and [`ResponseEnvelope::decode_result`].
pub fn decode_response(bytes: &[u8]) -> ProtocolResult<ResponseEnvelope> {
    serde_json::from_slice(bytes).map_err(ProtocolError::Envelope)
}
