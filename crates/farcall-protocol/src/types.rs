//! Request, response, and error envelope types.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::JSONRPC_VERSION;
use crate::error::{ProtocolError, ProtocolResult};

/// A JSON-RPC request envelope.
///
/// Built fresh for every outgoing call from the call's service/method name,
/// argument value, and sequence number, and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Protocol version (always "2.0").
    pub jsonrpc: String,
    /// Fully qualified method name, e.g. "Service.Method".
    pub method: String,
    /// Call arguments, already converted to a JSON value.
    pub params: Value,
    /// Sequence number assigned by the caller, used for correlation.
    pub id: u64,
}

impl RequestEnvelope {
    /// Creates a request envelope with the current protocol version.
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Checks whether this envelope carries a supported protocol version.
    pub fn is_supported_version(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }
}

/// A JSON-RPC response envelope.
///
/// `result` and `error` are retained raw and decoded lazily: the error object
/// is only parsed when `error` is non-null, and the result payload is only
/// deserialized once the caller supplies a reply type. A JSON `null` and an
/// absent key both decode to `None`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Protocol version reported by the server.
    pub jsonrpc: String,
    /// Raw result payload, if the call succeeded.
    pub result: Option<Box<RawValue>>,
    /// Raw error object, if the call failed on the server.
    pub error: Option<Box<RawValue>>,
    /// Sequence number of the request this response answers.
    #[serde(default)]
    pub id: u64,
}

impl ResponseEnvelope {
    /// Creates a success envelope wrapping the given result value.
    pub fn success<R: Serialize>(id: u64, result: &R) -> ProtocolResult<Self> {
        let raw = serde_json::value::to_raw_value(result).map_err(ProtocolError::Encode)?;
        Ok(Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(raw),
            error: None,
            id,
        })
    }

    /// Creates an error envelope wrapping the given remote error.
    pub fn failure(id: u64, error: RemoteError) -> ProtocolResult<Self> {
        let raw = serde_json::value::to_raw_value(&error).map_err(ProtocolError::Encode)?;
        Ok(Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(raw),
            id,
        })
    }

    /// Parses the error object, if the envelope carries one.
    ///
    /// Returns `Ok(None)` when `error` is null. Fails with
    /// [`ProtocolError::ErrorObject`] when the error object itself is
    /// malformed (e.g. missing the required `code`/`message` fields).
    pub fn remote_error(&self) -> ProtocolResult<Option<RemoteError>> {
        match self.error.as_deref() {
            Some(raw) => serde_json::from_str(raw.get())
                .map(Some)
                .map_err(ProtocolError::ErrorObject),
            None => Ok(None),
        }
    }

    /// Deserializes the result payload into the reply type.
    ///
    /// Fails with [`ProtocolError::NullResult`] when the server returned no
    /// result, and with [`ProtocolError::Payload`] on a shape mismatch.
    pub fn decode_result<R: DeserializeOwned>(&self) -> ProtocolResult<R> {
        let raw = self.result.as_deref().ok_or(ProtocolError::NullResult)?;
        serde_json::from_str(raw.get()).map_err(ProtocolError::Payload)
    }

    /// Checks whether this envelope carries a supported protocol version.
    pub fn is_supported_version(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }
}

/// A well-formed JSON-RPC error object returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional error data.
    #[serde(default)]
    pub data: Option<Value>,
}

impl RemoteError {
    /// Creates a remote error with the given code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Builder: attach additional error data.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for RemoteError {}
