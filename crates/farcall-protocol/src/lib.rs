//! JSON-RPC 2.0 envelope types and codec for farcall.
//!
//! This crate defines the wire envelopes exchanged by a farcall client and a
//! JSON-RPC 2.0 server, and the pure encode/decode operations over them. It
//! performs no I/O and holds no state; the transport and call sequencing live
//! in `farcall-client`.
//!
//! # Wire Format
//!
//! Requests are serialized as:
//!
//! ```text
//! {"jsonrpc":"2.0","method":"<Service.Method>","params":<args>,"id":<uint>}
//! ```
//!
//! Responses carry exactly one meaningful branch out of `result` and `error`
//! (the other is `null`):
//!
//! ```text
//! {"jsonrpc":"2.0","result":<payload|null>,"error":null,"id":<uint>}
//! {"jsonrpc":"2.0","result":null,"error":{"code":<int>,"message":<string>,"data":<any>},"id":<uint>}
//! ```
//!
//! # Example
//!
//! ```rust
//! use farcall_protocol::{decode_response, encode_request};
//!
//! let bytes = encode_request("Arith.Add", &[1, 2], 7).unwrap();
//! let raw = br#"{"jsonrpc":"2.0","result":3,"error":null,"id":7}"#;
//! let response = decode_response(raw).unwrap();
//! assert_eq!(response.decode_result::<i64>().unwrap(), 3);
//! # let _ = bytes;
//! ```

mod codec;
mod error;
mod types;

pub use codec::{decode_response, encode_request};
pub use error::{ProtocolError, ProtocolResult};
pub use types::{RemoteError, RequestEnvelope, ResponseEnvelope};

/// JSON-RPC protocol version constant.
pub const JSONRPC_VERSION: &str = "2.0";
