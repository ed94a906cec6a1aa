//! JSON-RPC 2.0 over HTTP client codec and call driver.
//!
//! This crate lets a generic two-phase remote-call abstraction speak
//! JSON-RPC 2.0 over HTTP: each call is encoded into a request envelope,
//! POSTed, and the response is translated back into a header phase (success
//! or failure, plus the correlation id) and a body phase (the decoded reply).
//!
//! # Components
//!
//! - [`ClientCodec`]: the two-phase contract a codec implements.
//! - [`HttpCodec`]: the JSON-RPC over HTTP implementation, combining the
//!   envelope codec, the single-slot response hand-off, and error mapping.
//! - [`Transport`] / [`HttpTransport`]: the one-POST-per-call shim underneath
//!   the codec.
//! - [`Client`]: the minimal sequential driver, which assigns sequence ids
//!   and runs write, header, and body phases in order.
//!
//! # Example
//!
//! ```no_run
//! use farcall_client::{Client, HttpCodec};
//! use url::Url;
//!
//! # async fn demo() -> farcall_client::ClientResult<()> {
//! let endpoint = Url::parse("http://127.0.0.1:4000/rpc").unwrap();
//! let mut client = Client::new(HttpCodec::new(endpoint));
//!
//! let reply: String = client.call("Mock.Echo", "Hello there").await?;
//! assert_eq!(reply, "Hello there");
//! # Ok(())
//! # }
//! ```
//!
//! Calls must not overlap: drive one call's phases to completion before
//! writing the next. Timeouts and connection policy belong to the
//! `reqwest::Client` injected through [`HttpTransport::with_client`].

pub mod client;
pub mod codec;
pub mod error;
pub mod http;
pub mod transport;

pub use client::Client;
pub use codec::{ClientCodec, RequestHeader, ResponseHeader};
pub use error::{ClientError, ClientResult};
pub use http::HttpCodec;
pub use transport::{HttpTransport, Transport};
