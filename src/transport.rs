//! Network transport for the remote chat-completion service.

pub mod http;

pub use http::{HttpTransport, TransportError};
