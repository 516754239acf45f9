//! # journal-sentiment
//!
//! Sends a journal entry and a fixed sentiment-analysis instruction to a hosted
//! chat-completion model (Groq's OpenAI-compatible API by default) and streams the
//! generated text to a writer, fragment by fragment, as it arrives.
//!
//! The crate does not interpret the model's answer: output is the plain concatenation of
//! the streamed text deltas. There is no retry and no caching; every failure propagates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use journal_sentiment::{ClientConfig, RequesterBuilder, DEFAULT_JOURNAL_ENTRY};
//!
//! #[tokio::main]
//! async fn main() -> journal_sentiment::Result<()> {
//!     let requester = RequesterBuilder::new()
//!         .config(ClientConfig::from_env()?)
//!         .build()?;
//!
//!     requester.request_analysis_stdout(DEFAULT_JOURNAL_ENTRY).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Completion requester and fragment sources |
//! | [`config`] | Credential and endpoint configuration |
//! | [`pipeline`] | SSE decoding and delta extraction |
//! | [`prompt`] | Compiled-in instruction and default entry |
//! | [`request`] | Chat-completion request payload |
//! | [`transport`] | Authenticated HTTP transport |
//! | [`types`] | Messages and streamed chunk types |

pub mod client;
pub mod config;
pub mod pipeline;
pub mod prompt;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{
    print_fragments, CompletionRequester, CompletionSource, GroqSource, RequesterBuilder,
    StaticSource, StreamStats,
};
pub use config::ClientConfig;
pub use prompt::{DEFAULT_JOURNAL_ENTRY, SYSTEM_PROMPT};
pub use request::ChatRequest;
pub use types::{
    events::Fragment,
    message::{Message, MessageRole},
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A specialized Result for pipeline operations
pub type PipeResult<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `PipeResult<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = PipeResult<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
