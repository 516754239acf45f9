//! Wire types for chat-completion requests and streamed responses.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and text content |
//! | [`MessageRole`] | Message role (system, user, assistant) |
//! | [`ChatCompletionChunk`] | One streamed completion event |
//! | [`Fragment`] | Extracted text delta handed to the printer |

pub mod events;
pub mod message;

pub use events::{ChatCompletionChunk, ChunkChoice, Delta, Fragment};
pub use message::{Message, MessageRole};
