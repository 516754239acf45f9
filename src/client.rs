//! Completion requester: builds the analysis request, opens the stream, prints fragments.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod source;

pub use builder::RequesterBuilder;
pub use core::{print_fragments, CompletionRequester, StreamStats};
pub use source::{CompletionSource, GroqSource, StaticSource};
