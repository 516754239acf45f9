//! Streaming response pipeline.
//!
//! ```text
//! Raw Bytes → Decoder → Mapper → Fragments
//!     │          │         │
//!   HTTP       SSE     choices[0].delta.content
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Pipeline`] | Decoder + mapper pair |
//! | [`Decoder`] | Trait for stream decoding (SSE) |
//! | [`Mapper`] | Trait for mapping decoded frames to [`Fragment`]s |
//!
//! Errors travel in-band as `Err` items. Both stages stop producing after the first one.

pub mod decode;
pub mod event_map;


use crate::types::events::Fragment;
use crate::{BoxStream, PipeResult};

/// Decoder trait for stream decoding
#[async_trait::async_trait]
pub trait Decoder: Send + Sync {
    /// Decode a byte stream into JSON values
    async fn decode_stream(
        &self,
        input: BoxStream<'static, bytes::Bytes>,
    ) -> PipeResult<BoxStream<'static, serde_json::Value>>;
}

/// Final stage of the pipeline
#[async_trait::async_trait]
pub trait Mapper: Send + Sync {
    /// Map decoded frames to output fragments
    async fn map(
        &self,
        input: BoxStream<'static, serde_json::Value>,
    ) -> PipeResult<BoxStream<'static, Fragment>>;
}

pub struct Pipeline {
    decoder: Box<dyn Decoder>,
    mapper: Box<dyn Mapper>,
}

impl Pipeline {
    pub fn new(decoder: Box<dyn Decoder>, mapper: Box<dyn Mapper>) -> Self {
        Self { decoder, mapper }
    }

    /// SSE framing with OpenAI-compatible `chat.completion.chunk` payloads.
    pub fn chat_completions() -> Self {
        Self::new(
            Box::new(decode::SseDecoder::default()),
            Box::new(event_map::DeltaMapper),
        )
    }

    pub async fn process_stream(
        &self,
        input: BoxStream<'static, bytes::Bytes>,
    ) -> PipeResult<BoxStream<'static, Fragment>> {
        let frames = self.decoder.decode_stream(input).await?;
        self.mapper.map(frames).await
    }
}

/// Decode a raw chat-completions byte stream into fragments.
pub async fn fragment_stream(
    input: BoxStream<'static, bytes::Bytes>,
) -> PipeResult<BoxStream<'static, Fragment>> {
    Pipeline::chat_completions().process_stream(input).await
}
