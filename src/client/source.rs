//! Where fragments come from.
//!
//! [`GroqSource`] talks to the remote service; [`StaticSource`] replays a fixed sequence and
//! is what tests and offline runs plug in instead.

use crate::config::ClientConfig;
use crate::pipeline::Pipeline;
use crate::request::ChatRequest;
use crate::transport::HttpTransport;
use crate::types::events::Fragment;
use crate::{BoxStream, Error, Result};
use std::sync::Mutex;

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Opens one lazily-consumed fragment stream per request.
#[async_trait::async_trait]
pub trait CompletionSource: Send + Sync {
    async fn open_stream(&self, request: &ChatRequest) -> Result<BoxStream<'static, Fragment>>;
}

/// OpenAI-compatible chat-completions endpoint (Groq by default).
pub struct GroqSource {
    transport: HttpTransport,
    pipeline: Pipeline,
}

impl GroqSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            pipeline: Pipeline::chat_completions(),
        })
    }
}

#[async_trait::async_trait]
impl CompletionSource for GroqSource {
    async fn open_stream(&self, request: &ChatRequest) -> Result<BoxStream<'static, Fragment>> {
        let bytes = self
            .transport
            .post_stream(CHAT_COMPLETIONS_PATH, request)
            .await?;
        self.pipeline.process_stream(bytes).await
    }
}

/// Replays a prepared stream exactly once.
pub struct StaticSource {
    stream: Mutex<Option<BoxStream<'static, Fragment>>>,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StaticSource {
    pub fn from_stream(stream: BoxStream<'static, Fragment>) -> Self {
        Self {
            stream: Mutex::new(Some(stream)),
            last_request: Mutex::new(None),
        }
    }

    pub fn from_results(items: Vec<Result<Fragment>>) -> Self {
        Self::from_stream(Box::pin(futures::stream::iter(items)))
    }

    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_results(
            texts
                .into_iter()
                .map(|t| Ok(Fragment::text(t)))
                .collect(),
        )
    }

    /// Request passed to the most recent `open_stream` call.
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl CompletionSource for StaticSource {
    async fn open_stream(&self, request: &ChatRequest) -> Result<BoxStream<'static, Fragment>> {
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        self.stream
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
            .ok_or_else(|| Error::Stream {
                message: "stream already consumed".to_string(),
            })
    }
}
