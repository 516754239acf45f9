//! Event mapping (JSON Value -> Fragment)

use crate::pipeline::Mapper;
use crate::types::events::{ChatCompletionChunk, Fragment};
use crate::{BoxStream, Error, PipeResult};
use futures::StreamExt;
use serde_json::Value;
use tracing::debug;

/// Maps OpenAI-compatible completion chunks to their first-choice text delta.
///
/// A frame carrying a non-null top-level `error` ends the stream with [`Error::Stream`].
pub struct DeltaMapper;

pub(crate) fn map_frame(frame: Value) -> PipeResult<Fragment> {
    if let Some(err) = frame.get("error").filter(|e| !e.is_null()) {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| err.to_string());
        return Err(Error::Stream { message });
    }

    let chunk: ChatCompletionChunk = serde_json::from_value(frame)?;
    if let Some(reason) = chunk.finish_reason() {
        debug!(finish_reason = reason, "completion finished");
    }
    Ok(chunk.into_fragment())
}

#[async_trait::async_trait]
impl Mapper for DeltaMapper {
    async fn map(
        &self,
        input: BoxStream<'static, Value>,
    ) -> PipeResult<BoxStream<'static, Fragment>> {
        let stream = input
            .map(|item| item.and_then(map_frame))
            // Stop after the first error so nothing is pulled past a failure.
            .scan(false, |failed, item| {
                if *failed {
                    return futures::future::ready(None);
                }
                *failed = item.is_err();
                futures::future::ready(Some(item))
            });
        Ok(Box::pin(stream))
    }
}
