use crate::client::source::CompletionSource;
use crate::prompt::SYSTEM_PROMPT;
use crate::request::{ChatRequest, DEFAULT_MODEL};
use crate::types::events::Fragment;
use crate::{BoxStream, Result};
use futures::StreamExt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Per-call summary of a printed stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Fragments received, empty ones included.
    pub fragments: usize,
    pub empty_fragments: usize,
    pub bytes_written: usize,
    pub finish_reason: Option<String>,
    pub elapsed: Duration,
}

/// Write every fragment's text to `out` in arrival order, flushing after each one.
///
/// Nothing is inserted between fragments. On the first error the stream is dropped
/// without being polled again; text already written stays written.
pub async fn print_fragments<W: Write>(
    mut stream: BoxStream<'_, Fragment>,
    out: &mut W,
) -> Result<StreamStats> {
    let started = Instant::now();
    let mut stats = StreamStats::default();

    while let Some(item) = stream.next().await {
        let fragment = item?;
        stats.fragments += 1;
        if fragment.is_empty() {
            stats.empty_fragments += 1;
        } else {
            out.write_all(fragment.text.as_bytes())?;
            out.flush()?;
            stats.bytes_written += fragment.text.len();
        }
        if fragment.finish_reason.is_some() {
            stats.finish_reason = fragment.finish_reason;
        }
    }

    stats.elapsed = started.elapsed();
    Ok(stats)
}

/// Sends a journal entry for sentiment analysis and streams the answer to a writer.
pub struct CompletionRequester<S> {
    source: S,
    system_prompt: String,
    model: String,
}

impl<S: CompletionSource> CompletionRequester<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            system_prompt: SYSTEM_PROMPT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn build_request(&self, journal_entry: &str) -> ChatRequest {
        ChatRequest::analysis(self.system_prompt.as_str(), journal_entry).model(self.model.as_str())
    }

    /// Build the request, open the stream, and print it to `out` until it is exhausted.
    pub async fn request_analysis<W: Write>(
        &self,
        journal_entry: &str,
        out: &mut W,
    ) -> Result<StreamStats> {
        let request = self.build_request(journal_entry);
        debug!(
            model = %request.model,
            entry_chars = journal_entry.chars().count(),
            "requesting analysis"
        );

        let stream = self.source.open_stream(&request).await?;
        let stats = print_fragments(stream, out).await?;

        info!(
            fragments = stats.fragments,
            bytes = stats.bytes_written,
            finish_reason = stats.finish_reason.as_deref().unwrap_or("none"),
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "analysis stream completed"
        );
        Ok(stats)
    }

    /// [`request_analysis`](Self::request_analysis) on standard output.
    pub async fn request_analysis_stdout(&self, journal_entry: &str) -> Result<StreamStats> {
        let mut stdout = std::io::stdout();
        self.request_analysis(journal_entry, &mut stdout).await
    }
}
