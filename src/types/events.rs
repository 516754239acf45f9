//! Streamed completion events (OpenAI-compatible `chat.completion.chunk`)

use serde::Deserialize;

/// One decoded server-sent event of a streaming chat completion.
///
/// Only the fields this crate reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: Option<Delta>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Text delta of the first choice; missing or null content reads as `""`.
    pub fn delta_text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.delta.as_ref())
            .and_then(|d| d.content.as_deref())
            .unwrap_or("")
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    pub fn into_fragment(self) -> Fragment {
        let finish_reason = self.finish_reason().map(str::to_string);
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.delta)
            .and_then(|d| d.content)
            .unwrap_or_default();
        Fragment {
            text,
            finish_reason,
        }
    }
}

/// Unit of streamed output handed to the printer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Text to append; may be empty.
    pub text: String,
    pub finish_reason: Option<String>,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
        }
    }

    pub fn finished(reason: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            finish_reason: Some(reason.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
