//! Chat-completion request payload

use crate::types::message::Message;
use serde::Serialize;

/// Model used when neither the caller nor the environment names one.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f64 = 1.0;
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 1024;
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Request body for `POST /chat/completions`.
///
/// Built once per invocation and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_completion_tokens: u32,
    pub top_p: f64,
    pub stream: bool,
    /// Serialized as `null` when unset.
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// Sentiment-analysis request: the instruction as `system`, the entry as `user`.
    pub fn analysis(system_prompt: impl Into<String>, journal_entry: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![Message::system(system_prompt), Message::user(journal_entry)],
            temperature: DEFAULT_TEMPERATURE,
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
            top_p: DEFAULT_TOP_P,
            stream: true,
            stop: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    pub fn max_completion_tokens(mut self, max: u32) -> Self {
        self.max_completion_tokens = max;
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SYSTEM_PROMPT;
    use crate::types::MessageRole;
    use serde_json::json;

    #[test]
    fn test_analysis_request_has_system_then_user() {
        for entry in ["I had a great day", "", "  multi\nline\tentry  ", "emoji 🙂 \"quoted\""] {
            let req = ChatRequest::analysis(SYSTEM_PROMPT, entry);
            assert_eq!(req.messages.len(), 2);
            assert_eq!(req.messages[0].role, MessageRole::System);
            assert_eq!(req.messages[0].content, SYSTEM_PROMPT);
            assert_eq!(req.messages[1].role, MessageRole::User);
            assert_eq!(req.messages[1].content, entry);
        }
    }

    #[test]
    fn test_wire_payload() {
        let req = ChatRequest::analysis("instr", "entry");
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [
                    {"role": "system", "content": "instr"},
                    {"role": "user", "content": "entry"}
                ],
                "temperature": 1.0,
                "max_completion_tokens": 1024,
                "top_p": 1.0,
                "stream": true,
                "stop": null
            })
        );
    }

    #[test]
    fn test_overrides() {
        let req = ChatRequest::analysis("s", "u")
            .model("llama-3.1-8b-instant")
            .temperature(0.2)
            .max_completion_tokens(64)
            .top_p(0.9)
            .stop(vec!["\n\n".to_string()]);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["model"], "llama-3.1-8b-instant");
        assert_eq!(v["temperature"], 0.2);
        assert_eq!(v["max_completion_tokens"], 64);
        assert_eq!(v["top_p"], 0.9);
        assert_eq!(v["stop"], json!(["\n\n"]));
        assert!(req.stream);
    }
}
