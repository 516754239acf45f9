//! Mock chat-completions server for integration tests

use journal_sentiment::ClientConfig;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Test fixture that owns a mock server standing in for the remote service
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/openai/v1", self.server.url())
    }

    /// Client configuration pointing at the mock server
    pub fn config(&self, api_key: &str) -> ClientConfig {
        ClientConfig::new(api_key).with_base_url(self.base_url())
    }

    /// SSE body carrying one content delta per fragment, then a stop chunk and `[DONE]`
    pub fn sse_body(fragments: &[&str]) -> String {
        let mut body = String::from(
            "data: {\"id\":\"chatcmpl-1\",\"object\":\"chat.completion.chunk\",\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\",\"content\":\"\"},\"finish_reason\":null}]}\n\n",
        );
        for f in fragments {
            let chunk = serde_json::json!({
                "id": "chatcmpl-1",
                "object": "chat.completion.chunk",
                "choices": [{"index": 0, "delta": {"content": f}, "finish_reason": null}]
            });
            body.push_str(&format!("data: {}\n\n", chunk));
        }
        body.push_str(
            "data: {\"id\":\"chatcmpl-1\",\"object\":\"chat.completion.chunk\",\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"stop\"}],\"x_groq\":{\"id\":\"req_1\"}}\n\n",
        );
        body.push_str("data: [DONE]\n\n");
        body
    }

    /// Streaming success for requests authenticated with `api_key`
    pub async fn mock_sse_stream(&mut self, api_key: &str, body: String) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_header("authorization", format!("Bearer {}", api_key).as_str())
            .match_header("accept", "text/event-stream")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "stream": true,
                "stop": null
            })))
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(body)
            .create_async()
            .await
    }

    /// Error response for any request
    pub async fn mock_error_response(&mut self, status: usize, error_body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .create_async()
            .await
    }
}
