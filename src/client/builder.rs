use crate::client::core::CompletionRequester;
use crate::client::source::GroqSource;
use crate::config::ClientConfig;
use crate::Result;

/// Builder for a network-backed [`CompletionRequester`].
///
/// Keep this surface area small: a config plus an optional instruction override.
pub struct RequesterBuilder {
    config: Option<ClientConfig>,
    system_prompt: Option<String>,
}

impl RequesterBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            system_prompt: None,
        }
    }

    /// Use an explicit configuration instead of reading the environment.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Falls back to [`ClientConfig::from_env`] when no config was given.
    pub fn build(self) -> Result<CompletionRequester<GroqSource>> {
        let config = match self.config {
            Some(c) => c,
            None => ClientConfig::from_env()?,
        };
        let source = GroqSource::new(&config)?;
        let mut requester = CompletionRequester::new(source).with_model(config.model.as_str());
        if let Some(prompt) = self.system_prompt {
            requester = requester.with_system_prompt(prompt);
        }
        Ok(requester)
    }
}

impl Default for RequesterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
