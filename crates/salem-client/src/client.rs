//! Anthropic Messages API fact source.

use async_trait::async_trait;
use salem_core::Recipe;
use serde::{Deserialize, Serialize};

use crate::config::CultureConfig;
use crate::error::{Error, Result};
use crate::source::{FactSource, fact_prompt};

/// Request body of the Messages API.
#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) max_tokens: u32,
    pub(crate) messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
    pub(crate) role: &'static str,
    pub(crate) content: String,
}

/// The part of the Messages API response we read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first `text` block, if any.
    pub(crate) fn first_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
    }
}

/// Fetches cultural facts from the Anthropic Messages API.
///
/// One request per call: no retry, no streaming.
pub struct AnthropicFactSource {
    config: CultureConfig,
    http: reqwest::Client,
}

impl AnthropicFactSource {
    /// Creates a source from configuration.
    pub fn new(config: CultureConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, http })
    }

    /// The configuration in use.
    pub fn config(&self) -> &CultureConfig {
        &self.config
    }

    pub(crate) fn request_body<'a>(&'a self, recipe: &Recipe) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: fact_prompt(recipe),
            }],
        }
    }
}

/// Maps a reply to a fact.
///
/// Any JSON body is read for a text block, whatever the status: an API error
/// object has none and yields `Ok(None)`. Only a body that is not JSON is an
/// error.
pub(crate) fn parse_reply(status: u16, body: &str) -> Result<Option<String>> {
    match serde_json::from_str::<MessagesResponse>(body) {
        Ok(parsed) => {
            if !(200..300).contains(&status) {
                tracing::warn!(status, "Messages API returned an error reply");
            }
            Ok(parsed.first_text())
        }
        Err(_) if !(200..300).contains(&status) => Err(Error::Api {
            status,
            message: body.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl FactSource for AnthropicFactSource {
    async fn fetch_fact(&self, recipe: &Recipe) -> Result<Option<String>> {
        if self.config.endpoint.is_empty() {
            return Err(Error::config("no endpoint configured"));
        }

        tracing::debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            recipe = %recipe.title,
            "Requesting cultural fact"
        );

        let mut request = self
            .http
            .post(&self.config.endpoint)
            .header("anthropic-version", &self.config.anthropic_version)
            .json(&self.request_body(recipe));
        match self.config.api_key.as_deref() {
            Some(api_key) => request = request.header("x-api-key", api_key),
            None => tracing::warn!("No API key configured (set ANTHROPIC_API_KEY)"),
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse_reply(status.as_u16(), &body)
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}
