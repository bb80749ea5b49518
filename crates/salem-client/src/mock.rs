//! In-memory fact source.

use async_trait::async_trait;
use salem_core::Recipe;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::source::{FactSource, fact_prompt};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    NoText,
    Failure(u16, String),
}

/// A [`FactSource`] that answers from a fixed reply and records the prompts
/// it was asked.
#[derive(Debug)]
pub struct MockFactSource {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockFactSource {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn with_fact(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    /// Answers without any text block.
    pub fn without_text() -> Self {
        Self::with_reply(Reply::NoText)
    }

    /// Always fails with an API error.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Failure(status, message.into()))
    }

    /// Number of fetches so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl FactSource for MockFactSource {
    async fn fetch_fact(&self, recipe: &Recipe) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(fact_prompt(recipe));
        }

        match &self.reply {
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::NoText => Ok(None),
            Reply::Failure(status, message) => Err(Error::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
