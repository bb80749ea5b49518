//! Fallback-aware cultural-fact service.

use salem_core::Recipe;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::source::FactSource;

/// Shown when the source answers without a text block.
pub const NO_TEXT_FACT: &str = "This dish has deep cultural roots.";

/// Shown when the request fails.
pub const FALLBACK_FACT: &str = "This beloved dish represents generations of culinary tradition.";

/// Where a displayed fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactOrigin {
    /// Text produced by the source
    Generated,
    /// The source answered with no text
    NoText,
    /// The request failed
    Fallback,
}

impl fmt::Display for FactOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactOrigin::Generated => write!(f, "generated"),
            FactOrigin::NoText => write!(f, "no_text"),
            FactOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// A fact ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CulturalFact {
    /// Display text
    pub text: String,
    /// Provenance
    pub origin: FactOrigin,
}

/// Wraps a [`FactSource`] so callers always get something to display.
#[derive(Clone)]
pub struct CultureService {
    source: Arc<dyn FactSource>,
}

impl CultureService {
    /// Creates a service over `source`.
    pub fn new(source: Arc<dyn FactSource>) -> Self {
        Self { source }
    }

    /// Fetches a fact for `recipe`, substituting a fallback on any failure.
    pub async fn fact_for(&self, recipe: &Recipe) -> CulturalFact {
        match self.source.fetch_fact(recipe).await {
            Ok(Some(text)) => {
                tracing::info!(source = self.source.name(), recipe = %recipe.title, "Cultural fact received");
                CulturalFact {
                    text,
                    origin: FactOrigin::Generated,
                }
            }
            Ok(None) => {
                tracing::info!(source = self.source.name(), "Reply had no text block");
                CulturalFact {
                    text: NO_TEXT_FACT.to_string(),
                    origin: FactOrigin::NoText,
                }
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "Cultural fact request failed, using fallback"
                );
                CulturalFact {
                    text: FALLBACK_FACT.to_string(),
                    origin: FactOrigin::Fallback,
                }
            }
        }
    }
}
