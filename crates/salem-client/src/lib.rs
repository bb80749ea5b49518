#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

//! # salem-client
//!
//! Cultural-fact client for the Salem recipe book:
//! - Async [`FactSource`] trait with an Anthropic implementation
//! - In-memory [`MockFactSource`] for tests and dry runs
//! - [`CultureService`], which turns any failure into a fallback note

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod service;
pub mod source;

pub use client::AnthropicFactSource;
pub use config::CultureConfig;
pub use error::{Error, Result};
pub use mock::MockFactSource;
pub use service::{CulturalFact, CultureService, FactOrigin};
pub use source::{FactSource, fact_prompt};
