//! # salem-cli
//!
//! Terminal front end for the Salem recipe book.
//!
//! - Configuration file and environment handling
//! - Subcommands for listing, viewing, scaling, routing, and cultural notes
//! - A line-driven browse session over the core intent dispatcher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
