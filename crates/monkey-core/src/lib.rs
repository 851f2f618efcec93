//! Shared building blocks for Monkey Console.
//!
//! Holds the species record model, the error type used across the workspace,
//! number formatting helpers, and command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
