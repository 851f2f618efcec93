//! Console presentation layer for Monkey Console.
//!
//! Provides themes, ASCII art, text views, the console input/output seam,
//! and the interactive menu controller that ties them to the catalog
//! service.

pub mod app;
pub mod art;
pub mod console;
pub mod themes;
pub mod views;

pub use monkey_core as core;
