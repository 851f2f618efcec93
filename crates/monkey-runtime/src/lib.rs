//! Runtime layer for Monkey Console.
//!
//! Wraps the in-memory catalog in an async query service so the menu talks
//! to it the same way it would talk to an I/O-backed store.

pub mod catalog_service;

pub use monkey_core as core;
pub use monkey_data as data;
