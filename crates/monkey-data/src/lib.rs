//! Data layer for Monkey Console.
//!
//! Loads the compiled-in species seed list and answers read-only queries
//! against it: listing, case-insensitive name lookup, random selection and
//! counting.

pub mod catalog;
pub mod seed;

pub use monkey_core as core;
