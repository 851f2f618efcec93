//! Compiled-in seed data.
//!
//! The species list ships inside the binary as a JSON document and is parsed
//! once at startup into [`MonkeyRecord`]s.

use monkey_core::error::Result;
use monkey_core::models::MonkeyRecord;
use tracing::debug;

/// Embedded seed document, one JSON object per species.
const SEED_JSON: &str = include_str!("../data/monkeys.json");

/// Parse the embedded seed document.
pub fn seed_records() -> Result<Vec<MonkeyRecord>> {
    let records = parse_records(SEED_JSON)?;
    debug!(count = records.len(), "seed records parsed");
    Ok(records)
}

/// Parse a JSON array of species records.
pub fn parse_records(json: &str) -> Result<Vec<MonkeyRecord>> {
    Ok(serde_json::from_str(json)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
