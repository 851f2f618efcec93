//! In-memory species catalog.
//!
//! [`Catalog`] owns an ordered, validated list of [`MonkeyRecord`]s and a
//! seedable random source. The record list is never mutated after
//! construction; only the random source advances.

use std::collections::HashSet;

use monkey_core::error::{CatalogError, Result};
use monkey_core::models::MonkeyRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::seed::seed_records;

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Read-only collection of monkey records in insertion order.
///
/// # Example
/// ```
/// use monkey_data::catalog::Catalog;
///
/// let mut catalog = Catalog::from_seed_with_rng_seed(7).unwrap();
/// assert_eq!(catalog.count(), 15);
/// assert!(catalog.find_by_name("baboon").is_some());
/// let pick = catalog.random().unwrap();
/// assert!(!pick.name.is_empty());
/// ```
#[derive(Debug)]
pub struct Catalog {
    records: Vec<MonkeyRecord>,
    rng: StdRng,
}

impl Catalog {
    /// Build a catalog over `records` with an entropy-seeded random source.
    ///
    /// Fails when a record has a blank name, out-of-range coordinates, or a
    /// name that duplicates an earlier record ignoring case.
    pub fn new(records: Vec<MonkeyRecord>) -> Result<Self> {
        Self::with_rng(records, StdRng::from_entropy())
    }

    /// Build a catalog whose random picks are reproducible for a given seed.
    pub fn with_seed(records: Vec<MonkeyRecord>, seed: u64) -> Result<Self> {
        Self::with_rng(records, StdRng::seed_from_u64(seed))
    }

    /// Build a catalog with an explicit random source.
    pub fn with_rng(records: Vec<MonkeyRecord>, rng: StdRng) -> Result<Self> {
        validate_records(&records)?;
        debug!(count = records.len(), "catalog constructed");
        Ok(Self { records, rng })
    }

    /// Catalog over the compiled-in seed list.
    pub fn from_seed() -> Result<Self> {
        Self::new(seed_records()?)
    }

    /// Catalog over the compiled-in seed list with a fixed random seed.
    pub fn from_seed_with_rng_seed(seed: u64) -> Result<Self> {
        Self::with_seed(seed_records()?, seed)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All records in insertion order.
    pub fn list(&self) -> &[MonkeyRecord] {
        &self.records
    }

    /// Case-insensitive exact match on the record name.
    ///
    /// Surrounding whitespace in `name` is ignored; a blank query never
    /// matches.
    pub fn find_by_name(&self, name: &str) -> Option<&MonkeyRecord> {
        let needle = name.trim();
        if needle.is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.matches_name(needle))
    }

    /// Uniformly pick one record.
    pub fn random(&mut self) -> Result<&MonkeyRecord> {
        if self.records.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = self.rng.gen_range(0..self.records.len());
        debug!(index, "random record selected");
        Ok(&self.records[index])
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check every record and reject case-insensitive duplicate names.
fn validate_records(records: &[MonkeyRecord]) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.name.to_lowercase()) {
            return Err(CatalogError::InvalidRecord {
                name: record.name.clone(),
                reason: "duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
