//! Async query service over the species catalog.
//!
//! [`CatalogService`] owns a [`Catalog`] and exposes its queries as async
//! calls. Each call can be delayed by a configurable latency to exercise
//! suspension points; with the default of zero no timer is ever armed.
//! Blank lookups become [`CatalogError::Validation`] and misses become
//! [`CatalogError::NotFound`], so callers get one `Result` to match on.

use std::time::Duration;

use monkey_core::error::{CatalogError, Result};
use monkey_core::models::MonkeyRecord;
use monkey_data::catalog::Catalog;

/// Message shown when a lookup is attempted with a blank name.
pub const BLANK_NAME_MESSAGE: &str = "Please enter a valid monkey name.";

// ── CatalogService ────────────────────────────────────────────────────────────

/// Async façade over a [`Catalog`].
///
/// # Example
/// ```no_run
/// use monkey_runtime::catalog_service::CatalogService;
/// use monkey_runtime::data::catalog::Catalog;
///
/// # async fn demo() -> monkey_runtime::core::error::Result<()> {
/// let mut service = CatalogService::new(Catalog::from_seed()?);
/// let mandrill = service.find_by_name("mandrill").await?;
/// println!("{mandrill}");
/// # Ok(())
/// # }
/// ```
pub struct CatalogService {
    catalog: Catalog,
    /// Delay applied before every async query.
    latency: Duration,
}

impl CatalogService {
    /// Create a service with no simulated latency.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_latency(catalog, Duration::ZERO)
    }

    /// Create a service that sleeps for `latency` before each async query.
    pub fn with_latency(catalog: Catalog, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Copy of every record in catalog order.
    pub async fn list_all(&self) -> Result<Vec<MonkeyRecord>> {
        self.simulate_latency().await;
        let records = self.catalog.list().to_vec();
        tracing::debug!(count = records.len(), "listed catalog");
        Ok(records)
    }

    /// Look a species up by name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<MonkeyRecord> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("rejected blank lookup");
            return Err(CatalogError::Validation(BLANK_NAME_MESSAGE.to_string()));
        }

        self.simulate_latency().await;

        match self.catalog.find_by_name(name) {
            Some(record) => {
                tracing::debug!(name, "lookup hit");
                Ok(record.clone())
            }
            None => {
                tracing::debug!(name, "lookup miss");
                Err(CatalogError::NotFound(name.to_string()))
            }
        }
    }

    /// Pick one species at random.
    pub async fn random(&mut self) -> Result<MonkeyRecord> {
        self.simulate_latency().await;
        let record = self.catalog.random()?.clone();
        tracing::debug!(name = %record.name, "random pick");
        Ok(record)
    }

    /// Number of species in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.count()
    }

    // ── Private helpers ───────────────────────────────────────────────────

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
