use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, Result};
use crate::formatting::format_number;

/// One monkey species in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonkeyRecord {
    /// Species name, unique within a catalog ignoring case.
    pub name: String,
    /// Primary region or habitat.
    pub location: String,
    /// Estimated wild population.
    pub population: u64,
    /// Short description of the species.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Link to a representative picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Latitude in degrees, `[-90, 90]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees, `[-180, 180]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl MonkeyRecord {
    /// Build a record carrying only the required fields.
    pub fn new(name: impl Into<String>, location: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            population,
            details: None,
            image_url: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Case-insensitive name comparison used for lookups and uniqueness.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Check the per-record invariants: non-empty name and in-range
    /// coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(self.invalid(format!("latitude {lat} outside [-90, 90]")));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(self.invalid(format!("longitude {lon} outside [-180, 180]")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::InvalidRecord {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }
}

/// One-line summary: `<Name> - Location: <Location>, Population: <N>`.
impl fmt::Display for MonkeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Location: {}, Population: {}",
            self.name,
            self.location,
            format_number(self.population)
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
