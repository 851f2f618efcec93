use thiserror::Error;

/// All errors produced by the catalog and the menu built on top of it.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Required user input was blank or missing.
    #[error("{0}")]
    Validation(String),

    /// No record matched the query.
    #[error("No monkey found with the name '{0}'")]
    NotFound(String),

    /// A random pick was requested from a catalog with no records.
    #[error("The monkey catalog is empty")]
    EmptyCatalog,

    /// A seed record broke one of the catalog invariants.
    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// The embedded seed document could not be parsed.
    #[error("Failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// Console input or output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for anything else that goes wrong during a query.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// `true` for the lookup-miss path, which the menu renders as a normal
    /// result rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Convenience alias used throughout the monkey crates.
pub type Result<T> = std::result::Result<T, CatalogError>;
