use crate::core::{Lawyer, ListingSource};
use crate::utils::error::{DirectoryError, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Reads listing records from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Lawyer>> {
        tracing::debug!("Reading listings from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|e| DirectoryError::DataError {
            message: format!("cannot read listings file {}: {}", self.path.display(), e),
        })?;
        let lawyers = parse_listings(&content)?;
        tracing::info!("Loaded {} listings from {}", lawyers.len(), self.path.display());
        Ok(lawyers)
    }
}

/// Parses a JSON array of listings and checks that every slug is usable.
pub fn parse_listings(content: &str) -> Result<Vec<Lawyer>> {
    let lawyers: Vec<Lawyer> = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    for (index, lawyer) in lawyers.iter().enumerate() {
        if lawyer.slug.trim().is_empty() {
            return Err(DirectoryError::DataError {
                message: format!("listing #{} ('{}') has an empty slug", index, lawyer.name),
            });
        }
        if !seen.insert(lawyer.slug.as_str()) {
            tracing::warn!("Duplicate listing slug '{}' at index {}", lawyer.slug, index);
        }
    }

    Ok(lawyers)
}
