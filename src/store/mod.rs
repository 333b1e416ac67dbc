//! Flat-file persistence for the appliance catalog
//!
//! The store is a plain text file, one appliance per line:
//!
//! ```text
//! Light|Desk Lamp|60|5
//! AC|Bedroom AC|1500|2
//! ```
//!
//! Saving always rewrites the whole file; loading skips lines it cannot
//! make sense of instead of failing the whole read.

use crate::core::{Appliance, ApplianceKind, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of pipe-delimited fields in a store record
const RECORD_FIELDS: usize = 4;

/// Catalog store backed by a pipe-delimited text file
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store over the given file path. The file itself is only
    /// touched by `save` and `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the store with the full catalog, one line per appliance,
    /// in catalog order.
    pub fn save(&self, appliances: &[Appliance]) -> Result<()> {
        let mut out = String::new();
        for appliance in appliances {
            out.push_str(&format!(
                "{}|{}|{}|{}\n",
                appliance.kind.label(),
                appliance.name,
                appliance.power_watts,
                appliance.usage_hours
            ));
        }
        fs::write(&self.path, out)?;
        Ok(())
    }

    /// Read the whole store. A missing file is an empty catalog; lines that
    /// cannot be parsed are dropped without surfacing an error.
    pub fn load(&self) -> Result<Vec<Appliance>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut appliances = Vec::new();
        for line in content.lines() {
            if line.is_empty() {
                continue;
            }
            match parse_record(line) {
                Some(appliance) => appliances.push(appliance),
                None => log::debug!("Skipping malformed store line: {}", line),
            }
        }

        Ok(appliances)
    }
}

/// Parse one `kind|name|watts|hours` record. Fields beyond the fourth are
/// ignored; a name containing `|` therefore corrupts its record (known
/// limitation of the format).
fn parse_record(line: &str) -> Option<Appliance> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < RECORD_FIELDS {
        return None;
    }

    let kind = ApplianceKind::parse(fields[0])?;
    let power_watts: f64 = fields[2].parse().ok()?;
    let usage_hours: f64 = fields[3].parse().ok()?;

    Some(Appliance::new(kind, fields[1], power_watts).with_usage(usage_hours))
}
