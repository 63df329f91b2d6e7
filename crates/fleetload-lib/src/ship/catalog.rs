//! Ship catalog loading and management.
//!
//! This module handles loading ship definitions from CSV files and provides
//! catalog lookup functionality.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::table::HeaderIndex;

use super::vessel::Ship;

/// Limits describing a ship class, as listed in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSpec {
    pub name: String,
    pub max_weight: f64,
    pub max_containers: usize,
}

impl ShipSpec {
    /// Validate ship limits for correctness.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Create an empty ship with these limits.
    pub fn build(&self) -> Result<Ship> {
        Ship::new(self.name.clone(), self.max_weight, self.max_containers)
    }
}

const SHIP_COLUMNS: &[(&str, &[&str])] = &[
    ("name", &["name", "ship_name", "shipname", "ship"]),
    (
        "max_weight",
        &["max_weight", "max_weight_kg", "maxweight", "maxweightkg", "weight"],
    ),
    (
        "max_containers",
        &["max_containers", "maxcontainers", "containers", "slots"],
    ),
];

/// Collection of ship definitions loaded from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct ShipCatalog {
    ships: HashMap<String, ShipSpec>,
    source: Option<PathBuf>,
}

impl ShipCatalog {
    /// Load a ship catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a ship catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ShipDataValidation {
                message: format!("failed to read ship catalog headers: {err}"),
            })?
            .clone();
        let index = HeaderIndex::resolve(&headers, SHIP_COLUMNS);

        let missing = index.missing(&["name", "max_weight", "max_containers"]);
        if !missing.is_empty() {
            return Err(Error::ShipDataValidation {
                message: format!(
                    "ship catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut ships = HashMap::new();

        for (i, result) in csv_reader.records().enumerate() {
            let row = i + 2; // header is line 1
            let record = result.map_err(|e| Error::ShipDataValidation {
                message: e.to_string(),
            })?;

            let name = index.get(&record, "name").unwrap_or_default();
            let field = |field: &str| -> Result<String> {
                index
                    .get(&record, field)
                    .ok_or_else(|| Error::ShipDataValidation {
                        message: format!("missing {field} for ship '{name}' at row {row}"),
                    })
            };

            let max_weight: f64 = field("max_weight")?.parse().map_err(|e| {
                Error::ShipDataValidation {
                    message: format!("invalid max_weight for ship '{name}' at row {row}: {e}"),
                }
            })?;
            let max_containers: usize = field("max_containers")?.parse().map_err(|e| {
                Error::ShipDataValidation {
                    message: format!("invalid max_containers for ship '{name}' at row {row}: {e}"),
                }
            })?;

            let ship = ShipSpec {
                name: name.clone(),
                max_weight,
                max_containers,
            };
            ship.validate()?;

            let key = normalize_name(&ship.name);
            if ships.contains_key(&key) {
                return Err(Error::DuplicateShipName { name: key });
            }
            ships.insert(key, ship);
        }

        Ok(Self {
            ships,
            source: None,
        })
    }

    /// Get a ship by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ShipSpec> {
        self.ships.get(&normalize_name(name))
    }

    /// Get a ship by name, failing with [`Error::UnknownShip`].
    pub fn require(&self, name: &str) -> Result<&ShipSpec> {
        self.get(name).ok_or_else(|| Error::UnknownShip {
            name: name.to_string(),
            available: self.ship_names(),
        })
    }

    /// Get a sorted list of all ship names.
    pub fn ship_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ships.values().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all ships sorted by name.
    pub fn ships_sorted(&self) -> Vec<&ShipSpec> {
        let mut ships: Vec<&ShipSpec> = self.ships.values().collect();
        ships.sort_by(|a, b| a.name.cmp(&b.name));
        ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a ship name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
