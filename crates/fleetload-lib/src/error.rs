use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::container::{ContainerKind, ContainerSerial};

/// Convenient result alias for the fleet loading library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which ship limit a rejected container would have broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityLimit {
    /// The ship already carries `max_containers` containers.
    ContainerCount,
    /// The declared maximum loads would sum past `max_weight`.
    Weight,
}

impl fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CapacityLimit::ContainerCount => "container count limit reached",
            CapacityLimit::Weight => "weight limit exceeded",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a load would push a container past its maximum load.
    #[error(
        "overfill in container {serial}: loading {attempted} onto {current_load} exceeds max load {max_load}"
    )]
    Overfill {
        serial: ContainerSerial,
        attempted: f64,
        current_load: f64,
        max_load: f64,
    },

    /// Raised when a ship cannot take another container.
    #[error("cannot load container {serial} on ship {ship}: {limit}")]
    CapacityExceeded {
        ship: String,
        serial: ContainerSerial,
        limit: CapacityLimit,
    },

    /// Raised when a load amount is negative or not a finite number.
    #[error("invalid load weight {weight}: must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// Raised when container construction parameters fail validation.
    #[error("invalid container: {message}")]
    InvalidContainer { message: String },

    /// Raised when a serial number string cannot be parsed.
    #[error("invalid container serial '{value}': expected KON-<L|G|C>-<n>")]
    InvalidSerial { value: String },

    /// Raised when a kind's serial counter cannot issue another number.
    #[error("no serial numbers left for {kind} containers")]
    SerialsExhausted { kind: ContainerKind },

    /// Raised when a serial is not known to the yard.
    #[error("unknown container: {serial}")]
    UnknownContainer { serial: ContainerSerial },

    /// Raised when a hazard notice is requested from a variant without that capability.
    #[error("container {serial} cannot issue hazard notices")]
    HazardNotSupported { serial: ContainerSerial },

    /// Raised when ship data fails validation.
    #[error("invalid ship data: {message}")]
    ShipDataValidation { message: String },

    /// Raised when duplicate ship names are encountered during catalog load.
    #[error("duplicate ship name encountered: {name}")]
    DuplicateShipName { name: String },

    /// Raised when a ship name could not be found in the catalog.
    #[error("unknown ship name: {name}{}", format_suggestions(.available))]
    UnknownShip {
        name: String,
        available: Vec<String>,
    },

    /// Raised when a cargo plan row fails validation.
    #[error("invalid cargo plan row {row}: {message}")]
    CargoPlanValidation { row: usize, message: String },

    /// Raised when a CSV input file does not exist.
    #[error("input file not found at {path}")]
    InputNotFound { path: PathBuf },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(
            ". Available ships: {}",
            available
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
