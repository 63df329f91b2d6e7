//! Cargo containers, their load rules, and the yard that builds them.
//!
//! This module is organized into focused submodules:
//!
//! - [`serial`] - Serial numbers and per-kind counters
//! - [`hazard`] - Advisory hazard notification capability
//! - [`yard`] - Container factory and registry
//! - [`constants`] - Load policy fractions
//!
//! # Example
//!
//! ```
//! use fleetload_lib::container::{ContainerYard, RecordingNotifier};
//!
//! let mut yard = ContainerYard::new();
//! let serial = yard.build_liquid(10_000.0, true).unwrap();
//!
//! let notifier = RecordingNotifier::new();
//! yard.load(serial, 6_000.0, &notifier).unwrap();
//!
//! // Over the 50% hazardous limit: advisory notice, load still succeeds.
//! assert_eq!(notifier.len(), 1);
//! assert_eq!(yard.get(serial).unwrap().current_load(), 6_000.0);
//! ```

pub mod constants;
pub mod hazard;
pub mod serial;
pub mod yard;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub use constants::{GAS_RESIDUE_FRACTION, HAZARDOUS_LIQUID_LIMIT, SAFE_LIQUID_LIMIT};
pub use hazard::{HazardNotice, HazardNotifier, RecordingNotifier, Tee, TracingNotifier};
pub use serial::{ContainerSerial, SerialGenerator, SERIAL_PREFIX};
pub use yard::ContainerYard;

/// The three container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerKind {
    /// Single-letter type code used in serial numbers.
    pub fn code(self) -> char {
        match self {
            ContainerKind::Liquid => 'L',
            ContainerKind::Gas => 'G',
            ContainerKind::Refrigerated => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'L' => Some(ContainerKind::Liquid),
            'G' => Some(ContainerKind::Gas),
            'C' => Some(ContainerKind::Refrigerated),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Liquid => "liquid",
            ContainerKind::Gas => "gas",
            ContainerKind::Refrigerated => "refrigerated",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContainerKind {
    type Err = Error;

    /// Accepts the label (`liquid`) or the type code (`L`), case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let kind = match value.to_ascii_lowercase().as_str() {
            "liquid" | "l" => Some(ContainerKind::Liquid),
            "gas" | "g" => Some(ContainerKind::Gas),
            "refrigerated" | "reefer" | "c" => Some(ContainerKind::Refrigerated),
            _ => None,
        };
        kind.ok_or_else(|| Error::InvalidContainer {
            message: format!("unknown container kind '{value}'"),
        })
    }
}

/// Variant-specific container data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerVariant {
    Liquid { hazardous: bool },
    /// Pressure is informational; no behavior keys off it.
    Gas { pressure: f64 },
    /// Temperature is informational; no behavior keys off it.
    Refrigerated { temperature: f64 },
}

impl ContainerVariant {
    pub fn kind(&self) -> ContainerKind {
        match self {
            ContainerVariant::Liquid { .. } => ContainerKind::Liquid,
            ContainerVariant::Gas { .. } => ContainerKind::Gas,
            ContainerVariant::Refrigerated { .. } => ContainerKind::Refrigerated,
        }
    }
}

/// Construction parameters for a container, before a serial is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerSpec {
    pub max_load: f64,
    pub variant: ContainerVariant,
}

impl ContainerSpec {
    pub fn liquid(max_load: f64, hazardous: bool) -> Self {
        Self {
            max_load,
            variant: ContainerVariant::Liquid { hazardous },
        }
    }

    pub fn gas(max_load: f64, pressure: f64) -> Self {
        Self {
            max_load,
            variant: ContainerVariant::Gas { pressure },
        }
    }

    pub fn refrigerated(max_load: f64, temperature: f64) -> Self {
        Self {
            max_load,
            variant: ContainerVariant::Refrigerated { temperature },
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.variant.kind()
    }

    /// Validate construction parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        if !self.max_load.is_finite() || self.max_load <= 0.0 {
            return Err(Error::InvalidContainer {
                message: "max_load must be a finite positive number".to_string(),
            });
        }

        match self.variant {
            ContainerVariant::Gas { pressure } if !pressure.is_finite() => {
                Err(Error::InvalidContainer {
                    message: "pressure must be a finite number".to_string(),
                })
            }
            ContainerVariant::Refrigerated { temperature } if !temperature.is_finite() => {
                Err(Error::InvalidContainer {
                    message: "temperature must be a finite number".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// A cargo container.
///
/// `current_load` always stays within `0..=max_load`; every mutation goes
/// through [`Container::load`] or [`Container::unload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    serial: ContainerSerial,
    max_load: f64,
    current_load: f64,
    variant: ContainerVariant,
}

impl Container {
    /// Create an empty container. The serial's kind must match the variant in `spec`.
    pub fn new(serial: ContainerSerial, spec: ContainerSpec) -> Result<Self> {
        spec.validate()?;
        if serial.kind() != spec.kind() {
            return Err(Error::InvalidContainer {
                message: format!("serial {serial} does not match a {} container", spec.kind()),
            });
        }

        Ok(Self {
            serial,
            max_load: spec.max_load,
            current_load: 0.0,
            variant: spec.variant,
        })
    }

    pub fn serial(&self) -> ContainerSerial {
        self.serial
    }

    pub fn kind(&self) -> ContainerKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &ContainerVariant {
        &self.variant
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    pub fn free_capacity(&self) -> f64 {
        self.max_load - self.current_load
    }

    /// Largest single load a liquid container takes without raising a hazard notice.
    pub fn safety_limit(&self) -> Option<f64> {
        match self.variant {
            ContainerVariant::Liquid { hazardous: true } => {
                Some(self.max_load * HAZARDOUS_LIQUID_LIMIT)
            }
            ContainerVariant::Liquid { hazardous: false } => Some(self.max_load * SAFE_LIQUID_LIMIT),
            _ => None,
        }
    }

    /// Whether this variant carries the hazard-notifying capability.
    pub fn is_hazard_notifying(&self) -> bool {
        matches!(
            self.variant,
            ContainerVariant::Liquid { .. } | ContainerVariant::Gas { .. }
        )
    }

    /// Send a hazard notice on behalf of this container.
    ///
    /// Gas containers expose this but never call it during their own loads.
    pub fn notify_hazard(&self, notifier: &dyn HazardNotifier, message: &str) -> Result<()> {
        if !self.is_hazard_notifying() {
            return Err(Error::HazardNotSupported {
                serial: self.serial,
            });
        }
        notifier.notify_hazard(&HazardNotice::new(self.serial, message));
        Ok(())
    }

    /// Add `weight` to the current load.
    ///
    /// Liquid containers first compare the single requested amount with
    /// their safety limit and raise an advisory notice when it is exceeded.
    /// Every variant then fails with [`Error::Overfill`] if the result would
    /// pass `max_load`, leaving the current load untouched.
    pub fn load(&mut self, weight: f64, notifier: &dyn HazardNotifier) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }

        if let Some(limit) = self.safety_limit() {
            if weight > limit {
                let message = format!("Attempted unsafe load in {}", self.serial);
                self.notify_hazard(notifier, &message)?;
            }
        }

        if self.current_load + weight > self.max_load {
            return Err(Error::Overfill {
                serial: self.serial,
                attempted: weight,
                current_load: self.current_load,
                max_load: self.max_load,
            });
        }

        self.current_load += weight;
        debug!(serial = %self.serial, weight, current_load = self.current_load, "container loaded");
        Ok(())
    }

    /// Empty the container and return the amount removed.
    ///
    /// Gas containers keep [`GAS_RESIDUE_FRACTION`] of their current load.
    pub fn unload(&mut self) -> f64 {
        let before = self.current_load;
        self.current_load = match self.variant {
            ContainerVariant::Gas { .. } => before * GAS_RESIDUE_FRACTION,
            _ => 0.0,
        };
        debug!(serial = %self.serial, remaining = self.current_load, "container unloaded");
        before - self.current_load
    }
}
