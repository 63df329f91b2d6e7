//! Ship capacity rules and container membership.

use serde::Serialize;
use tracing::debug;

use crate::container::{Container, ContainerKind, ContainerSerial, ContainerYard};
use crate::error::{CapacityLimit, Error, Result};
use crate::output::{ManifestEntry, ShipManifest};

/// Membership record for one container aboard a ship.
///
/// Capacity is reserved by the container's declared `max_load`, which never
/// changes, so the record holds a copy rather than a live reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Berth {
    pub serial: ContainerSerial,
    pub kind: ContainerKind,
    pub max_load: f64,
}

/// A ship with a container count limit and a nominal weight limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ship {
    name: String,
    max_weight: f64,
    max_containers: usize,
    berths: Vec<Berth>,
}

impl Ship {
    /// Create an empty ship, validating its limits.
    pub fn new(name: impl Into<String>, max_weight: f64, max_containers: usize) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::ShipDataValidation {
                message: "ship name must not be empty".to_string(),
            });
        }
        if !max_weight.is_finite() || max_weight <= 0.0 {
            return Err(Error::ShipDataValidation {
                message: "max_weight must be a finite positive number".to_string(),
            });
        }
        if max_containers == 0 {
            return Err(Error::ShipDataValidation {
                message: "max_containers must be at least 1".to_string(),
            });
        }

        Ok(Self {
            name,
            max_weight,
            max_containers,
            berths: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn max_containers(&self) -> usize {
        self.max_containers
    }

    /// Membership records in load order.
    pub fn berths(&self) -> &[Berth] {
        &self.berths
    }

    /// Member serials in load order.
    pub fn serials(&self) -> Vec<ContainerSerial> {
        self.berths.iter().map(|b| b.serial).collect()
    }

    pub fn container_count(&self) -> usize {
        self.berths.len()
    }

    pub fn contains(&self, serial: ContainerSerial) -> bool {
        self.berths.iter().any(|b| b.serial == serial)
    }

    /// Sum of the declared `max_load` of every member, not their live cargo.
    pub fn total_weight(&self) -> f64 {
        self.berths.iter().map(|b| b.max_load).sum()
    }

    pub fn remaining_weight(&self) -> f64 {
        (self.max_weight - self.total_weight()).max(0.0)
    }

    pub fn remaining_slots(&self) -> usize {
        self.max_containers.saturating_sub(self.berths.len())
    }

    /// Check whether `container` could be added without breaking a limit.
    pub fn check_capacity(&self, container: &Container) -> Result<()> {
        let limit = if self.berths.len() >= self.max_containers {
            Some(CapacityLimit::ContainerCount)
        } else if self.total_weight() + container.max_load() > self.max_weight {
            Some(CapacityLimit::Weight)
        } else {
            None
        };

        match limit {
            Some(limit) => Err(Error::CapacityExceeded {
                ship: self.name.clone(),
                serial: container.serial(),
                limit,
            }),
            None => Ok(()),
        }
    }

    /// Put `container` aboard, appending it after the existing members.
    pub fn load_container(&mut self, container: &Container) -> Result<()> {
        self.check_capacity(container)?;
        self.berths.push(Berth {
            serial: container.serial(),
            kind: container.kind(),
            max_load: container.max_load(),
        });
        debug!(
            ship = %self.name,
            serial = %container.serial(),
            count = self.berths.len(),
            total_weight = self.total_weight(),
            "container loaded on ship"
        );
        Ok(())
    }

    /// Remove every member with `serial` and return how many were removed.
    ///
    /// Removing an unknown serial is a no-op.
    pub fn remove_container(&mut self, serial: ContainerSerial) -> usize {
        let before = self.berths.len();
        self.berths.retain(|b| b.serial != serial);
        let removed = before - self.berths.len();
        debug!(ship = %self.name, %serial, removed, "container removed from ship");
        removed
    }

    /// Build a manifest, resolving live loads from `yard`.
    pub fn manifest(&self, yard: &ContainerYard) -> ShipManifest {
        let entries: Vec<ManifestEntry> = self
            .berths
            .iter()
            .enumerate()
            .map(|(idx, berth)| ManifestEntry {
                position: idx + 1,
                serial: berth.serial,
                kind: berth.kind,
                max_load: berth.max_load,
                current_load: yard.get(berth.serial).map(Container::current_load),
            })
            .collect();

        ShipManifest {
            ship: self.name.clone(),
            max_weight: self.max_weight,
            max_containers: self.max_containers,
            container_count: entries.len(),
            total_weight: self.total_weight(),
            total_cargo: entries.iter().filter_map(|e| e.current_load).sum(),
            entries,
        }
    }
}
