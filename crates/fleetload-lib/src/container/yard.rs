//! Container factory and registry.

use crate::error::{Error, Result};

use super::{Container, ContainerSerial, ContainerSpec, HazardNotifier, SerialGenerator};

/// Builds containers and keeps them, in creation order, addressable by serial.
///
/// The yard owns the container objects and the serial counters. Ships only
/// hold membership records that point back here by serial.
#[derive(Debug, Clone, Default)]
pub struct ContainerYard {
    serials: SerialGenerator,
    containers: Vec<Container>,
}

impl ContainerYard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from `spec` and return its serial.
    ///
    /// A spec that fails validation does not consume a serial.
    pub fn build(&mut self, spec: ContainerSpec) -> Result<ContainerSerial> {
        spec.validate()?;
        let serial = self.serials.next(spec.kind())?;
        let container = Container::new(serial, spec)?;
        self.containers.push(container);
        Ok(serial)
    }

    pub fn build_liquid(&mut self, max_load: f64, hazardous: bool) -> Result<ContainerSerial> {
        self.build(ContainerSpec::liquid(max_load, hazardous))
    }

    pub fn build_gas(&mut self, max_load: f64, pressure: f64) -> Result<ContainerSerial> {
        self.build(ContainerSpec::gas(max_load, pressure))
    }

    pub fn build_refrigerated(
        &mut self,
        max_load: f64,
        temperature: f64,
    ) -> Result<ContainerSerial> {
        self.build(ContainerSpec::refrigerated(max_load, temperature))
    }

    pub fn get(&self, serial: ContainerSerial) -> Option<&Container> {
        self.containers.iter().find(|c| c.serial() == serial)
    }

    pub fn get_mut(&mut self, serial: ContainerSerial) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.serial() == serial)
    }

    /// Look up a container, failing with [`Error::UnknownContainer`].
    pub fn require(&self, serial: ContainerSerial) -> Result<&Container> {
        self.get(serial).ok_or(Error::UnknownContainer { serial })
    }

    fn require_mut(&mut self, serial: ContainerSerial) -> Result<&mut Container> {
        self.get_mut(serial).ok_or(Error::UnknownContainer { serial })
    }

    /// All containers in creation order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Load cargo into the container with `serial`.
    pub fn load(
        &mut self,
        serial: ContainerSerial,
        weight: f64,
        notifier: &dyn HazardNotifier,
    ) -> Result<()> {
        self.require_mut(serial)?.load(weight, notifier)
    }

    /// Unload the container with `serial`, returning the amount removed.
    pub fn unload(&mut self, serial: ContainerSerial) -> Result<f64> {
        Ok(self.require_mut(serial)?.unload())
    }
}
