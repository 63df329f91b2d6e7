//! Hazard notification capability.
//!
//! Hazard notices are advisory: emitting one never blocks a load. The
//! notifier is passed in by the caller so the channel can be swapped (log,
//! console, in-memory) independently of the container variant.

use std::cell::RefCell;

use serde::Serialize;
use tracing::warn;

use super::ContainerSerial;

/// A single advisory hazard notice raised by a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardNotice {
    pub serial: ContainerSerial,
    pub message: String,
}

impl HazardNotice {
    pub fn new(serial: ContainerSerial, message: impl Into<String>) -> Self {
        Self {
            serial,
            message: message.into(),
        }
    }
}

/// Receives hazard notices from hazard-notifying containers.
pub trait HazardNotifier {
    fn notify_hazard(&self, notice: &HazardNotice);
}

impl<T: HazardNotifier + ?Sized> HazardNotifier for &T {
    fn notify_hazard(&self, notice: &HazardNotice) {
        (**self).notify_hazard(notice);
    }
}

/// Emits notices as `warn` events on the `hazard` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl HazardNotifier for TracingNotifier {
    fn notify_hazard(&self, notice: &HazardNotice) {
        warn!(target: "hazard", serial = %notice.serial, "{}", notice.message);
    }
}

/// Keeps every notice in memory, in the order received.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<HazardNotice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<HazardNotice> {
        self.notices.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    /// Remove and return all recorded notices.
    pub fn take(&self) -> Vec<HazardNotice> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }
}

impl HazardNotifier for RecordingNotifier {
    fn notify_hazard(&self, notice: &HazardNotice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Forwards each notice to two notifiers in turn.
#[derive(Debug, Clone, Copy)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: HazardNotifier, B: HazardNotifier> HazardNotifier for Tee<A, B> {
    fn notify_hazard(&self, notice: &HazardNotice) {
        self.0.notify_hazard(notice);
        self.1.notify_hazard(notice);
    }
}
