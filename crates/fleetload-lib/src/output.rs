use std::fmt::Write;

use serde::Serialize;

use crate::container::{ContainerKind, ContainerSerial};
use crate::error::Error;

/// One container line in a ship manifest.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ManifestEntry {
    /// 1-based position in load order.
    pub position: usize,
    pub serial: ContainerSerial,
    pub kind: ContainerKind,
    pub max_load: f64,
    /// Live cargo, or `None` when the container is not known to the yard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_load: Option<f64>,
}

/// Structured snapshot of a ship's containers that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShipManifest {
    pub ship: String,
    pub max_weight: f64,
    pub max_containers: usize,
    pub container_count: usize,
    /// Sum of declared maximum loads.
    pub total_weight: f64,
    /// Sum of live cargo across known containers.
    pub total_cargo: f64,
    pub entries: Vec<ManifestEntry>,
}

impl ShipManifest {
    /// Render the manifest as plain text, one container per line.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Ship {} carries {} container(s) ({} of {} kg reserved, {} slot(s)):",
            self.ship,
            self.container_count,
            format_kg(self.total_weight),
            format_kg(self.max_weight),
            self.max_containers
        );
        for entry in &self.entries {
            let load = entry
                .current_load
                .map(format_kg)
                .unwrap_or_else(|| "<unknown>".to_string());
            let _ = writeln!(
                buffer,
                " - {}, current load: {} kg (max {} kg)",
                entry.serial,
                load,
                format_kg(entry.max_load)
            );
        }
        buffer
    }
}

/// Category of a recoverable step failure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Overfill,
    CapacityExceeded,
    Invalid,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Overfill => "Overfill",
            FailureKind::CapacityExceeded => "Capacity exceeded",
            FailureKind::Invalid => "Error",
        }
    }
}

/// Outcome of one reported step: success, or the specific failure that was caught.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Ok,
    Failed { kind: FailureKind, message: String },
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, StepOutcome::Ok)
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            StepOutcome::Ok => None,
            StepOutcome::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl From<&Error> for StepOutcome {
    fn from(err: &Error) -> Self {
        let kind = match err {
            Error::Overfill { .. } => FailureKind::Overfill,
            Error::CapacityExceeded { .. } => FailureKind::CapacityExceeded,
            _ => FailureKind::Invalid,
        };
        StepOutcome::Failed {
            kind,
            message: err.to_string(),
        }
    }
}

impl<T> From<&crate::error::Result<T>> for StepOutcome {
    fn from(result: &crate::error::Result<T>) -> Self {
        match result {
            Ok(_) => StepOutcome::Ok,
            Err(err) => StepOutcome::from(err),
        }
    }
}

/// Format a weight without trailing decimals when it is whole.
pub fn format_kg(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
