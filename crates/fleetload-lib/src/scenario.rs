//! End-to-end demonstration of the loading model.
//!
//! Builds one ship and one container of each kind, then walks through
//! loading, berthing, unloading, removal and a deliberate overfill. Every
//! domain failure is caught at its step and recorded; the run continues.

use std::fmt::Write;

use serde::Serialize;
use tracing::info;

use crate::container::{
    ContainerSerial, ContainerYard, HazardNotice, HazardNotifier, RecordingNotifier, Tee,
};
use crate::error::Result;
use crate::output::{format_kg, ShipManifest, StepOutcome};
use crate::ship::Ship;

/// Parameters of the demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoScenario {
    pub ship_name: String,
    pub max_weight: f64,
    pub max_containers: usize,
    /// `(max_load, hazardous, cargo)`
    pub liquid: (f64, bool, f64),
    /// `(max_load, pressure, cargo)`
    pub gas: (f64, f64, f64),
    /// `(max_load, temperature, cargo)`
    pub refrigerated: (f64, f64, f64),
    /// Extra cargo pushed into the refrigerated container at the end.
    pub overload: f64,
}

impl Default for DemoScenario {
    fn default() -> Self {
        Self {
            ship_name: "CargoX".to_string(),
            max_weight: 50_000.0,
            max_containers: 10,
            liquid: (10_000.0, false, 9_000.0),
            gas: (8_000.0, 50.0, 8_000.0),
            refrigerated: (5_000.0, -10.0, 4_500.0),
            overload: 6_000.0,
        }
    }
}

/// A single reported step of the demonstration.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DemoEvent {
    pub description: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
    /// Hazard notices raised while performing this step.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<HazardNotice>,
}

impl DemoEvent {
    fn new(description: impl Into<String>, outcome: StepOutcome) -> Self {
        Self {
            description: description.into(),
            outcome,
            notices: Vec::new(),
        }
    }

    fn with_notices(mut self, notices: Vec<HazardNotice>) -> Self {
        self.notices = notices;
        self
    }
}

/// Everything the demonstration did, in order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DemoReport {
    pub ship: String,
    pub containers: Vec<ContainerSerial>,
    pub events: Vec<DemoEvent>,
    /// Manifest right after the berthing step.
    pub manifest: ShipManifest,
    /// Number of events that precede the manifest in text output.
    #[serde(skip)]
    pub manifest_after: usize,
    /// Manifest at the end of the run.
    pub final_manifest: ShipManifest,
}

impl DemoReport {
    pub fn failures(&self) -> impl Iterator<Item = &DemoEvent> {
        self.events.iter().filter(|e| !e.outcome.is_ok())
    }

    /// Render the report as human-readable text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let split = self.manifest_after.min(self.events.len());
        let (before, after) = self.events.split_at(split);
        write_events(&mut buffer, before);
        buffer.push('\n');
        buffer.push_str(&self.manifest.render_text());
        buffer.push('\n');
        write_events(&mut buffer, after);
        buffer
    }
}

fn write_events(buffer: &mut String, events: &[DemoEvent]) {
    for event in events {
        for notice in &event.notices {
            let _ = writeln!(buffer, "[HAZARD] {}", notice.message);
        }
        match &event.outcome {
            StepOutcome::Ok => {
                let _ = writeln!(buffer, "{}", event.description);
            }
            StepOutcome::Failed { kind, message } => {
                let _ = writeln!(buffer, "{}: {}", kind.label(), message);
            }
        }
    }
}

impl DemoScenario {
    /// Run the scenario, sending hazard notices to `notifier`.
    ///
    /// Notices are also attached to the event of the step that raised them.
    /// Fails only when the scenario's own parameters are invalid.
    pub fn run(&self, notifier: &dyn HazardNotifier) -> Result<DemoReport> {
        let recorder = RecordingNotifier::new();
        let notifier = Tee(&recorder, notifier);
        let mut events = Vec::new();
        let mut ship = Ship::new(self.ship_name.clone(), self.max_weight, self.max_containers)?;
        events.push(DemoEvent::new(
            format!(
                "Ship {} created. Max containers: {}, max weight: {} kg.",
                ship.name(),
                ship.max_containers(),
                format_kg(ship.max_weight())
            ),
            StepOutcome::Ok,
        ));

        let mut yard = ContainerYard::new();
        let liquid = yard.build_liquid(self.liquid.0, self.liquid.1)?;
        let gas = yard.build_gas(self.gas.0, self.gas.1)?;
        let reefer = yard.build_refrigerated(self.refrigerated.0, self.refrigerated.1)?;
        let containers = vec![liquid, gas, reefer];
        events.push(DemoEvent::new(
            format!("Created containers: {liquid}, {gas}, {reefer}"),
            StepOutcome::Ok,
        ));
        info!(ship = %ship.name(), "demo containers created");

        for (serial, cargo) in [
            (liquid, self.liquid.2),
            (gas, self.gas.2),
            (reefer, self.refrigerated.2),
        ] {
            let result = yard.load(serial, cargo, &notifier);
            events.push(
                DemoEvent::new(
                    format!("Loaded {} kg into {serial}.", format_kg(cargo)),
                    StepOutcome::from(&result),
                )
                .with_notices(recorder.take()),
            );
        }

        for serial in &containers {
            let result = yard
                .require(*serial)
                .and_then(|container| ship.load_container(container));
            events.push(DemoEvent::new(
                format!("Container {serial} loaded on ship {}.", ship.name()),
                StepOutcome::from(&result),
            ));
        }

        let manifest = ship.manifest(&yard);
        let manifest_after = events.len();

        let unloaded = yard.unload(gas).map(|_| ());
        let residue = yard.get(gas).map(|c| c.current_load()).unwrap_or_default();
        events.push(DemoEvent::new(
            format!(
                "After unloading {gas} it still holds {} kg of gas.",
                format_kg(residue)
            ),
            StepOutcome::from(&unloaded),
        ));

        ship.remove_container(liquid);
        events.push(DemoEvent::new(
            format!(
                "After removing {liquid} ship {} carries {} container(s).",
                ship.name(),
                ship.container_count()
            ),
            StepOutcome::Ok,
        ));

        let overload = yard.load(reefer, self.overload, &notifier);
        events.push(
            DemoEvent::new(
                format!("Loaded {} kg into {reefer}.", format_kg(self.overload)),
                StepOutcome::from(&overload),
            )
            .with_notices(recorder.take()),
        );
        info!(ship = %ship.name(), "demo finished");

        Ok(DemoReport {
            ship: ship.name().to_string(),
            containers,
            events,
            manifest,
            manifest_after,
            final_manifest: ship.manifest(&yard),
        })
    }
}

/// Run the default scenario.
pub fn run_demo(notifier: &dyn HazardNotifier) -> Result<DemoReport> {
    DemoScenario::default().run(notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::RecordingNotifier;
    use crate::output::FailureKind;

    #[test]
    fn hazardous_variant_raises_notice() {
        let scenario = DemoScenario {
            liquid: (10_000.0, true, 6_000.0),
            ..DemoScenario::default()
        };
        let notifier = RecordingNotifier::new();
        let report = scenario.run(&notifier).unwrap();
        assert_eq!(notifier.len(), 1);
        assert_eq!(report.failures().count(), 1);

        let event = report
            .events
            .iter()
            .find(|e| !e.notices.is_empty())
            .expect("notice attached to its step");
        assert_eq!(event.description, "Loaded 6000 kg into KON-L-1.");
        assert!(report
            .render_text()
            .contains("[HAZARD] Attempted unsafe load in KON-L-1\nLoaded 6000 kg into KON-L-1."));
    }

    #[test]
    fn small_ship_rejects_third_container() {
        let scenario = DemoScenario {
            max_containers: 2,
            ..DemoScenario::default()
        };
        let report = scenario.run(&RecordingNotifier::new()).unwrap();
        let kinds: Vec<FailureKind> = report
            .failures()
            .filter_map(|e| e.outcome.failure_kind())
            .collect();
        assert_eq!(kinds, vec![FailureKind::CapacityExceeded, FailureKind::Overfill]);
        assert_eq!(report.manifest.container_count, 2);
    }

    #[test]
    fn invalid_parameters_fail_the_run() {
        let scenario = DemoScenario {
            max_weight: 0.0,
            ..DemoScenario::default()
        };
        assert!(scenario.run(&RecordingNotifier::new()).is_err());
    }
}
