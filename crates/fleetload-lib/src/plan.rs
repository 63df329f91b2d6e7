//! Cargo plans: batches of containers to build, fill and put aboard a ship.
//!
//! A plan is read from CSV with one container per row:
//!
//! ```text
//! kind,max_load,cargo,hazardous,pressure,temperature
//! liquid,10000,9000,false,,
//! gas,8000,8000,,50,
//! refrigerated,5000,4500,,,-10
//! ```
//!
//! `hazardous` defaults to `false`. `pressure` is required for gas rows and
//! `temperature` for refrigerated rows.

use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use tracing::{debug, info};

use crate::container::{
    ContainerKind, ContainerSerial, ContainerSpec, ContainerYard, HazardNotice, HazardNotifier,
    RecordingNotifier, Tee,
};
use crate::error::{Error, Result};
use crate::output::{format_kg, ShipManifest, StepOutcome};
use crate::ship::Ship;
use crate::table::HeaderIndex;

const PLAN_COLUMNS: &[(&str, &[&str])] = &[
    ("kind", &["kind", "type", "container_type", "containertype"]),
    ("max_load", &["max_load", "maxload", "max_load_kg", "maxloadkg", "capacity"]),
    ("cargo", &["cargo", "load", "cargo_kg", "cargokg", "weight"]),
    ("hazardous", &["hazardous", "is_hazardous", "ishazardous", "hazard"]),
    ("pressure", &["pressure"]),
    ("temperature", &["temperature", "temp"]),
];

/// One row of a cargo plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow {
    /// Line number in the source file (header is line 1).
    pub row: usize,
    pub spec: ContainerSpec,
    pub cargo: f64,
}

/// Ordered list of containers to build and load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CargoPlan {
    rows: Vec<PlanRow>,
    source: Option<PathBuf>,
}

impl CargoPlan {
    pub fn new(rows: Vec<PlanRow>) -> Self {
        Self { rows, source: None }
    }

    /// Load a cargo plan from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        let mut plan = Self::from_reader(file)?;
        plan.source = Some(path.to_path_buf());
        Ok(plan)
    }

    /// Load a cargo plan from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::Fields)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let index = HeaderIndex::resolve(&headers, PLAN_COLUMNS);
        let missing = index.missing(&["kind", "max_load", "cargo"]);
        if !missing.is_empty() {
            return Err(Error::CargoPlanValidation {
                row: 1,
                message: format!("missing required columns: {}", missing.join(", ")),
            });
        }

        let mut rows = Vec::new();
        for (i, result) in csv_reader.records().enumerate() {
            let row = i + 2;
            let record = result?;
            let invalid = |message: String| Error::CargoPlanValidation { row, message };

            let number = |field: &str| -> Result<Option<f64>> {
                index
                    .get(&record, field)
                    .map(|value| {
                        value
                            .parse::<f64>()
                            .map_err(|e| invalid(format!("invalid {field} '{value}': {e}")))
                    })
                    .transpose()
            };
            let required = |field: &str| -> Result<f64> {
                number(field)?.ok_or_else(|| invalid(format!("missing {field}")))
            };

            let kind: ContainerKind = index
                .get(&record, "kind")
                .ok_or_else(|| invalid("missing kind".to_string()))?
                .parse()
                .map_err(|e: Error| invalid(e.to_string()))?;
            let max_load = required("max_load")?;
            let cargo = required("cargo")?;

            let spec = match kind {
                ContainerKind::Liquid => {
                    let hazardous = match index.get(&record, "hazardous") {
                        Some(value) => parse_flag(&value)
                            .ok_or_else(|| invalid(format!("invalid hazardous flag '{value}'")))?,
                        None => false,
                    };
                    ContainerSpec::liquid(max_load, hazardous)
                }
                ContainerKind::Gas => ContainerSpec::gas(max_load, required("pressure")?),
                ContainerKind::Refrigerated => {
                    ContainerSpec::refrigerated(max_load, required("temperature")?)
                }
            };
            spec.validate().map_err(|e| invalid(e.to_string()))?;

            rows.push(PlanRow { row, spec, cargo });
        }

        Ok(Self { rows, source: None })
    }

    pub fn rows(&self) -> &[PlanRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Result of processing one plan row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanStep {
    pub row: usize,
    pub kind: ContainerKind,
    pub serial: ContainerSerial,
    pub cargo: f64,
    /// Outcome of putting the cargo into the container.
    pub load: StepOutcome,
    /// Outcome of putting the container on the ship.
    pub berth: StepOutcome,
    /// Hazard notices raised while loading the cargo.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<HazardNotice>,
}

/// Everything a plan execution did, in row order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanReport {
    pub steps: Vec<PlanStep>,
    pub manifest: ShipManifest,
}

impl PlanReport {
    pub fn berthed(&self) -> usize {
        self.steps.iter().filter(|s| s.berth.is_ok()).count()
    }

    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| !s.load.is_ok() || !s.berth.is_ok())
            .count()
    }

    /// Render the report as human-readable text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "Row {}: {} container {} with {} kg",
                step.row,
                step.kind,
                step.serial,
                format_kg(step.cargo)
            );
            for notice in &step.notices {
                let _ = writeln!(buffer, "  [HAZARD] {}", notice.message);
            }
            for (label, outcome) in [("load", &step.load), ("ship", &step.berth)] {
                match outcome {
                    StepOutcome::Ok => {
                        let _ = writeln!(buffer, "  {label}: ok");
                    }
                    StepOutcome::Failed { kind, message } => {
                        let _ = writeln!(buffer, "  {label}: {}: {}", kind.label(), message);
                    }
                }
            }
        }
        let _ = writeln!(
            buffer,
            "\n{} of {} container(s) loaded on ship, {} step(s) failed.\n",
            self.berthed(),
            self.steps.len(),
            self.failures()
        );
        buffer.push_str(&self.manifest.render_text());
        buffer
    }
}

/// Build, fill and berth every container in `plan`.
///
/// Failures are recorded per step and never stop the run. A container whose
/// cargo overfilled is still offered to the ship, since ship capacity is
/// reserved by declared size rather than cargo.
pub fn execute_plan(
    ship: &mut Ship,
    yard: &mut ContainerYard,
    plan: &CargoPlan,
    notifier: &dyn HazardNotifier,
) -> Result<PlanReport> {
    let recorder = RecordingNotifier::new();
    let notifier = Tee(&recorder, notifier);
    let mut steps = Vec::with_capacity(plan.len());

    for row in plan.rows() {
        let serial = yard.build(row.spec)?;
        let load = StepOutcome::from(&yard.load(serial, row.cargo, &notifier));
        let berth_result = yard
            .require(serial)
            .and_then(|container| ship.load_container(container));
        let berth = StepOutcome::from(&berth_result);
        debug!(row = row.row, %serial, ?load, ?berth, "plan row processed");

        steps.push(PlanStep {
            row: row.row,
            kind: row.spec.kind(),
            serial,
            cargo: row.cargo,
            load,
            berth,
            notices: recorder.take(),
        });
    }

    let report = PlanReport {
        steps,
        manifest: ship.manifest(yard),
    };
    info!(
        ship = %ship.name(),
        berthed = report.berthed(),
        failures = report.failures(),
        "cargo plan executed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::RecordingNotifier;
    use crate::output::FailureKind;
    use std::io::Cursor;

    const PLAN: &str = "kind,max_load,cargo,hazardous,pressure,temperature\n\
                        liquid,10000,6000,yes,,\n\
                        gas,8000,8000,,50,\n\
                        refrigerated,5000,5500,,,-10\n";

    #[test]
    fn parses_rows_with_variant_columns() {
        let plan = CargoPlan::from_reader(Cursor::new(PLAN)).expect("plan parses");
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.rows()[0].spec, ContainerSpec::liquid(10_000.0, true));
        assert_eq!(plan.rows()[1].spec, ContainerSpec::gas(8_000.0, 50.0));
        assert_eq!(plan.rows()[2].row, 4);
    }

    #[test]
    fn rejects_gas_without_pressure() {
        let csv = "kind,max_load,cargo,pressure\ngas,10,5,\n";
        match CargoPlan::from_reader(Cursor::new(csv)) {
            Err(Error::CargoPlanValidation { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("pressure"), "{message}");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_kind_and_bad_numbers() {
        let csv = "kind,max_load,cargo\ntank,10,5\n";
        assert!(matches!(
            CargoPlan::from_reader(Cursor::new(csv)),
            Err(Error::CargoPlanValidation { .. })
        ));
        let csv = "kind,max_load,cargo,temperature\nrefrigerated,ten,5,4\n";
        assert!(matches!(
            CargoPlan::from_reader(Cursor::new(csv)),
            Err(Error::CargoPlanValidation { .. })
        ));
    }

    #[test]
    fn executes_every_row_and_records_failures() {
        let plan = CargoPlan::from_reader(Cursor::new(PLAN)).unwrap();
        let mut ship = Ship::new("Tern", 20_000.0, 10).unwrap();
        let mut yard = ContainerYard::new();
        let notifier = RecordingNotifier::new();

        let report = execute_plan(&mut ship, &mut yard, &plan, &notifier).unwrap();

        assert_eq!(notifier.len(), 1, "hazardous liquid over 50%");
        assert_eq!(report.steps.len(), 3);
        assert!(report.steps[0].load.is_ok());
        assert_eq!(
            report.steps[2].load.failure_kind(),
            Some(FailureKind::Overfill)
        );
        // 10000 + 8000 fits, the 5000 reefer would reach 23000.
        assert_eq!(
            report.steps[2].berth.failure_kind(),
            Some(FailureKind::CapacityExceeded)
        );
        assert_eq!(report.berthed(), 2);
        assert_eq!(report.failures(), 1);
        assert_eq!(report.manifest.container_count, 2);
        assert_eq!(yard.len(), 3);
    }
}
