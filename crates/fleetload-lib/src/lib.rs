//! Fleet loading library entry points.
//!
//! This crate models cargo containers (liquid, gas, refrigerated), the yard
//! that builds them and the ships that carry them under count and weight
//! limits. Higher-level consumers (the CLI) should only depend on the items
//! exported here instead of reimplementing behavior.
//!

pub mod container;
pub mod error;
pub mod output;
pub mod plan;
pub mod scenario;
pub mod ship;

mod table;

pub use container::{
    Container, ContainerKind, ContainerSerial, ContainerSpec, ContainerVariant, ContainerYard,
    HazardNotice, HazardNotifier, RecordingNotifier, SerialGenerator, Tee, TracingNotifier,
};
pub use error::{CapacityLimit, Error, Result};
pub use output::{format_kg, FailureKind, ManifestEntry, ShipManifest, StepOutcome};
pub use plan::{execute_plan, CargoPlan, PlanReport, PlanRow, PlanStep};
pub use scenario::{run_demo, DemoEvent, DemoReport, DemoScenario};
pub use ship::{Berth, Ship, ShipCatalog, ShipSpec};
