//! Ships, their capacity rules, and catalog management.
//!
//! - [`vessel`] - Ship limits, container membership, manifests
//! - [`catalog`] - Ship catalog loading from CSV
//!
//! # Example
//!
//! ```
//! use fleetload_lib::container::{ContainerYard, TracingNotifier};
//! use fleetload_lib::ship::Ship;
//!
//! let mut yard = ContainerYard::new();
//! let reefer = yard.build_refrigerated(5_000.0, -10.0).unwrap();
//! yard.load(reefer, 4_500.0, &TracingNotifier).unwrap();
//!
//! let mut ship = Ship::new("CargoX", 50_000.0, 10).unwrap();
//! ship.load_container(yard.get(reefer).unwrap()).unwrap();
//!
//! // Capacity is reserved by declared size, not by cargo.
//! assert_eq!(ship.total_weight(), 5_000.0);
//! ```

pub mod catalog;
pub mod vessel;

pub use catalog::{ShipCatalog, ShipSpec};
pub use vessel::{Berth, Ship};
