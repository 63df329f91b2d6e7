//! Load policy constants shared by the container variants.

/// Fraction of `max_load` a hazardous liquid may take in a single load
/// before a hazard notice is raised.
pub const HAZARDOUS_LIQUID_LIMIT: f64 = 0.5;

/// Fraction of `max_load` a non-hazardous liquid may take in a single load
/// before a hazard notice is raised.
pub const SAFE_LIQUID_LIMIT: f64 = 0.9;

/// Fraction of the current load a gas container keeps after unloading.
/// Residual gas cannot be pumped out completely.
pub const GAS_RESIDUE_FRACTION: f64 = 0.05;
