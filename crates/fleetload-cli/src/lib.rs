//! Fleet loading CLI library.
//!
//! This crate provides command-line interface utilities for the fleet
//! loading model, including logging setup, terminal styling and output
//! formatting.

pub mod logging;
pub mod output;
pub mod terminal;
