//! # Primer Application Library
//!
//! The pieces of the `primer` binary that integration tests reach into:
//! CLI definition and execution, configuration, and JSON report types.

pub mod cli;
pub mod config;
pub mod report;
