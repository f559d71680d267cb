// Rust guideline compliant 2026-08-14

//! Covmerge CLI library.
//!
//! This library exposes the driver module for use in tests and external code.

pub mod driver;

pub use driver::{matching_files, run, MergeOutcome};
