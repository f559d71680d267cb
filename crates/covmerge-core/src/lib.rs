// Rust guideline compliant 2026-08-12

//! Covmerge Core Library
//!
//! This crate provides the foundational components for merging Cobertura
//! coverage reports:
//! - An in-memory XML element tree (parse, mutate, serialize)
//! - The merge algorithm (keyed grouping per tree level, hit summing,
//!   branch condition selection)
//! - Run configuration (file, environment overrides)
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod merge;
pub mod tree;
pub mod xml;

pub use config::Config;
pub use error::{Error, Result};
pub use merge::{merge_all, merge_reports};
pub use tree::{Element, Node};
