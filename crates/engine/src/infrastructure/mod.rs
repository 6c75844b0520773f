//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod demo_plan;
pub mod plan_file;
pub mod ports;
