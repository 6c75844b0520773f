//! Neighborhood use cases.
//!
//! Builds neighborhoods from a plan and reports on the result.

mod build;
mod error;
mod report;

pub use build::{BuildNeighborhoods, CapacityPolicy};
pub use error::BuildError;
pub use report::{BuildReport, NeighborhoodSummary, ReportSummary, RoomRejection};
