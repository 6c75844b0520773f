//! Neighborhood build errors.

use crate::infrastructure::ports::PlanError;
use homestead_domain::DomainError;

/// Errors that can occur while building neighborhoods from a plan.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),
    #[error("Invalid plan: {0}")]
    InvalidPlan(DomainError),
    #[error("House {house_index} in {neighborhood:?} rejected a room: {source}")]
    Capacity {
        neighborhood: String,
        house_index: usize,
        #[source]
        source: DomainError,
    },
}
