//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Plan sources (could swap a JSON file -> anything else that yields a plan)

use std::path::PathBuf;

use homestead_domain::{Area, HouseKind, Room};
use serde::{Deserialize, Serialize};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid plan {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// Everything needed to build a set of neighborhoods sharing one tally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityPlan {
    #[serde(default)]
    pub neighborhoods: Vec<NeighborhoodPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub houses: Vec<HousePlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HousePlan {
    #[serde(default)]
    pub kind: HouseKind,
    /// Overrides the kind's default capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_space: Option<Area>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

// =============================================================================
// Plan Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait PlanSource: Send + Sync {
    /// Short human readable origin, used in logs.
    fn describe(&self) -> String;
    fn load(&self) -> Result<CommunityPlan, PlanError>;
}
