//! Build neighborhoods use case.
//!
//! Loads a plan and turns it into neighborhoods that all record into one
//! shared tally.

use std::sync::Arc;

use homestead_domain::{DomainError, House, Neighborhood, SizeTally};

use crate::infrastructure::ports::{HousePlan, PlanSource};

use super::error::BuildError;
use super::report::{BuildReport, RoomRejection};

/// What to do when a planned room does not fit its house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Log the rejection and keep the house with the rooms that fit
    #[default]
    Skip,
    /// Stop building and return the rejection as an error
    Abort,
}

/// Build neighborhoods use case.
///
/// Orchestrates: plan loading, house construction through `add_rooms`,
/// capacity rejection handling, neighborhood assembly.
pub struct BuildNeighborhoods {
    source: Arc<dyn PlanSource>,
}

impl BuildNeighborhoods {
    pub fn new(source: Arc<dyn PlanSource>) -> Self {
        Self { source }
    }

    /// Execute the build.
    ///
    /// # Arguments
    /// * `tally` - Tally every built neighborhood records into
    /// * `policy` - How capacity rejections are handled
    ///
    /// # Returns
    /// * `Ok(BuildReport)` - Neighborhoods built, with any skipped rooms
    /// * `Err(BuildError)` - Plan could not be loaded, was empty, or a room
    ///   was rejected under `CapacityPolicy::Abort`
    pub fn execute(
        &self,
        tally: &SizeTally,
        policy: CapacityPolicy,
    ) -> Result<BuildReport, BuildError> {
        let origin = self.source.describe();
        let plan = self.source.load()?;
        if plan.neighborhoods.is_empty() {
            return Err(BuildError::InvalidPlan(DomainError::validation(format!(
                "{} has no neighborhoods",
                origin
            ))));
        }

        let mut neighborhoods = Vec::with_capacity(plan.neighborhoods.len());
        let mut rejections = Vec::new();

        for neighborhood_plan in plan.neighborhoods {
            let mut neighborhood =
                Neighborhood::new(tally.clone()).with_name(neighborhood_plan.name);

            for (house_index, house_plan) in neighborhood_plan.houses.into_iter().enumerate() {
                let (house, rejected) = build_house(house_plan);

                if let Some(err) = rejected {
                    if policy == CapacityPolicy::Abort {
                        return Err(BuildError::Capacity {
                            neighborhood: neighborhood.name().to_string(),
                            house_index,
                            source: err,
                        });
                    }

                    tracing::warn!(
                        neighborhood = %neighborhood.name(),
                        house_id = %house.id(),
                        error = %err,
                        "Room skipped: not enough space"
                    );
                    if let Some(rejection) =
                        RoomRejection::from_error(neighborhood.name(), &house, err)
                    {
                        rejections.push(rejection);
                    }
                }

                let added = neighborhood.add_house(house);
                tracing::debug!(
                    neighborhood = %neighborhood.name(),
                    house_id = %added.house_id,
                    counted = %added.counted,
                    tally_total = %added.tally_total,
                    "House added"
                );
            }

            neighborhoods.push(neighborhood);
        }

        tracing::info!(
            source = %origin,
            neighborhoods = neighborhoods.len(),
            rejections = rejections.len(),
            tally_total = %tally.total(),
            "Neighborhoods built"
        );

        Ok(BuildReport::new(neighborhoods, rejections, tally.clone()))
    }
}

/// Build one house, returning the rejection that stopped its room list.
fn build_house(plan: HousePlan) -> (House, Option<DomainError>) {
    let mut house = House::of_kind(plan.kind);
    if let Some(available_space) = plan.available_space {
        house = house.with_available_space(available_space);
    }

    let rejected = house.add_rooms(plan.rooms).err();
    (house, rejected)
}
