//! Built-in plan used when no plan file is configured.

use homestead_domain::{Area, HouseKind, Room};

use crate::infrastructure::ports::{
    CommunityPlan, HousePlan, NeighborhoodPlan, PlanError, PlanSource,
};

/// Two neighborhoods sharing a tally.
///
/// The first house fills 80 of its 100 and then asks for a second master
/// bedroom that does not fit. The second neighborhood has one house of every
/// kind and repeats the small three-room house.
pub struct DemoPlan;

impl DemoPlan {
    pub fn new() -> Self {
        Self
    }

    fn small_house() -> HousePlan {
        HousePlan {
            kind: HouseKind::House,
            available_space: None,
            rooms: vec![
                Room::new("bedroom", 10.0),
                Room::new("kitchen", 9.0),
                Room::new("bathroom", 3.0),
            ],
        }
    }

    pub fn plan() -> CommunityPlan {
        let overfull = HousePlan {
            kind: HouseKind::House,
            available_space: Some(Area::new(100.0)),
            rooms: vec![
                Room::new("master bedroom", 25.0),
                Room::new("bathroom", 5.0),
                Room::new("living room", 30.0),
                Room::new("kitchen", 20.0),
                Room::new("master bedroom", 25.0),
            ],
        };

        let mixed = NeighborhoodPlan {
            name: "Mixed Row".to_string(),
            houses: vec![
                HousePlan {
                    kind: HouseKind::SingleFamily,
                    available_space: None,
                    rooms: vec![
                        Room::new("master bedroom", 30.0),
                        Room::new("bedroom", 15.0),
                        Room::new("family room", 40.0),
                        Room::new("kitchen", 20.0),
                    ],
                },
                HousePlan {
                    kind: HouseKind::TownHouse,
                    available_space: None,
                    rooms: vec![Room::new("bedroom", 15.0), Room::new("kitchen", 10.0)],
                },
                HousePlan {
                    kind: HouseKind::Apartment,
                    available_space: None,
                    rooms: vec![Room::new("studio", 35.0), Room::new("bathroom", 4.5)],
                },
                Self::small_house(),
            ],
        };

        CommunityPlan {
            neighborhoods: vec![
                NeighborhoodPlan {
                    name: "Elm Street".to_string(),
                    houses: vec![overfull, Self::small_house(), Self::small_house()],
                },
                mixed,
            ],
        }
    }
}

impl Default for DemoPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanSource for DemoPlan {
    fn describe(&self) -> String {
        "built-in demo plan".to_string()
    }

    fn load(&self) -> Result<CommunityPlan, PlanError> {
        Ok(Self::plan())
    }
}
