//! Neighborhood-related mutation outcomes

use crate::value_objects::Area;
use crate::HouseId;

/// A house appended to a neighborhood.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseAdded {
    pub house_id: HouseId,
    /// House size recorded in the tally at the moment of the add
    pub counted: Area,
    /// Tally total after this house was recorded
    pub tally_total: Area,
}
