//! House-related mutation outcomes

use crate::value_objects::Area;

/// A room accepted by a house.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAdded {
    /// Position of the room in the house's room list
    pub index: usize,
    pub size: Area,
    /// Space left in the house after this room
    pub remaining: Area,
}
