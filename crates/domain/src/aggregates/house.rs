//! House aggregate - an ordered set of rooms bounded by a capacity
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: rooms can only enter through `add_room`/`add_rooms`
//! - **One type, many kinds**: `HouseKind` selects the default capacity and
//!   the describe label; there is no per-kind behavior
//! - **Append-only**: rooms are never removed

use serde::Serialize;
use std::fmt;

use crate::entities::Room;
use crate::error::DomainError;
use crate::events::RoomAdded;
use crate::value_objects::{Area, HouseKind};
use homestead_domain::HouseId;

/// A house holding rooms under a capacity limit.
///
/// # Invariants
///
/// - The sum of room sizes never exceeds `available_space`. The check runs
///   when a room is added; a room that fits exactly is accepted.
/// - `available_space` is fixed once the house is built.
///
/// # Example
///
/// ```
/// use homestead_domain::{House, Room};
///
/// let mut house = House::new();
/// house
///     .add_rooms([
///         Room::new("bedroom", 10.0),
///         Room::new("kitchen", 9.0),
///         Room::new("bathroom", 3.0),
///     ])
///     .unwrap();
///
/// assert_eq!(
///     house.to_string(),
///     "House:\nbedroom, 10m\nkitchen, 9m\nbathroom, 3m"
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct House {
    id: HouseId,
    kind: HouseKind,
    rooms: Vec<Room>,
    available_space: Area,
}

impl House {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty plain house with the default capacity (100).
    pub fn new() -> Self {
        Self::of_kind(HouseKind::default())
    }

    /// Create an empty house using the kind's default capacity.
    pub fn of_kind(kind: HouseKind) -> Self {
        Self {
            id: HouseId::new(),
            kind,
            rooms: Vec::new(),
            available_space: kind.default_capacity(),
        }
    }

    /// Create an empty plain house with an explicit capacity.
    pub fn with_capacity(available_space: impl Into<Area>) -> Self {
        Self::new().with_available_space(available_space)
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Override the kind's default capacity.
    pub fn with_available_space(mut self, available_space: impl Into<Area>) -> Self {
        self.available_space = available_space.into();
        self
    }

    /// Set the house's ID.
    pub fn with_id(mut self, id: HouseId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> HouseId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> HouseKind {
        self.kind
    }

    /// Rooms in insertion order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total capacity, fixed at construction.
    #[inline]
    pub fn available_space(&self) -> Area {
        self.available_space
    }

    /// Sum of all room sizes, recomputed on every call.
    pub fn size(&self) -> Area {
        self.rooms.iter().map(Room::size).sum()
    }

    /// Capacity not yet taken by rooms.
    pub fn remaining_space(&self) -> Area {
        self.available_space - self.size()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Add one room if it fits.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CapacityExceeded` when the room would push the
    /// total strictly above the capacity. The house is unchanged in that case.
    pub fn add_room(&mut self, room: Room) -> Result<RoomAdded, DomainError> {
        let current = self.size();
        if current + room.size() > self.available_space {
            return Err(DomainError::capacity_exceeded(
                room.name(),
                room.size(),
                self.available_space - current,
            ));
        }

        let size = room.size();
        self.rooms.push(room);
        Ok(RoomAdded {
            index: self.rooms.len() - 1,
            size,
            remaining: self.available_space - (current + size),
        })
    }

    /// Add rooms one at a time, in order.
    ///
    /// Stops at the first room that does not fit. Rooms accepted earlier in
    /// the same call stay in the house; the failing room and everything after
    /// it are dropped.
    ///
    /// # Errors
    ///
    /// Returns the `DomainError::CapacityExceeded` of the first rejected room.
    pub fn add_rooms(
        &mut self,
        rooms: impl IntoIterator<Item = Room>,
    ) -> Result<Vec<RoomAdded>, DomainError> {
        rooms.into_iter().map(|room| self.add_room(room)).collect()
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.kind.label())?;
        for (i, room) in self.rooms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", room)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
