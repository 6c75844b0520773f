//! Neighborhood aggregate - an ordered set of houses with a shared size tally
//!
//! # Rustic DDD Design
//!
//! - **Owned houses**: houses move into the neighborhood; callers reach them
//!   again through `houses()` / `house_mut()`
//! - **Injected tally**: the running total shared between neighborhoods is a
//!   `SizeTally` passed in at construction, never global state

use std::collections::BTreeMap;

use crate::aggregates::House;
use crate::events::HouseAdded;
use crate::tally::SizeTally;
use crate::value_objects::{Area, HouseKind};
use homestead_domain::{HouseId, NeighborhoodId};

/// A neighborhood of houses.
///
/// # Invariants
///
/// - Houses are kept in the order they were added and are never removed.
/// - Every added house's size is recorded in the tally exactly once, at the
///   moment it is added.
///
/// `size()` is always recomputed from the houses, while the tally keeps the
/// sizes seen at add time. The two drift apart when rooms are added to a
/// house after it joined, and the tally also counts houses of every other
/// neighborhood sharing it.
///
/// # Example
///
/// ```
/// use homestead_domain::{Area, House, Neighborhood, Room, SizeTally};
///
/// let tally = SizeTally::new();
/// let mut first = Neighborhood::new(tally.clone()).with_name("Elm Street");
/// let mut second = Neighborhood::new(tally.clone());
///
/// let mut house = House::new();
/// house.add_room(Room::new("bedroom", 10.0)).unwrap();
///
/// first.add_house(house.clone());
/// second.add_house(house);
///
/// assert_eq!(first.size(), Area::new(10.0));
/// assert_eq!(tally.total(), Area::new(20.0));
/// ```
#[derive(Debug, Clone)]
pub struct Neighborhood {
    id: NeighborhoodId,
    name: String,
    houses: Vec<House>,
    tally: SizeTally,
}

impl Neighborhood {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an empty, unnamed neighborhood recording into `tally`.
    pub fn new(tally: SizeTally) -> Self {
        Self {
            id: NeighborhoodId::new(),
            name: String::new(),
            houses: Vec::new(),
            tally,
        }
    }

    /// Set the neighborhood's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the neighborhood's ID.
    pub fn with_id(mut self, id: NeighborhoodId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> NeighborhoodId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Houses in insertion order.
    #[inline]
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    #[inline]
    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    /// The tally this neighborhood records into.
    #[inline]
    pub fn tally(&self) -> &SizeTally {
        &self.tally
    }

    /// Mutable access to a held house.
    ///
    /// Rooms added through this reference change `size()` but not the tally.
    pub fn house_mut(&mut self, id: HouseId) -> Option<&mut House> {
        self.houses.iter_mut().find(|house| house.id() == id)
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Sum of the current sizes of all houses.
    pub fn size(&self) -> Area {
        self.houses.iter().map(House::size).sum()
    }

    /// Number of houses of each kind in this neighborhood.
    pub fn house_type_counts(&self) -> BTreeMap<HouseKind, usize> {
        let mut counts = BTreeMap::new();
        for house in &self.houses {
            *counts.entry(house.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Tally total minus this neighborhood's current size.
    ///
    /// Zero for a neighborhood that is the tally's only participant and
    /// whose houses have not grown since they were added.
    pub fn tally_drift(&self) -> Area {
        self.tally.total() - self.size()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Append a house and record its current size in the tally.
    pub fn add_house(&mut self, house: House) -> HouseAdded {
        let counted = house.size();
        let house_id = house.id();
        self.houses.push(house);
        let tally_total = self.tally.record(counted);
        HouseAdded {
            house_id,
            counted,
            tally_total,
        }
    }

    /// Append houses in order, recording each one as it is added.
    pub fn add_houses(&mut self, houses: impl IntoIterator<Item = House>) -> Vec<HouseAdded> {
        houses
            .into_iter()
            .map(|house| self.add_house(house))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
