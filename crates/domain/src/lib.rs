//! Homestead domain: rooms, houses bounded by a capacity, and neighborhoods
//! that aggregate houses into a shared size tally.

extern crate self as homestead_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod tally;
pub mod value_objects;

pub use aggregates::{House, Neighborhood};
pub use entities::Room;
pub use error::DomainError;
pub use events::{HouseAdded, RoomAdded};
pub use ids::{HouseId, NeighborhoodId};
pub use tally::SizeTally;
pub use value_objects::{Area, HouseKind};
