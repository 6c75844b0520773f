//! Entities - domain objects owned by an aggregate

pub mod room;

pub use room::Room;
