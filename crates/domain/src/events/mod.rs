//! Mutation outcomes
//!
//! Aggregate mutations return these values to communicate what happened,
//! allowing callers to log or react without re-reading aggregate state.

pub mod house_events;
pub mod neighborhood_events;

pub use house_events::*;
pub use neighborhood_events::*;
