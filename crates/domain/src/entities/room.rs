//! Room entity - a named floor area

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Area;

/// A room with a name and a size.
///
/// Neither field is validated; an empty name or a negative size is accepted
/// as given. Rooms are never changed after construction.
///
/// # Example
///
/// ```
/// use homestead_domain::Room;
///
/// let room = Room::new("bedroom", 10.0);
/// assert_eq!(room.to_string(), "bedroom, 10m");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    size: Area,
}

impl Room {
    pub fn new(name: impl Into<String>, size: impl Into<Area>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> Area {
        self.size
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}m", self.name, self.size)
    }
}
