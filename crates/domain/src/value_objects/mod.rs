//! Value objects - immutable types compared by value

mod area;
mod house_kind;

pub use area::Area;
pub use house_kind::HouseKind;
