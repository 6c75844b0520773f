//! Floor area value object
//!
//! Room sizes, house capacities and neighborhood totals are all measured in
//! the same unit (square meters). Area is deliberately unvalidated: negative
//! or fractional values are accepted as given.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A floor area in square meters.
///
/// # Examples
///
/// ```
/// use homestead_domain::value_objects::Area;
///
/// let total: Area = [Area::new(10.0), Area::new(9.0), Area::new(3.0)]
///     .into_iter()
///     .sum();
/// assert_eq!(total, Area::new(22.0));
/// assert_eq!(total.to_string(), "22");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Area(f64);

impl Area {
    pub const ZERO: Area = Area(0.0);

    pub const fn new(square_meters: f64) -> Self {
        Self(square_meters)
    }

    /// Returns the raw value in square meters.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Area {
    // f64's Display already drops the fractional part of whole numbers,
    // so 10.0 renders as "10" and 0.01 as "0.01".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Area {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u32> for Area {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Area> for f64 {
    fn from(area: Area) -> Self {
        area.0
    }
}

impl Add for Area {
    type Output = Area;

    fn add(self, rhs: Area) -> Area {
        Area(self.0 + rhs.0)
    }
}

impl AddAssign for Area {
    fn add_assign(&mut self, rhs: Area) {
        self.0 += rhs.0;
    }
}

impl Sub for Area {
    type Output = Area;

    fn sub(self, rhs: Area) -> Area {
        Area(self.0 - rhs.0)
    }
}

impl Sum for Area {
    fn sum<I: Iterator<Item = Area>>(iter: I) -> Area {
        iter.fold(Area::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Area> for Area {
    fn sum<I: Iterator<Item = &'a Area>>(iter: I) -> Area {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_render_without_fraction() {
        assert_eq!(Area::new(10.0).to_string(), "10");
        assert_eq!(Area::from(174u32).to_string(), "174");
    }

    #[test]
    fn fractional_values_render_as_given() {
        assert_eq!(Area::new(0.01).to_string(), "0.01");
        assert_eq!(Area::new(2.5).to_string(), "2.5");
    }

    #[test]
    fn arithmetic() {
        let mut area = Area::new(15.0);
        area += Area::new(5.0);
        assert_eq!(area, Area::new(20.0));
        assert_eq!(area - Area::new(20.0), Area::ZERO);
        assert!(Area::new(15.01) > Area::new(15.0));
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Area = Vec::<Area>::new().into_iter().sum();
        assert_eq!(total, Area::ZERO);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Area::new(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: Area = serde_json::from_str("80").unwrap();
        assert_eq!(back, Area::new(80.0));
    }
}
