//! Shared size tally
//!
//! A running total of house sizes recorded by every neighborhood that holds a
//! handle to the same tally. The tally is created explicitly and handed to
//! each participating neighborhood, so the sharing relationship is visible at
//! construction time.
//!
//! The total only grows. It records a house's size at the moment the house is
//! added; rooms added to that house later are not reflected.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::value_objects::Area;

/// Cloneable handle to one shared running total.
///
/// Clones point at the same total. Updates are atomic, so handles may be
/// recorded from several threads.
///
/// # Example
///
/// ```
/// use homestead_domain::{Area, SizeTally};
///
/// let tally = SizeTally::new();
/// let shared = tally.clone();
/// shared.record(Area::new(22.0));
/// assert_eq!(tally.total(), Area::new(22.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SizeTally {
    // f64 bit pattern; 0 is +0.0
    bits: Arc<AtomicU64>,
}

impl SizeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `size` to the total and returns the new total.
    pub fn record(&self, size: Area) -> Area {
        let add = |bits: u64| (f64::from_bits(bits) + size.value()).to_bits();
        let previous = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| Some(add(bits)))
            .unwrap_or_else(|current| current);
        Area::new(f64::from_bits(add(previous)))
    }

    pub fn total(&self) -> Area {
        Area::new(f64::from_bits(self.bits.load(Ordering::Acquire)))
    }

    /// Returns true when both handles share the same total.
    pub fn shares_with(&self, other: &SizeTally) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SizeTally::new().total(), Area::ZERO);
    }

    #[test]
    fn record_returns_running_total() {
        let tally = SizeTally::new();
        assert_eq!(tally.record(Area::new(22.0)), Area::new(22.0));
        assert_eq!(tally.record(Area::new(0.5)), Area::new(22.5));
        assert_eq!(tally.total(), Area::new(22.5));
    }

    #[test]
    fn clones_share_the_total() {
        let tally = SizeTally::new();
        let other = tally.clone();
        other.record(Area::new(10.0));
        assert_eq!(tally.total(), Area::new(10.0));
        assert!(tally.shares_with(&other));
        assert!(!tally.shares_with(&SizeTally::new()));
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let tally = SizeTally::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let handle = tally.clone();
                scope.spawn(move || {
                    for _ in 0..1000 {
                        handle.record(Area::new(1.0));
                    }
                });
            }
        });
        assert_eq!(tally.total(), Area::new(8000.0));
    }
}
