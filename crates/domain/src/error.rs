//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

use crate::value_objects::Area;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A room does not fit in the space left in a house
    #[error("{room} needs {required}; only {available} available")]
    CapacityExceeded {
        room: String,
        required: Area,
        available: Area,
    },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a capacity error for a room that would overflow a house.
    ///
    /// `available` is the space left at the moment of rejection, not the
    /// house's total capacity.
    pub fn capacity_exceeded(room: impl Into<String>, required: Area, available: Area) -> Self {
        Self::CapacityExceeded {
            room: room.into(),
            required,
            available,
        }
    }

    /// Returns true for capacity rejections.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("plan has no neighborhoods");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: plan has no neighborhoods"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown house kind: castle");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown house kind: castle");
    }

    #[test]
    fn test_capacity_exceeded_error() {
        let err = DomainError::capacity_exceeded("master bedroom", Area::new(25.0), Area::new(20.0));
        assert!(err.is_capacity_exceeded());
        assert_eq!(
            err.to_string(),
            "master bedroom needs 25; only 20 available"
        );
    }

    #[test]
    fn test_capacity_message_keeps_fractions() {
        let err = DomainError::capacity_exceeded("very small closet", Area::new(0.01), Area::ZERO);
        assert_eq!(err.to_string(), "very small closet needs 0.01; only 0 available");
    }
}
