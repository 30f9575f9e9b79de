//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors surfaced to the caller of a planning request.
///
/// Every variant aborts the current request; none of them leave partial
/// routes or reports behind.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A requested name does not resolve to any catalog entry.
    #[error("unknown point: '{name}'")]
    UnknownPoint {
        /// The name as the caller supplied it.
        name: String,
    },
    /// Fewer than two distinct points were selected.
    #[error("at least 2 distinct points are required, got {found}")]
    InsufficientPoints {
        /// Number of distinct points in the selection.
        found: usize,
    },
    /// A catalog entry has coordinates outside the valid range.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// Two catalog entries normalize to the same name, or a point set
    /// lists the same point twice.
    #[error("duplicate point: '{name}'")]
    DuplicatePoint {
        /// The repeated name.
        name: String,
    },
    /// Price per distance unit is negative or not finite.
    #[error("invalid price per unit: {0}")]
    InvalidPrice(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unknown_point(name: impl Into<String>) -> Self {
        Self::UnknownPoint { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::unknown_point("Atlantis").to_string(),
            "unknown point: 'Atlantis'"
        );
        assert_eq!(
            Error::InsufficientPoints { found: 1 }.to_string(),
            "at least 2 distinct points are required, got 1"
        );
        assert_eq!(Error::InvalidPrice(-1.0).to_string(), "invalid price per unit: -1");
    }
}
