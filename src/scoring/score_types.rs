//! Type-safe score scales.
//!
//! Composite, health and emergent metrics are percentages on a 0-100 scale;
//! alignment and fit scores are fractions on a 0-1 scale. Encoding the
//! scale in the type keeps the two from being mixed.
//!
//! # Examples
//!
//! ```rust
//! use traitmap::scoring::score_types::{Score0To100, Score0To1};
//!
//! let score = Score0To100::new(85.0);
//! assert_eq!(score.value(), 85.0);
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(Score0To100::new(150.0).value(), 100.0);
//! assert_eq!(Score0To100::from_fraction(-0.2).value(), 0.0);
//!
//! assert_eq!(Score0To1::new(0.85).denormalize().value(), 85.0);
//! ```

use serde::{Deserialize, Serialize};

/// Score on 0-100 scale.
///
/// Values are automatically clamped to the [0.0, 100.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score0To100(f64);

impl Score0To100 {
    /// Create a new score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Scale a weighted fraction (nominally 0-1) to a percentage.
    ///
    /// Fractions outside [0, 1] are clamped after scaling.
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Score on 0-1 scale (normalized).
///
/// Values are automatically clamped to the [0.0, 1.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score0To1(f64);

impl Score0To1 {
    /// Create a new normalized score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Denormalize to 0-100 scale by multiplying by 100.
    pub fn denormalize(self) -> Score0To100 {
        Score0To100(self.0 * 100.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl std::fmt::Display for Score0To1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_0_to_100_clamps_both_bounds() {
        assert_eq!(Score0To100::new(150.0).value(), 100.0);
        assert_eq!(Score0To100::new(-10.0).value(), 0.0);
    }

    #[test]
    fn score_0_to_1_clamps_both_bounds() {
        assert_eq!(Score0To1::new(1.5).value(), 1.0);
        assert_eq!(Score0To1::new(-0.5).value(), 0.0);
    }

    #[test]
    fn from_fraction_scales_by_100() {
        assert_eq!(Score0To100::from_fraction(0.5).value(), 50.0);
        assert_eq!(Score0To100::from_fraction(1.3).value(), 100.0);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Score0To100::new(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_0_to_100_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To100::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        #[test]
        fn score_0_to_1_always_in_bounds(value in -10.0..10.0f64) {
            let score = Score0To1::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 1.0);
        }

        #[test]
        fn from_fraction_preserves_ordering(a in 0.0..1.0f64, b in 0.0..1.0f64) {
            let score_a = Score0To100::from_fraction(a);
            let score_b = Score0To100::from_fraction(b);
            if a < b {
                assert!(score_a <= score_b);
            } else if a > b {
                assert!(score_a >= score_b);
            }
        }
    }
}
