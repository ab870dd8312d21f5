//! Validated numeric inputs for drawing a chart.
//!
//! The layout engine itself takes raw `f64` pixels and trusts its caller.
//! `ChartSize` is the checked front door used by the renderer.

use std::fmt;

use crate::errors::ChartError;
use crate::layout::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value leaves no drawable area
    TooLarge,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge => write!(f, "value is too large"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Side length and inset margin of the square chart, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSize {
    size: f64,
    margin: f64,
}

impl ChartSize {
    /// Create a ChartSize (unchecked).
    /// Use `try_new` for user-provided values.
    pub(crate) const fn new(size: f64, margin: f64) -> Self {
        ChartSize { size, margin }
    }

    /// Create a ChartSize with validation.
    ///
    /// The size must be positive and finite; the margin must be finite,
    /// non-negative, and leave a non-empty square inside the inset.
    pub fn try_new(size: f64, margin: f64) -> Result<Self, ChartError> {
        let size = check_finite(size).map_err(|reason| ChartError::InvalidSize { value: size, reason })?;
        if size == 0.0 {
            return Err(ChartError::InvalidSize { value: size, reason: NumericError::Zero });
        }
        if size < 0.0 {
            return Err(ChartError::InvalidSize { value: size, reason: NumericError::Negative });
        }

        let margin =
            check_finite(margin).map_err(|reason| ChartError::InvalidMargin { value: margin, reason })?;
        if margin < 0.0 {
            return Err(ChartError::InvalidMargin { value: margin, reason: NumericError::Negative });
        }
        if margin * 2.0 >= size {
            return Err(ChartError::InvalidMargin { value: margin, reason: NumericError::TooLarge });
        }

        Ok(ChartSize { size, margin })
    }

    /// Side length of the drawing in pixels
    #[inline]
    pub fn size(self) -> f64 {
        self.size
    }

    /// Inset from each edge to the outer square, in pixels
    #[inline]
    pub fn margin(self) -> f64 {
        self.margin
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        ChartSize::new(defaults::SIZE, defaults::MARGIN)
    }
}

impl fmt::Display for ChartSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px (margin {}px)", self.size, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_size_accepts_typical_values() {
        let size = ChartSize::try_new(280.0, 2.0).unwrap();
        assert_eq!(size.size(), 280.0);
        assert_eq!(size.margin(), 2.0);
    }

    #[test]
    fn chart_size_default_matches_defaults() {
        let size = ChartSize::default();
        assert_eq!(size.size(), defaults::SIZE);
        assert_eq!(size.margin(), defaults::MARGIN);
    }

    #[test]
    fn chart_size_rejects_non_positive_size() {
        assert!(matches!(
            ChartSize::try_new(0.0, 0.0),
            Err(ChartError::InvalidSize { reason: NumericError::Zero, .. })
        ));
        assert!(matches!(
            ChartSize::try_new(-10.0, 0.0),
            Err(ChartError::InvalidSize { reason: NumericError::Negative, .. })
        ));
    }

    #[test]
    fn chart_size_rejects_nan_and_infinity() {
        assert!(matches!(
            ChartSize::try_new(f64::NAN, 2.0),
            Err(ChartError::InvalidSize { reason: NumericError::NaN, .. })
        ));
        assert!(matches!(
            ChartSize::try_new(f64::INFINITY, 2.0),
            Err(ChartError::InvalidSize { reason: NumericError::Infinite, .. })
        ));
        assert!(matches!(
            ChartSize::try_new(300.0, f64::NAN),
            Err(ChartError::InvalidMargin { reason: NumericError::NaN, .. })
        ));
    }

    #[test]
    fn chart_size_rejects_margin_that_swallows_the_square() {
        assert!(matches!(
            ChartSize::try_new(100.0, 50.0),
            Err(ChartError::InvalidMargin { reason: NumericError::TooLarge, .. })
        ));
        assert!(matches!(
            ChartSize::try_new(100.0, -1.0),
            Err(ChartError::InvalidMargin { reason: NumericError::Negative, .. })
        ));
    }

    #[test]
    fn numeric_error_messages() {
        assert_eq!(NumericError::Zero.to_string(), "value is zero");
        assert_eq!(NumericError::TooLarge.to_string(), "value is too large");
    }
}
