use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Visible bounds of one plotted dimension, in data units.
///
/// Bounds must be finite and ordered (`max >= min`). A zero-width range is
/// representable (a flat trace produces one), but operations that need a
/// positive span reject it with [`PlotError::DegenerateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "axis range bounds must be finite, got [{min}, {max}]"
            )));
        }
        if max < min {
            return Err(PlotError::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Fits a range to a series' own minimum and maximum.
    pub fn from_samples(samples: &[f64]) -> PlotResult<Self> {
        if samples.is_empty() {
            return Err(PlotError::InvalidData(
                "cannot fit an axis range to an empty series".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &sample in samples {
            if !sample.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "series contains a non-finite sample: {sample}"
                )));
            }
            min = min.min(sample);
            max = max.max(sample);
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Errors with [`PlotError::DegenerateRange`] unless the span is positive.
    pub fn require_positive_span(self) -> PlotResult<Self> {
        if self.is_degenerate() {
            return Err(PlotError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }
}
