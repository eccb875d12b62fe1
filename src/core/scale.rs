use crate::core::range::AxisRange;
use crate::error::{PlotError, PlotResult};

/// Pixel-space rectangle of one axes region inside the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Data-to-pixel mapping for one axes region.
///
/// `x` maps left-to-right; `y` is inverted so `y_range.max` sits at the top
/// of the region. Inputs are validated once at construction, so the mapping
/// itself is infallible. Values outside the ranges map outside the region;
/// scale bars rely on that (they are anchored left of the data).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesScale {
    x_range: AxisRange,
    y_range: AxisRange,
    region: PixelRect,
}

impl AxesScale {
    pub fn new(x_range: AxisRange, y_range: AxisRange, region: PixelRect) -> PlotResult<Self> {
        if !region.is_valid() {
            return Err(PlotError::InvalidData(format!(
                "axes region must be finite with positive size, got {region:?}"
            )));
        }
        x_range.require_positive_span()?;
        y_range.require_positive_span()?;

        Ok(Self {
            x_range,
            y_range,
            region,
        })
    }

    #[must_use]
    pub fn x_range(self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn region(self) -> PixelRect {
        self.region
    }

    #[must_use]
    pub fn x_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.x_range.min()) / self.x_range.span();
        self.region.left + normalized * self.region.width
    }

    #[must_use]
    pub fn y_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.y_range.min()) / self.y_range.span();
        self.region.bottom() - normalized * self.region.height
    }

    /// Data units covered by one horizontal pixel.
    #[must_use]
    pub fn x_per_pixel(self) -> f64 {
        self.x_range.span() / self.region.width
    }

    /// Data units covered by one vertical pixel.
    #[must_use]
    pub fn y_per_pixel(self) -> f64 {
        self.y_range.span() / self.region.height
    }
}
