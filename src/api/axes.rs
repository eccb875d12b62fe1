use crate::core::{AxesScale, AxisRange, PixelRect, Quantity, format_tick_value};
use crate::error::PlotResult;
use crate::render::{
    Color, LinePrimitive, RenderFrame, TextExtent, TextHAlign, TextPrimitive, TextVAlign,
};

const SPINE_COLOR: Color = Color::BLACK;
const SPINE_STROKE_WIDTH: f64 = 1.0;
const TICK_COUNT: usize = 5;
const TICK_MARK_LENGTH_PX: f64 = 4.0;
const TICK_LABEL_PAD_PX: f64 = 3.0;
const TICK_LABEL_PRECISION: usize = 2;
const AXIS_LABEL_PAD_PX: f64 = 34.0;

/// One plot region: a pixel rectangle plus the data ranges mapped into it.
///
/// Holds the dependent quantity drawn on its y dimension so scale bars and
/// axis labels know which unit and candidate set apply. Two axes may share
/// a region (twin y-ranges for a shared voltage/current plot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    scale: AxesScale,
    quantity: Quantity,
}

impl Axes {
    /// `quantity` is the dependent quantity on y: voltage or current.
    pub fn new(
        region: PixelRect,
        x_range: AxisRange,
        y_range: AxisRange,
        quantity: Quantity,
    ) -> PlotResult<Self> {
        Ok(Self {
            scale: AxesScale::new(x_range, y_range, region)?,
            quantity,
        })
    }

    #[must_use]
    pub fn region(&self) -> PixelRect {
        self.scale.region()
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.scale.x_range()
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.scale.y_range()
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn scale(&self) -> AxesScale {
        self.scale
    }

    /// Converts a pixel-space text extent to data units.
    #[must_use]
    pub fn extent_to_data(&self, extent: TextExtent) -> (f64, f64) {
        (
            extent.width * self.scale.x_per_pixel(),
            extent.height * self.scale.y_per_pixel(),
        )
    }

    /// Draws one series as connected segments, clipped by nothing: the
    /// ranges are fitted to the data, so segments stay inside the region.
    pub(super) fn emit_series(
        &self,
        frame: &mut RenderFrame,
        time: &[f64],
        samples: &[f64],
        color: Color,
        stroke_width: f64,
    ) {
        let sample_count = time.len().min(samples.len());
        for index in 1..sample_count {
            frame.lines.push(LinePrimitive::new(
                self.scale.x_to_pixel(time[index - 1]),
                self.scale.y_to_pixel(samples[index - 1]),
                self.scale.x_to_pixel(time[index]),
                self.scale.y_to_pixel(samples[index]),
                stroke_width,
                color,
            ));
        }
    }

    /// Draws the four spines around the region.
    pub(super) fn emit_spines(&self, frame: &mut RenderFrame) {
        let region = self.region();
        let edges = [
            (region.left, region.top, region.right(), region.top),
            (region.left, region.bottom(), region.right(), region.bottom()),
            (region.left, region.top, region.left, region.bottom()),
            (region.right(), region.top, region.right(), region.bottom()),
        ];
        for (x1, y1, x2, y2) in edges {
            frame
                .lines
                .push(LinePrimitive::new(x1, y1, x2, y2, SPINE_STROKE_WIDTH, SPINE_COLOR));
        }
    }

    /// Draws tick marks and tick labels on the bottom and left spines.
    pub(super) fn emit_ticks(&self, frame: &mut RenderFrame, font_size_px: f64) {
        let region = self.region();

        for value in tick_values(self.x_range(), TICK_COUNT) {
            let x = self.scale.x_to_pixel(value);
            frame.lines.push(LinePrimitive::new(
                x,
                region.bottom(),
                x,
                region.bottom() + TICK_MARK_LENGTH_PX,
                SPINE_STROKE_WIDTH,
                SPINE_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format_tick_value(value, TICK_LABEL_PRECISION),
                x,
                region.bottom() + TICK_MARK_LENGTH_PX + TICK_LABEL_PAD_PX,
                font_size_px,
                SPINE_COLOR,
                TextHAlign::Center,
                TextVAlign::Top,
            ));
        }

        for value in tick_values(self.y_range(), TICK_COUNT) {
            let y = self.scale.y_to_pixel(value);
            frame.lines.push(LinePrimitive::new(
                region.left - TICK_MARK_LENGTH_PX,
                y,
                region.left,
                y,
                SPINE_STROKE_WIDTH,
                SPINE_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format_tick_value(value, TICK_LABEL_PRECISION),
                region.left - TICK_MARK_LENGTH_PX - TICK_LABEL_PAD_PX,
                y,
                font_size_px,
                SPINE_COLOR,
                TextHAlign::Right,
                TextVAlign::Middle,
            ));
        }
    }

    /// Conventional axis labels, used when scale bars are disabled.
    ///
    /// A shared-axis twin puts its y label on the right spine and skips
    /// the x label its base pane already carries.
    pub(super) fn emit_axis_labels(&self, frame: &mut RenderFrame, font_size_px: f64, twin: bool) {
        let region = self.region();

        if !twin {
            frame.texts.push(TextPrimitive::new(
                Quantity::Time.axis_label(),
                region.left + region.width / 2.0,
                region.bottom() + AXIS_LABEL_PAD_PX,
                font_size_px,
                SPINE_COLOR,
                TextHAlign::Center,
                TextVAlign::Top,
            ));
        }

        let (label_x, rotation) = if twin {
            (region.right() + AXIS_LABEL_PAD_PX, -90.0)
        } else {
            (region.left - AXIS_LABEL_PAD_PX, 90.0)
        };
        frame.texts.push(
            TextPrimitive::new(
                self.quantity.axis_label(),
                label_x,
                region.top + region.height / 2.0,
                font_size_px,
                SPINE_COLOR,
                TextHAlign::Center,
                TextVAlign::Bottom,
            )
            .with_rotation(rotation),
        );
    }
}

fn tick_values(range: AxisRange, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }
    if tick_count == 1 {
        return vec![range.min()];
    }

    let span = range.span();
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.min() + span * ratio
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::tick_values;
    use crate::core::AxisRange;

    #[test]
    fn tick_values_span_the_range_inclusively() {
        let range = AxisRange::new(0.0, 100.0).expect("valid range");
        let ticks = tick_values(range, 5);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn single_tick_sits_at_the_range_floor() {
        let range = AxisRange::new(-10.0, 10.0).expect("valid range");
        assert_eq!(tick_values(range, 1), vec![-10.0]);
    }
}
