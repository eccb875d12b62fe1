use tracing::debug;

use crate::core::{
    BarLengths, BarOrigin, DEFAULT_BAR_FRACTION, LabelPlacement, Quantity, bar_lengths,
    bar_origin, format_bar_value, place_amplitude_label, place_time_label,
};
use crate::error::PlotResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextMeasurer, TextPrimitive};

use super::axes::Axes;
use super::style::Style;

const BAR_COLOR: Color = Color::BLACK;
const BAR_STROKE_WIDTH: f64 = 1.0;

/// Everything chosen while drawing one scale-bar pair, for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBars {
    pub lengths: BarLengths,
    pub origin: BarOrigin,
    pub time_label: LabelPlacement,
    pub amplitude_label: LabelPlacement,
}

/// Draws an L-shaped scale-bar pair with labels onto `frame`.
///
/// Bar lengths snap to the candidate sets for the axes' quantities, the
/// anchor sits left of the visible data, and labels are placed in two
/// passes: a provisional placement is measured, then the final position is
/// computed from the measured extent so neither label overlaps its bar.
/// Bars are intentionally not clipped to the axes region.
///
/// With `debug_bounds`, each measured label box is outlined as a diagnostic
/// aid for tuning measurers.
pub fn draw_scale_bars(
    frame: &mut RenderFrame,
    axes: &Axes,
    style: &Style,
    measurer: &dyn TextMeasurer,
    debug_bounds: bool,
) -> PlotResult<ScaleBars> {
    let lengths = bar_lengths(
        axes.x_range(),
        axes.y_range(),
        axes.quantity(),
        DEFAULT_BAR_FRACTION,
    )?;
    let origin = bar_origin(axes.x_range(), axes.y_range(), lengths.time, axes.quantity());

    let scale = axes.scale();
    frame.lines.push(LinePrimitive::new(
        scale.x_to_pixel(origin.x),
        scale.y_to_pixel(origin.y),
        scale.x_to_pixel(origin.x + lengths.time),
        scale.y_to_pixel(origin.y),
        BAR_STROKE_WIDTH,
        BAR_COLOR,
    ));
    frame.lines.push(LinePrimitive::new(
        scale.x_to_pixel(origin.x),
        scale.y_to_pixel(origin.y),
        scale.x_to_pixel(origin.x),
        scale.y_to_pixel(origin.y + lengths.amplitude),
        BAR_STROKE_WIDTH,
        BAR_COLOR,
    ));

    let time_text = format!("{} {}", format_bar_value(lengths.time), Quantity::Time.unit());
    let amplitude_text = format!(
        "{} {}",
        format_bar_value(lengths.amplitude),
        axes.quantity().unit()
    );

    let time_extent = measurer.measure(&time_text, style.scale_bars_fontsize);
    let (_, time_height) = axes.extent_to_data(time_extent);
    let time_label = place_time_label(origin, lengths.time, time_height);

    let amplitude_extent = measurer.measure(&amplitude_text, style.scale_bars_fontsize);
    let (amplitude_width, _) = axes.extent_to_data(amplitude_extent);
    let amplitude_label = place_amplitude_label(origin, lengths.amplitude, amplitude_width);

    for (text, placement) in [(time_text, time_label), (amplitude_text, amplitude_label)] {
        frame.texts.push(TextPrimitive::new(
            text,
            scale.x_to_pixel(placement.x),
            scale.y_to_pixel(placement.y),
            style.scale_bars_fontsize,
            BAR_COLOR,
            placement.h_align,
            placement.v_align,
        ));
    }

    if debug_bounds {
        outline_label_bounds(frame, axes, time_label, time_extent.width, time_extent.height);
        outline_label_bounds(
            frame,
            axes,
            amplitude_label,
            amplitude_extent.width,
            amplitude_extent.height,
        );
    }

    debug!(
        time_bar = lengths.time,
        amplitude_bar = lengths.amplitude,
        origin_x = origin.x,
        origin_y = origin.y,
        "placed scale bars"
    );

    Ok(ScaleBars {
        lengths,
        origin,
        time_label,
        amplitude_label,
    })
}

/// Outlines one measured label box in pixel space.
fn outline_label_bounds(
    frame: &mut RenderFrame,
    axes: &Axes,
    placement: LabelPlacement,
    width_px: f64,
    height_px: f64,
) {
    use crate::render::{TextHAlign, TextVAlign};

    let scale = axes.scale();
    let anchor_x = scale.x_to_pixel(placement.x);
    let anchor_y = scale.y_to_pixel(placement.y);

    let left = match placement.h_align {
        TextHAlign::Left => anchor_x,
        TextHAlign::Center => anchor_x - width_px / 2.0,
        TextHAlign::Right => anchor_x - width_px,
    };
    let top = match placement.v_align {
        TextVAlign::Top => anchor_y,
        TextVAlign::Middle => anchor_y - height_px / 2.0,
        TextVAlign::Bottom => anchor_y - height_px,
    };
    let right = left + width_px;
    let bottom = top + height_px;

    for (x1, y1, x2, y2) in [
        (left, top, right, top),
        (left, bottom, right, bottom),
        (left, top, left, bottom),
        (right, top, right, bottom),
    ] {
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, BAR_STROKE_WIDTH, BAR_COLOR));
    }
}
