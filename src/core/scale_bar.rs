//! Scale-bar sizing and placement.
//!
//! A scale-bar pair is an L shape anchored just outside the plotted data:
//! a horizontal time bar and a vertical amplitude (voltage or current) bar
//! sharing one origin. Lengths snap to the fixed candidate sets in
//! [`crate::core::quantity`]; labels are placed in two passes because their
//! final position depends on measured text extents.

use tracing::trace;

use crate::core::quantity::Quantity;
use crate::core::range::AxisRange;
use crate::error::{PlotError, PlotResult};
use crate::render::{TextHAlign, TextVAlign};

/// Default bar length as a fraction of the visible axis span.
pub const DEFAULT_BAR_FRACTION: f64 = 0.15;

/// The horizontal bar starts this many bar-lengths left of the data.
const BAR_X_CLEARANCE: f64 = 1.2;

/// Fraction of the y span the origin is raised by for current bars.
///
/// Current traces usually center near zero, so a bar pinned to the axis
/// floor would sit visually disconnected from the trace. Voltage bars stay
/// at the floor. The asymmetry is intentional.
const CURRENT_BAR_Y_OFFSET: f64 = 0.3;

/// The time label drops below the bar by this multiple of its own height.
const TIME_LABEL_DROP: f64 = 1.8;

/// The amplitude label shifts left of the bar by this multiple of its own width.
const AMPLITUDE_LABEL_SHIFT: f64 = 1.3;

/// Chosen lengths for one scale-bar pair, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLengths {
    pub time: f64,
    pub amplitude: f64,
}

/// Shared anchor of the two bars, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarOrigin {
    pub x: f64,
    pub y: f64,
}

/// Position plus alignment for one scale-bar label, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

/// Picks the candidate closest to `target_fraction` of the visible span.
///
/// Exact ties keep the smaller candidate: the scan is ascending and only a
/// strictly smaller distance replaces the current best. This is a fixed
/// rule, not an accident of iteration order.
pub fn select_bar_length(
    range: AxisRange,
    candidates: &[f64],
    target_fraction: f64,
) -> PlotResult<f64> {
    if !target_fraction.is_finite() || target_fraction <= 0.0 || target_fraction > 1.0 {
        return Err(PlotError::InvalidData(format!(
            "bar target fraction must be in (0, 1], got {target_fraction}"
        )));
    }
    if candidates.is_empty() {
        return Err(PlotError::InvalidData(
            "candidate length set must not be empty".to_owned(),
        ));
    }
    let range = range.require_positive_span()?;

    let target = target_fraction * range.span();
    let mut best = candidates[0];
    let mut best_distance = (candidates[0] - target).abs();
    for &candidate in &candidates[1..] {
        let distance = (candidate - target).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    trace!(target, selected = best, "snapped scale bar length");
    Ok(best)
}

/// Selects both bar lengths for one axes: time plus the dependent quantity.
///
/// `amplitude` must be [`Quantity::Voltage`] or [`Quantity::Current`].
pub fn bar_lengths(
    x_range: AxisRange,
    y_range: AxisRange,
    amplitude: Quantity,
    target_fraction: f64,
) -> PlotResult<BarLengths> {
    if amplitude == Quantity::Time {
        return Err(PlotError::InvalidData(
            "amplitude quantity must be voltage or current".to_owned(),
        ));
    }

    let time = select_bar_length(x_range, Quantity::Time.bar_length_candidates(), target_fraction)?;
    let amplitude =
        select_bar_length(y_range, amplitude.bar_length_candidates(), target_fraction)?;
    Ok(BarLengths { time, amplitude })
}

/// Computes the shared anchor of the bar pair.
///
/// The anchor sits left of the visible data by 1.2 time-bar lengths. For
/// current axes it is additionally raised into the visible band (see
/// [`CURRENT_BAR_Y_OFFSET`]); voltage bars sit exactly at `y_range.min`.
#[must_use]
pub fn bar_origin(
    x_range: AxisRange,
    y_range: AxisRange,
    time_bar_length: f64,
    amplitude: Quantity,
) -> BarOrigin {
    let x = x_range.min() - BAR_X_CLEARANCE * time_bar_length;
    let y = if amplitude == Quantity::Current {
        y_range.min() + CURRENT_BAR_Y_OFFSET * y_range.span()
    } else {
        y_range.min()
    };
    BarOrigin { x, y }
}

/// First-pass placements used only to realize the labels for measurement.
///
/// Both labels start at the origin: the time label centered and
/// bottom-aligned, the amplitude label left-aligned and vertically centered.
/// The amplitude label is left-aligned for voltage AND current alike.
#[must_use]
pub fn provisional_label_placements(origin: BarOrigin) -> (LabelPlacement, LabelPlacement) {
    let time = LabelPlacement {
        x: origin.x,
        y: origin.y,
        h_align: TextHAlign::Center,
        v_align: TextVAlign::Bottom,
    };
    let amplitude = LabelPlacement {
        x: origin.x,
        y: origin.y,
        h_align: TextHAlign::Left,
        v_align: TextVAlign::Middle,
    };
    (time, amplitude)
}

/// Final time-label position from its measured height (data units).
///
/// Centered over the horizontal bar and dropped below it far enough to
/// clear the bar stroke. Pure in its inputs: identical measurements yield
/// identical placements.
#[must_use]
pub fn place_time_label(
    origin: BarOrigin,
    time_bar_length: f64,
    label_height: f64,
) -> LabelPlacement {
    LabelPlacement {
        x: origin.x + 0.5 * time_bar_length,
        y: origin.y - TIME_LABEL_DROP * label_height,
        h_align: TextHAlign::Center,
        v_align: TextVAlign::Bottom,
    }
}

/// Final amplitude-label position from its measured width (data units).
///
/// Shifted left of the vertical bar by more than its own width and centered
/// on the bar's span.
#[must_use]
pub fn place_amplitude_label(
    origin: BarOrigin,
    amplitude_bar_length: f64,
    label_width: f64,
) -> LabelPlacement {
    LabelPlacement {
        x: origin.x - AMPLITUDE_LABEL_SHIFT * label_width,
        y: origin.y + 0.5 * amplitude_bar_length,
        h_align: TextHAlign::Left,
        v_align: TextVAlign::Middle,
    }
}
