use approx::assert_abs_diff_eq;

use ephys_plot::core::{
    AxisRange, BarOrigin, Quantity, bar_origin, place_amplitude_label, place_time_label,
    provisional_label_placements,
};
use ephys_plot::render::{TextHAlign, TextVAlign};

#[test]
fn origin_sits_strictly_left_of_the_data() {
    let x_range = AxisRange::new(0.0, 100.0).expect("valid range");
    let y_range = AxisRange::new(-80.0, 20.0).expect("valid range");

    let origin = bar_origin(x_range, y_range, 10.0, Quantity::Voltage);
    assert!(origin.x < x_range.min());
    assert_abs_diff_eq!(origin.x, -12.0, epsilon = 1e-9);
}

#[test]
fn voltage_origin_sits_exactly_at_the_range_floor() {
    let x_range = AxisRange::new(0.0, 100.0).expect("valid range");
    let y_range = AxisRange::new(-80.0, 20.0).expect("valid range");

    let origin = bar_origin(x_range, y_range, 10.0, Quantity::Voltage);
    assert_eq!(origin.y, y_range.min());
}

#[test]
fn current_origin_is_raised_into_the_visible_band() {
    let x_range = AxisRange::new(0.0, 100.0).expect("valid range");
    let y_range = AxisRange::new(-2.0, 2.0).expect("valid range");

    let origin = bar_origin(x_range, y_range, 10.0, Quantity::Current);
    assert!(origin.y > y_range.min());
    assert!(origin.y < y_range.max());
    assert_abs_diff_eq!(origin.y, -0.8, epsilon = 1e-9);
}

#[test]
fn provisional_placements_anchor_both_labels_at_the_origin() {
    let origin = BarOrigin { x: -12.0, y: -80.0 };
    let (time, amplitude) = provisional_label_placements(origin);

    assert_eq!((time.x, time.y), (origin.x, origin.y));
    assert_eq!(time.h_align, TextHAlign::Center);
    assert_eq!(time.v_align, TextVAlign::Bottom);

    assert_eq!((amplitude.x, amplitude.y), (origin.x, origin.y));
    assert_eq!(amplitude.h_align, TextHAlign::Left);
    assert_eq!(amplitude.v_align, TextVAlign::Middle);
}

#[test]
fn amplitude_label_is_left_aligned_for_voltage_and_current_alike() {
    // The original tool never varied this alignment by quantity; neither
    // does the placement, which takes no quantity at all.
    let origin = BarOrigin { x: 0.0, y: 0.0 };
    let (_, amplitude) = provisional_label_placements(origin);
    assert_eq!(amplitude.h_align, TextHAlign::Left);

    let placed = place_amplitude_label(origin, 20.0, 4.0);
    assert_eq!(placed.h_align, TextHAlign::Left);
}

#[test]
fn time_label_is_centered_over_the_bar_and_dropped_below_it() {
    let origin = BarOrigin { x: -12.0, y: -80.0 };
    let placed = place_time_label(origin, 10.0, 2.5);

    assert_abs_diff_eq!(placed.x, -7.0, epsilon = 1e-9);
    assert_abs_diff_eq!(placed.y, -80.0 - 1.8 * 2.5, epsilon = 1e-9);
    assert_eq!(placed.h_align, TextHAlign::Center);
    assert_eq!(placed.v_align, TextVAlign::Bottom);
}

#[test]
fn amplitude_label_clears_the_vertical_bar() {
    let origin = BarOrigin { x: -12.0, y: -80.0 };
    let placed = place_amplitude_label(origin, 20.0, 6.0);

    assert_abs_diff_eq!(placed.x, -12.0 - 1.3 * 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(placed.y, -70.0, epsilon = 1e-9);
}

#[test]
fn placement_is_idempotent_for_identical_measurements() {
    let origin = BarOrigin { x: -12.0, y: -80.0 };

    let first = place_time_label(origin, 10.0, 2.5);
    let second = place_time_label(origin, 10.0, 2.5);
    assert_eq!(first, second);

    let first = place_amplitude_label(origin, 20.0, 6.0);
    let second = place_amplitude_label(origin, 20.0, 6.0);
    assert_eq!(first, second);
}
