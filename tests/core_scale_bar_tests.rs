use ephys_plot::PlotError;
use ephys_plot::core::{
    AxisRange, CURRENT_BAR_LENGTHS, Quantity, TIME_BAR_LENGTHS, VOLTAGE_BAR_LENGTHS, bar_lengths,
    select_bar_length,
};

#[test]
fn selected_length_is_always_a_candidate() {
    let range = AxisRange::new(0.0, 437.5).expect("valid range");
    let selected = select_bar_length(range, &TIME_BAR_LENGTHS, 0.15).expect("selection");
    assert!(TIME_BAR_LENGTHS.contains(&selected));
}

#[test]
fn time_range_0_to_100_snaps_tie_to_smaller_candidate() {
    // target = 0.15 * 100 = 15, equidistant from 10 and 20.
    let range = AxisRange::new(0.0, 100.0).expect("valid range");
    let selected = select_bar_length(range, &TIME_BAR_LENGTHS, 0.15).expect("selection");
    assert_eq!(selected, 10.0);
}

#[test]
fn voltage_range_minus80_to_20_snaps_tie_to_smaller_candidate() {
    let range = AxisRange::new(-80.0, 20.0).expect("valid range");
    let selected = select_bar_length(range, &VOLTAGE_BAR_LENGTHS, 0.15).expect("selection");
    assert_eq!(selected, 10.0);
}

#[test]
fn selection_is_deterministic_at_exact_ties() {
    let range = AxisRange::new(0.0, 100.0).expect("valid range");
    let first = select_bar_length(range, &TIME_BAR_LENGTHS, 0.15).expect("selection");
    for _ in 0..10 {
        let again = select_bar_length(range, &TIME_BAR_LENGTHS, 0.15).expect("selection");
        assert_eq!(first, again);
    }
}

#[test]
fn current_candidates_cover_small_ranges() {
    let range = AxisRange::new(-0.02, 0.02).expect("valid range");
    let selected = select_bar_length(range, &CURRENT_BAR_LENGTHS, 0.15).expect("selection");
    assert_eq!(selected, 0.005);
}

#[test]
fn zero_width_range_is_rejected() {
    let range = AxisRange::new(5.0, 5.0).expect("valid range");
    let result = select_bar_length(range, &TIME_BAR_LENGTHS, 0.15);
    assert!(matches!(result, Err(PlotError::DegenerateRange { .. })));
}

#[test]
fn out_of_bounds_fraction_is_rejected() {
    let range = AxisRange::new(0.0, 100.0).expect("valid range");
    for fraction in [0.0, -0.1, 1.5, f64::NAN] {
        let result = select_bar_length(range, &TIME_BAR_LENGTHS, fraction);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }
}

#[test]
fn paired_selection_uses_the_matching_candidate_set() {
    let x_range = AxisRange::new(0.0, 1000.0).expect("valid range");
    let y_range = AxisRange::new(-1.0, 1.0).expect("valid range");

    let lengths = bar_lengths(x_range, y_range, Quantity::Current, 0.15).expect("selection");
    assert!(TIME_BAR_LENGTHS.contains(&lengths.time));
    assert!(CURRENT_BAR_LENGTHS.contains(&lengths.amplitude));
    // Both targets land halfway between two candidates; ties keep the smaller.
    assert_eq!(lengths.time, 100.0);
    assert_eq!(lengths.amplitude, 0.1);
}

#[test]
fn paired_selection_rejects_time_as_amplitude() {
    let x_range = AxisRange::new(0.0, 1000.0).expect("valid range");
    let y_range = AxisRange::new(-1.0, 1.0).expect("valid range");

    let result = bar_lengths(x_range, y_range, Quantity::Time, 0.15);
    assert!(matches!(result, Err(PlotError::InvalidData(_))));
}

#[test]
fn candidate_sets_are_strictly_increasing_and_positive() {
    for candidates in [
        &TIME_BAR_LENGTHS[..],
        &VOLTAGE_BAR_LENGTHS[..],
        &CURRENT_BAR_LENGTHS[..],
    ] {
        assert!(candidates[0] > 0.0);
        for pair in candidates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
