use proptest::prelude::*;

use ephys_plot::core::{
    AxisRange, Quantity, TIME_BAR_LENGTHS, VOLTAGE_BAR_LENGTHS, bar_origin, select_bar_length,
};

proptest! {
    #[test]
    fn selection_always_returns_a_candidate(
        range_min in -1_000_000.0f64..1_000_000.0,
        range_span in 0.001f64..1_000_000.0,
        fraction in 0.01f64..=1.0
    ) {
        let range = AxisRange::new(range_min, range_min + range_span).expect("valid range");
        let selected = select_bar_length(range, &TIME_BAR_LENGTHS, fraction).expect("selection");
        prop_assert!(TIME_BAR_LENGTHS.iter().any(|&candidate| candidate == selected));
    }

    #[test]
    fn selection_is_a_pure_function(
        range_min in -10_000.0f64..10_000.0,
        range_span in 0.001f64..10_000.0,
        fraction in 0.01f64..=1.0
    ) {
        let range = AxisRange::new(range_min, range_min + range_span).expect("valid range");
        let first = select_bar_length(range, &VOLTAGE_BAR_LENGTHS, fraction).expect("selection");
        let second = select_bar_length(range, &VOLTAGE_BAR_LENGTHS, fraction).expect("selection");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn origin_sits_strictly_left_of_any_data_window(
        x_min in -100_000.0f64..100_000.0,
        x_span in 0.001f64..100_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_span in 0.001f64..1_000.0,
        time_bar in 0.1f64..5_000.0
    ) {
        let x_range = AxisRange::new(x_min, x_min + x_span).expect("valid range");
        let y_range = AxisRange::new(y_min, y_min + y_span).expect("valid range");

        let origin = bar_origin(x_range, y_range, time_bar, Quantity::Voltage);
        prop_assert!(origin.x < x_range.min());
    }

    #[test]
    fn current_origin_stays_inside_the_y_band(
        y_min in -1_000.0f64..1_000.0,
        y_span in 0.001f64..1_000.0
    ) {
        let x_range = AxisRange::new(0.0, 100.0).expect("valid range");
        let y_range = AxisRange::new(y_min, y_min + y_span).expect("valid range");

        let origin = bar_origin(x_range, y_range, 10.0, Quantity::Current);
        prop_assert!(origin.y > y_range.min());
        prop_assert!(origin.y < y_range.max());
    }
}
