pub mod format;
pub mod quantity;
pub mod range;
pub mod scale;
pub mod scale_bar;
pub mod types;

pub use format::{format_bar_value, format_tick_value};
pub use quantity::{CURRENT_BAR_LENGTHS, Quantity, TIME_BAR_LENGTHS, VOLTAGE_BAR_LENGTHS};
pub use range::AxisRange;
pub use scale::{AxesScale, PixelRect};
pub use scale_bar::{
    BarLengths, BarOrigin, DEFAULT_BAR_FRACTION, LabelPlacement, bar_lengths, bar_origin,
    place_amplitude_label, place_time_label, provisional_label_placements, select_bar_length,
};
pub use types::Viewport;
