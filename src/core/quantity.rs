use serde::{Deserialize, Serialize};

/// Permitted time scale-bar lengths, in milliseconds.
pub const TIME_BAR_LENGTHS: [f64; 14] = [
    0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0,
];

/// Permitted voltage scale-bar lengths, in millivolts.
pub const VOLTAGE_BAR_LENGTHS: [f64; 9] = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

/// Permitted current scale-bar lengths, in nanoamperes.
pub const CURRENT_BAR_LENGTHS: [f64; 10] =
    [0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 50.0];

/// Physical quantity carried by one plotted dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    Time,
    Voltage,
    Current,
}

impl Quantity {
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Quantity::Time => "ms",
            Quantity::Voltage => "mV",
            Quantity::Current => "nA",
        }
    }

    /// Conventional axis label used when scale bars are disabled.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Quantity::Time => "Time (ms)",
            Quantity::Voltage => "Voltage (mV)",
            Quantity::Current => "Current (nA)",
        }
    }

    /// The fixed candidate set a scale bar of this quantity snaps to.
    ///
    /// Each set is strictly increasing and all-positive.
    #[must_use]
    pub const fn bar_length_candidates(self) -> &'static [f64] {
        match self {
            Quantity::Time => &TIME_BAR_LENGTHS,
            Quantity::Voltage => &VOLTAGE_BAR_LENGTHS,
            Quantity::Current => &CURRENT_BAR_LENGTHS,
        }
    }
}
