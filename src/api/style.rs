use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Named style presets.
///
/// A closed set: resolution is a table lookup, not runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// On-screen exploration: spines and tick labels, no scale bars.
    Explore,
    /// Publication: scale bars instead of spines, muted trace colors.
    Paper,
}

impl StylePreset {
    pub fn from_name(name: &str) -> PlotResult<Self> {
        match name {
            "explore" => Ok(Self::Explore),
            "paper" => Ok(Self::Paper),
            other => Err(PlotError::UnknownStyle(other.to_owned())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::Paper => "paper",
        }
    }
}

/// Immutable bundle of plot appearance settings.
///
/// Serializable so host applications can persist/load a plotting setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub voltage_color: Color,
    pub current_color: Color,
    pub voltage_alpha: f64,
    pub current_alpha: f64,
    /// Trace line width in pixels.
    pub linewidth: f64,
    pub title_fontsize: f64,
    pub label_fontsize: f64,
    pub scale_bars_fontsize: f64,
    /// Draw scale bars instead of conventional axis labels.
    pub scale_bars: bool,
    pub show_spines: bool,
    /// Plot voltage and current in one region with twin y-ranges.
    pub shared_axis: bool,
}

impl Style {
    #[must_use]
    pub fn preset(preset: StylePreset) -> Self {
        match preset {
            StylePreset::Explore => Self::explore(),
            StylePreset::Paper => Self::paper(),
        }
    }

    /// Resolves a preset name; unknown names fail with
    /// [`PlotError::UnknownStyle`].
    pub fn from_name(name: &str) -> PlotResult<Self> {
        Ok(Self::preset(StylePreset::from_name(name)?))
    }

    fn explore() -> Self {
        Self {
            voltage_color: Color::rgb(0.122, 0.467, 0.706),
            current_color: Color::rgb(1.0, 0.498, 0.055),
            voltage_alpha: 1.0,
            current_alpha: 1.0,
            linewidth: 1.0,
            title_fontsize: 14.0,
            label_fontsize: 12.0,
            scale_bars_fontsize: 10.0,
            scale_bars: false,
            show_spines: true,
            shared_axis: false,
        }
    }

    fn paper() -> Self {
        Self {
            voltage_color: Color::BLACK,
            current_color: Color::rgb(0.35, 0.35, 0.35),
            voltage_alpha: 1.0,
            current_alpha: 0.8,
            linewidth: 0.7,
            title_fontsize: 12.0,
            label_fontsize: 10.0,
            scale_bars_fontsize: 8.0,
            scale_bars: true,
            show_spines: false,
            shared_axis: false,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.voltage_color.validate()?;
        self.current_color.validate()?;

        for (name, value) in [
            ("voltage_alpha", self.voltage_alpha),
            ("current_alpha", self.current_alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and in [0, 1]"
                )));
            }
        }

        for (name, value) in [
            ("linewidth", self.linewidth),
            ("title_fontsize", self.title_fontsize),
            ("label_fontsize", self.label_fontsize),
            ("scale_bars_fontsize", self.scale_bars_fontsize),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::preset(StylePreset::Explore)
    }
}

impl From<StylePreset> for Style {
    fn from(preset: StylePreset) -> Self {
        Self::preset(preset)
    }
}
