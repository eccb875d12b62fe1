use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{AxisRange, Quantity};
use crate::error::{PlotError, PlotResult};
use crate::render::{GlyphEstimateMeasurer, RenderFrame, TextHAlign, TextMeasurer, TextPrimitive, TextVAlign};

use super::axes::Axes;
use super::figure::{TraceFigure, compute_figure_size, pane_count, pane_regions};
use super::scale_bars::draw_scale_bars;
use super::style::{Style, StylePreset};

static DEFAULT_MEASURER: GlyphEstimateMeasurer = GlyphEstimateMeasurer {
    advance_ratio: 0.6,
    line_height_ratio: 1.2,
};

/// Builder for one electrophysiology trace figure.
///
/// Plots a voltage series and, optionally, a current series against a
/// shared time base. The style decides whether panes carry spines and tick
/// labels or scale bars.
///
/// ```no_run
/// use ephys_plot::{TracePlot, StylePreset};
///
/// let time: Vec<f64> = (0..1000).map(|i| i as f64 * 0.1).collect();
/// let voltage: Vec<f64> = time.iter().map(|t| -70.0 + 10.0 * (t / 20.0).sin()).collect();
///
/// let figure = TracePlot::new(&time, &voltage)
///     .title("cell 3, sweep 12")
///     .style_preset(StylePreset::Paper)
///     .build()?;
/// # Ok::<(), ephys_plot::PlotError>(())
/// ```
pub struct TracePlot<'a> {
    time: &'a [f64],
    voltage: &'a [f64],
    current: Option<&'a [f64]>,
    title: Option<String>,
    style: Style,
    axes: Option<Vec<Axes>>,
    measurer: &'a dyn TextMeasurer,
    debug_label_bounds: bool,
}

impl<'a> TracePlot<'a> {
    /// Time in ms, voltage in mV.
    #[must_use]
    pub fn new(time: &'a [f64], voltage: &'a [f64]) -> Self {
        Self {
            time,
            voltage,
            current: None,
            title: None,
            style: Style::default(),
            axes: None,
            measurer: &DEFAULT_MEASURER,
            debug_label_bounds: false,
        }
    }

    /// Current in nA, sampled on the same time base as the voltage.
    #[must_use]
    pub fn current(mut self, current: &'a [f64]) -> Self {
        self.current = Some(current);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn style_preset(mut self, preset: StylePreset) -> Self {
        self.style = Style::preset(preset);
        self
    }

    /// Resolves a preset by name; unknown names fail with
    /// [`PlotError::UnknownStyle`].
    pub fn style_name(mut self, name: &str) -> PlotResult<Self> {
        self.style = Style::from_name(name)?;
        Ok(self)
    }

    /// Adopts pre-existing axes instead of computing fresh pane regions.
    ///
    /// Only the regions are reused; ranges and quantities are refitted to
    /// the data. The count must equal the required pane count or `build`
    /// fails with [`PlotError::ShapeMismatch`] before drawing anything.
    #[must_use]
    pub fn axes(mut self, axes: Vec<Axes>) -> Self {
        self.axes = Some(axes);
        self
    }

    /// Overrides the text measurer used for scale-bar label placement.
    #[must_use]
    pub fn text_measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = measurer;
        self
    }

    /// Outlines measured label boxes; diagnostic aid for tuning measurers.
    #[must_use]
    pub fn debug_label_bounds(mut self, enabled: bool) -> Self {
        self.debug_label_bounds = enabled;
        self
    }

    pub fn build(&self) -> PlotResult<TraceFigure> {
        self.style.validate()?;
        self.validate_series()?;

        let has_title = self.title.is_some();
        let required = pane_count(
            1,
            usize::from(self.current.is_some()),
            self.style.shared_axis,
        );

        let size = compute_figure_size(required, has_title, &self.style);
        let viewport = size.viewport();
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let regions = match &self.axes {
            Some(axes) => {
                if axes.len() != required {
                    return Err(PlotError::ShapeMismatch {
                        expected: required,
                        actual: axes.len(),
                    });
                }
                axes.iter().map(Axes::region).collect()
            }
            None => pane_regions(viewport, required, has_title, &self.style),
        };

        // Fit every range to the data's own extent.
        let x_range = AxisRange::new(self.time[0], self.time[self.time.len() - 1])?
            .require_positive_span()?;
        let voltage_range = AxisRange::from_samples(self.voltage)?.require_positive_span()?;

        let mut axes: SmallVec<[Axes; 2]> = SmallVec::new();
        match self.current {
            Some(current) => {
                let current_range = AxisRange::from_samples(current)?.require_positive_span()?;
                if self.style.shared_axis {
                    axes.push(Axes::new(regions[0], x_range, current_range, Quantity::Current)?);
                    axes.push(Axes::new(regions[0], x_range, voltage_range, Quantity::Voltage)?);
                } else {
                    axes.push(Axes::new(regions[0], x_range, current_range, Quantity::Current)?);
                    axes.push(Axes::new(regions[1], x_range, voltage_range, Quantity::Voltage)?);
                }
            }
            None => {
                axes.push(Axes::new(regions[0], x_range, voltage_range, Quantity::Voltage)?);
            }
        }

        debug!(
            panes = required,
            axes = axes.len(),
            width = viewport.width,
            height = viewport.height,
            "building trace figure"
        );

        let mut frame = RenderFrame::new(viewport);

        for pane in &axes {
            let (samples, color, alpha) = match pane.quantity() {
                Quantity::Current => (
                    self.current.unwrap_or(&[]),
                    self.style.current_color,
                    self.style.current_alpha,
                ),
                _ => (self.voltage, self.style.voltage_color, self.style.voltage_alpha),
            };
            pane.emit_series(
                &mut frame,
                self.time,
                samples,
                color.with_alpha(alpha),
                self.style.linewidth,
            );
        }

        // One spine/tick pass per region; a shared-axis twin reuses its
        // base pane's spines.
        if self.style.show_spines {
            for (index, pane) in axes.iter().enumerate() {
                let is_twin = index > 0 && pane.region() == axes[index - 1].region();
                if !is_twin {
                    pane.emit_spines(&mut frame);
                    pane.emit_ticks(&mut frame, self.style.label_fontsize);
                }
            }
        }

        if self.style.scale_bars {
            for pane in &axes {
                draw_scale_bars(
                    &mut frame,
                    pane,
                    &self.style,
                    self.measurer,
                    self.debug_label_bounds,
                )?;
            }
        } else {
            for (index, pane) in axes.iter().enumerate() {
                let is_twin = index > 0 && pane.region() == axes[index - 1].region();
                pane.emit_axis_labels(&mut frame, self.style.label_fontsize, is_twin);
            }
        }

        if let Some(title) = &self.title {
            frame.texts.push(TextPrimitive::new(
                title.clone(),
                f64::from(viewport.width) / 2.0,
                f64::from(viewport.height) * 0.05,
                self.style.title_fontsize,
                crate::render::Color::BLACK,
                TextHAlign::Center,
                TextVAlign::Middle,
            ));
        }

        Ok(TraceFigure::new(
            viewport,
            size,
            axes,
            frame,
            self.title.clone(),
        ))
    }

    fn validate_series(&self) -> PlotResult<()> {
        if self.time.is_empty() {
            return Err(PlotError::InvalidData(
                "time series must not be empty".to_owned(),
            ));
        }
        if self.voltage.len() != self.time.len() {
            return Err(PlotError::ShapeMismatch {
                expected: self.time.len(),
                actual: self.voltage.len(),
            });
        }
        if let Some(current) = self.current {
            if current.len() != self.time.len() {
                return Err(PlotError::ShapeMismatch {
                    expected: self.time.len(),
                    actual: current.len(),
                });
            }
        }

        if self.time.windows(2).any(|pair| pair[1] < pair[0]) {
            warn!("time series is not monotonically non-decreasing");
        }

        Ok(())
    }
}
