use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PixelRect, Viewport};
use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

use super::axes::Axes;
use super::style::Style;

/// Raster resolution used to convert figure inches to pixels.
pub const DPI: f64 = 100.0;

const BASE_WIDTH_IN: f64 = 6.4;
const BASE_PANE_HEIGHT_IN: f64 = 4.8;
const POINTS_PER_INCH: f64 = 72.0;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(
            (self.width_in * DPI).round() as u32,
            (self.height_in * DPI).round() as u32,
        )
    }
}

/// Number of stacked panes needed for the given series mix.
///
/// Voltage and current each get a pane of their own unless they share one
/// or no current is present.
#[must_use]
pub fn pane_count(n_voltage_series: usize, n_current_series: usize, shared_axis: bool) -> usize {
    if shared_axis || n_current_series == 0 {
        n_voltage_series
    } else {
        n_voltage_series + n_current_series
    }
}

/// Sizing heuristic for a figure with `pane_count` stacked panes.
///
/// Base 6.4 × 4.8·n inches, widened for scale-bar clearance, heightened
/// for a title band and spine/tick margins. Coarse by design.
#[must_use]
pub fn compute_figure_size(pane_count: usize, has_title: bool, style: &Style) -> FigureSize {
    let mut width_in = BASE_WIDTH_IN;
    let mut height_in = BASE_PANE_HEIGHT_IN * pane_count as f64;

    if style.scale_bars {
        width_in += 1.0;
    }
    if has_title {
        height_in += 2.0 * style.title_fontsize / POINTS_PER_INCH;
    }
    if style.show_spines {
        width_in += 1.0;
        height_in += 1.0;
    }

    FigureSize {
        width_in,
        height_in,
    }
}

/// Margin fractions for the stacked pane layout.
const MARGIN_RIGHT: f64 = 0.05;
const MARGIN_BOTTOM: f64 = 0.10;
const MARGIN_TOP: f64 = 0.06;
const MARGIN_TOP_TITLED: f64 = 0.10;
const MARGIN_LEFT: f64 = 0.15;
const MARGIN_LEFT_SCALE_BARS: f64 = 0.30;
const PANE_GAP: f64 = 0.08;

/// Computes the pixel region of each stacked pane, top to bottom.
///
/// Scale bars hang left of the data, so that layout reserves a wider left
/// margin for them.
#[must_use]
pub(super) fn pane_regions(
    viewport: Viewport,
    pane_count: usize,
    has_title: bool,
    style: &Style,
) -> Vec<PixelRect> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let left = if style.scale_bars {
        MARGIN_LEFT_SCALE_BARS
    } else {
        MARGIN_LEFT
    };
    let top = if has_title { MARGIN_TOP_TITLED } else { MARGIN_TOP };

    let region_width = width * (1.0 - left - MARGIN_RIGHT);
    let usable = 1.0 - top - MARGIN_BOTTOM - PANE_GAP * (pane_count.saturating_sub(1)) as f64;
    let region_height = height * usable / pane_count.max(1) as f64;

    (0..pane_count)
        .map(|index| {
            let offset = top + (index as f64) * (usable / pane_count.max(1) as f64 + PANE_GAP);
            PixelRect::new(width * left, height * offset, region_width, region_height)
        })
        .collect()
}

/// A built figure: viewport, axes, and the frame ready for any renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceFigure {
    viewport: Viewport,
    size: FigureSize,
    axes: SmallVec<[Axes; 2]>,
    frame: RenderFrame,
    title: Option<String>,
}

impl TraceFigure {
    pub(super) fn new(
        viewport: Viewport,
        size: FigureSize,
        axes: SmallVec<[Axes; 2]>,
        frame: RenderFrame,
        title: Option<String>,
    ) -> Self {
        Self {
            viewport,
            size,
            axes,
            frame,
            title,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn size(&self) -> FigureSize {
        self.size
    }

    /// All drawn axes, including the twin created for a shared-axis plot.
    #[must_use]
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Hands the figure's frame to a rendering backend.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> PlotResult<()> {
        renderer.render(&self.frame)
    }
}
