pub mod axes;
pub mod figure;
pub mod scale_bars;
pub mod style;
pub mod trace_plot;

pub use axes::Axes;
pub use figure::{DPI, FigureSize, TraceFigure, compute_figure_size, pane_count};
pub use scale_bars::{ScaleBars, draw_scale_bars};
pub use style::{Style, StylePreset};
pub use trace_plot::TracePlot;
