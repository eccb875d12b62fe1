//! ephys-plot: electrophysiology trace figures with automatic scale bars.
//!
//! This crate renders voltage/current recordings as annotated figures. Bar
//! lengths are snapped to "nice" values, bars are anchored just outside the
//! plotted data, and labels are placed from measured text extents so they
//! never overlap the bars.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Style, StylePreset, TraceFigure, TracePlot};
pub use error::{PlotError, PlotResult};
