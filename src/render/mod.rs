mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;
mod text;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign};
pub use svg_backend::SvgRenderer;
pub use text::{GlyphEstimateMeasurer, TextExtent, TextMeasurer};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic [`RenderFrame`] so
/// drawing code stays isolated from figure layout and scale-bar logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, PangoTextMeasurer};
