use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless figure construction.
///
/// Nothing is drawn, but the frame is fully validated and the primitive
/// counts of the last pass are retained, so tests can assert on figure
/// content without a drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub lines_rendered: usize,
    pub texts_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.lines_rendered = frame.lines.len();
        self.texts_rendered = frame.texts.len();
        Ok(())
    }
}
