use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextVAlign};

/// SVG renderer backend.
///
/// Produces a standalone SVG document for the last rendered frame. SVG keeps
/// the figure resolution-independent, which suits publication output.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Color,
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            document: None,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    pub fn set_background(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    /// SVG document produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Writes the last rendered document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let Some(document) = &self.document else {
            return Err(PlotError::InvalidData(
                "no frame has been rendered yet".to_owned(),
            ));
        };

        let mut file = File::create(path.as_ref())
            .map_err(|err| PlotError::InvalidData(format!("failed to create svg file: {err}")))?;
        file.write_all(document.as_bytes())
            .map_err(|err| PlotError::InvalidData(format!("failed to write svg file: {err}")))?;
        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;

        let mut content: Vec<String> = Vec::with_capacity(frame.lines.len() + frame.texts.len() + 1);
        content.push(format!(
            "<rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            rgb_attr(self.background)
        ));

        for line in &frame.lines {
            content.push(format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                rgb_attr(line.color),
                line.color.alpha,
                line.stroke_width,
            ));
        }

        for text in &frame.texts {
            let transform = if text.rotation_degrees != 0.0 {
                format!(
                    " transform=\"rotate({},{:.2},{:.2})\"",
                    -text.rotation_degrees, text.x, text.y
                )
            } else {
                String::new()
            };
            content.push(format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" fill-opacity=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"{}>{}</text>",
                text.x,
                text.y,
                text.font_size_px,
                rgb_attr(text.color),
                text.color.alpha,
                anchor_attr(text.h_align),
                baseline_attr(text.v_align),
                transform,
                escape_xml(&text.text),
            ));
        }

        self.document = Some(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n  {}\n</svg>\n",
            content.join("\n  ")
        ));
        Ok(())
    }
}

fn rgb_attr(color: Color) -> String {
    let channel = |value: f64| (value * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    )
}

fn anchor_attr(h_align: TextHAlign) -> &'static str {
    match h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn baseline_attr(v_align: TextVAlign) -> &'static str {
    match v_align {
        TextVAlign::Top => "hanging",
        TextVAlign::Middle => "middle",
        TextVAlign::Bottom => "auto",
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
