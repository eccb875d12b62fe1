use ephys_plot::core::Viewport;
use ephys_plot::render::{
    Color, LinePrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

fn black_line() -> LinePrimitive {
    LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.0, Color::BLACK)
}

fn label(text: &str) -> TextPrimitive {
    TextPrimitive::new(
        text,
        5.0,
        5.0,
        10.0,
        Color::BLACK,
        TextHAlign::Center,
        TextVAlign::Bottom,
    )
}

#[test]
fn a_valid_frame_passes_validation() {
    let frame = RenderFrame::new(Viewport::new(640, 480))
        .with_line(black_line())
        .with_text(label("10 ms"));
    frame.validate().expect("valid frame");
}

#[test]
fn zero_sized_viewports_are_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 480));
    assert!(frame.validate().is_err());
}

#[test]
fn non_finite_line_coordinates_are_rejected() {
    let mut line = black_line();
    line.x2 = f64::NAN;
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_line(line);
    assert!(frame.validate().is_err());
}

#[test]
fn zero_stroke_width_is_rejected() {
    let mut line = black_line();
    line.stroke_width = 0.0;
    assert!(line.validate().is_err());
}

#[test]
fn empty_label_text_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_text(label(""));
    assert!(frame.validate().is_err());
}

#[test]
fn out_of_range_color_channels_are_rejected() {
    assert!(Color::rgba(0.0, 0.0, 1.2, 1.0).validate().is_err());
    assert!(Color::rgba(0.0, 0.0, 0.5, -0.1).validate().is_err());
    assert!(Color::rgba(f64::INFINITY, 0.0, 0.0, 1.0).validate().is_err());
}

#[test]
fn non_finite_rotation_is_rejected() {
    let text = label("rotated").with_rotation(f64::NAN);
    assert!(text.validate().is_err());
}

#[test]
fn null_renderer_counts_primitives() {
    let frame = RenderFrame::new(Viewport::new(640, 480))
        .with_line(black_line())
        .with_line(black_line())
        .with_text(label("10 ms"));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.lines_rendered, 2);
    assert_eq!(renderer.texts_rendered, 1);
}

#[test]
fn null_renderer_refuses_invalid_frames() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_text(label(""));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
}

#[test]
fn empty_frames_report_as_empty() {
    let frame = RenderFrame::new(Viewport::new(640, 480));
    assert!(frame.is_empty());
    assert!(!frame.with_line(black_line()).is_empty());
}
