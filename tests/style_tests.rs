use ephys_plot::{PlotError, Style, StylePreset};

#[test]
fn presets_resolve_by_name() {
    assert_eq!(
        StylePreset::from_name("explore").expect("known preset"),
        StylePreset::Explore
    );
    assert_eq!(
        StylePreset::from_name("paper").expect("known preset"),
        StylePreset::Paper
    );
}

#[test]
fn preset_names_round_trip() {
    for preset in [StylePreset::Explore, StylePreset::Paper] {
        let resolved = StylePreset::from_name(preset.name()).expect("round trip");
        assert_eq!(resolved, preset);
    }
}

#[test]
fn unknown_names_are_rejected() {
    let result = StylePreset::from_name("poster");
    match result {
        Err(PlotError::UnknownStyle(name)) => assert_eq!(name, "poster"),
        other => panic!("expected UnknownStyle, got {other:?}"),
    }
}

#[test]
fn explore_uses_spines_and_paper_uses_scale_bars() {
    let explore = Style::preset(StylePreset::Explore);
    assert!(explore.show_spines);
    assert!(!explore.scale_bars);

    let paper = Style::preset(StylePreset::Paper);
    assert!(!paper.show_spines);
    assert!(paper.scale_bars);
}

#[test]
fn an_already_built_style_passes_through_unchanged() {
    let mut style = Style::preset(StylePreset::Paper);
    style.linewidth = 2.0;

    let figure = ephys_plot::TracePlot::new(&[0.0, 1.0, 2.0], &[-70.0, -30.0, -65.0])
        .style(style.clone())
        .build()
        .expect("figure");
    assert!(figure.frame().lines.iter().any(|line| line.stroke_width == 2.0));
}

#[test]
fn style_values_are_validated() {
    let mut style = Style::default();
    style.voltage_alpha = 1.5;
    assert!(matches!(style.validate(), Err(PlotError::InvalidData(_))));

    let mut style = Style::default();
    style.linewidth = 0.0;
    assert!(matches!(style.validate(), Err(PlotError::InvalidData(_))));
}

#[test]
fn styles_serialize_for_host_persistence() {
    let style = Style::preset(StylePreset::Paper);
    let json = serde_json::to_string(&style).expect("serialize");
    let restored: Style = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, style);

    let preset_json = serde_json::to_string(&StylePreset::Paper).expect("serialize");
    assert_eq!(preset_json, "\"paper\"");
}
