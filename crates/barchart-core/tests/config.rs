// File: crates/barchart-core/tests/config.rs
// Purpose: Chart configuration defaults and TOML overrides.

use barchart_core::{ChartConfig, ChartError, Margins, VerticalOffset};

#[test]
fn defaults_match_the_classic_layout() {
    let c = ChartConfig::default();
    assert_eq!((c.width, c.height), (960, 500));
    assert_eq!(c.margins, Margins::new(50, 40, 70, 200));
    assert_eq!(c.band_padding, 0.1);
    assert_eq!(c.vertical_offset, VerticalOffset::MarginRight);
    assert_eq!(c.title, "Top 10 Most Populous Countries");
    assert_eq!(c.axis_label, "Population");
}

#[test]
fn toml_overrides_only_named_keys() {
    let c = ChartConfig::from_toml_str(
        r#"
        width = 800
        vertical_offset = "margin_top"
        theme = "dark"

        [margins]
        left = 150
        "#,
    )
    .expect("parse");
    assert_eq!(c.width, 800);
    assert_eq!(c.height, 500);
    assert_eq!(c.vertical_offset, VerticalOffset::MarginTop);
    assert_eq!(c.margins, Margins::new(50, 40, 70, 150));
    assert_eq!(c.theme, "dark");
}

#[test]
fn bad_toml_is_a_config_error() {
    let err = ChartConfig::from_toml_str("width = \"wide\"").unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn inner_size_requires_positive_plot_area() {
    let m = Margins::default();
    assert_eq!(m.inner_size(960, 500), Some((720.0, 380.0)));
    assert_eq!(m.inner_size(240, 500), None);
    assert_eq!(m.inner_size(960, 120), None);
}
