// File: crates/barchart-core/tests/svg.rs
// Purpose: SVG serialization of a rendered chart.

use barchart_core::{svg, theme, BandScale, ChartConfig, ChartRenderer, Record};

fn rendered() -> String {
    let records = vec![
        Record::new("China", 1_439_323_000.0),
        Record::new("India", 1_380_004_000.0),
        Record::new("Côte d'Ivoire & <Co>", 26_378_000.0),
    ];
    let surface = ChartRenderer::new(ChartConfig::default()).render_new(&records).expect("render");
    svg::to_svg_string(&surface, &theme::find("light"))
}

#[test]
fn document_has_size_and_structure() {
    let doc = rendered();
    assert!(doc.contains("<svg"));
    assert!(doc.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.contains("width=\"960\""));
    assert!(doc.contains("height=\"500\""));
    assert!(doc.contains("viewBox=\"0 0 960 500\""));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert!(doc.contains("<g transform=\"translate(200,40)\">"));
    assert!(doc.contains("<g class=\"tick\""));
    assert_eq!(doc.matches("<rect").count(), 3);
    assert!(!doc.contains("class=\"domain\""));
}

#[test]
fn labels_and_titles_are_emitted() {
    let doc = rendered();
    assert!(doc.contains(">Population</text>"));
    assert!(doc.contains("class=\"axis-label\""));
    assert!(doc.contains("x=\"360\" y=\"30\""));
    assert!(doc.contains("class=\"title\""));
    assert!(doc.contains("y=\"-10\">Top 10 Most Populous Countries</text>"));
    assert!(doc.contains(">1.40B</text>"));
    assert!(!doc.contains(">1.40G</text>"));
}

#[test]
fn text_is_escaped() {
    let doc = rendered();
    assert!(doc.contains("Côte d"));
    assert!(doc.contains("Ivoire &amp; &lt;Co&gt;"));
    assert!(!doc.contains("<Co>"));
}

#[test]
fn stylesheet_comes_from_theme() {
    let doc = rendered();
    assert!(doc.contains("rect { fill: #4682b4; }"));
}

#[test]
fn write_svg_creates_directories() {
    let records = vec![Record::new("A", 3.0), Record::new("B", 1.0)];
    let surface = ChartRenderer::new(ChartConfig::default()).render_new(&records).expect("render");
    let out = std::path::PathBuf::from("target/test_out/svg/nested/chart.svg");
    let _ = std::fs::remove_file(&out);
    svg::write_svg(&surface, &theme::Theme::light(), &out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert!(text.contains("<rect"));
}

#[test]
fn fractional_coordinates_keep_their_precision() {
    let records = vec![Record::new("A", 3.0), Record::new("B", 1.0), Record::new("C", 2.0)];
    let surface = ChartRenderer::new(ChartConfig::default()).render_new(&records).expect("render");
    let doc = svg::to_svg_string(&surface, &theme::Theme::light());
    let bands = BandScale::new(["A", "B", "C"], [0.0, 380.0]).with_padding(0.1);
    let second = bands.position("B").expect("band");
    assert!(second.fract() != 0.0);
    assert!(doc.contains(&format!("y=\"{second}\"")));
}
