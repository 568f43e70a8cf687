// File: crates/barchart-core/tests/snapshot.rs
// Purpose: Golden PNG snapshot with bless flow, plus RGBA buffer checks.
// Behavior:
// - Renders the top-10 chart to PNG bytes without text (fonts vary across platforms).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use barchart_core::{render_to_png, render_to_png_bytes, render_to_rgba8, ChartConfig, ChartRenderer, RasterOptions, Record, Surface};

fn chart() -> Surface {
    let records = [
        ("China", 1_439_323_776.0),
        ("India", 1_380_004_385.0),
        ("United States", 331_002_651.0),
        ("Indonesia", 273_523_615.0),
        ("Pakistan", 220_892_340.0),
        ("Brazil", 212_559_417.0),
        ("Nigeria", 206_139_589.0),
        ("Bangladesh", 164_689_383.0),
        ("Russia", 145_934_462.0),
        ("Mexico", 128_932_753.0),
    ]
    .into_iter()
    .map(|(c, v)| Record::new(c, v))
    .collect::<Vec<_>>();
    ChartRenderer::new(ChartConfig::default()).render_new(&records).expect("render")
}

fn opts() -> RasterOptions {
    RasterOptions { draw_text: false, ..RasterOptions::default() }
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_top_ten() {
    let bytes = render_to_png_bytes(&chart(), &opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/top_ten.png");
    if bless_mode() {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn render_png_file() {
    let out = std::path::PathBuf::from("target/test_out/top_ten.png");
    render_to_png(&chart(), &opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    let img = image::open(&out).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (960, 500));
}

#[test]
fn rgba_buffer_shows_background_and_bars() {
    let (px, w, h, stride) = render_to_rgba8(&chart(), &opts()).expect("rgba render");
    assert_eq!((w, h), (960, 500));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    // white background in the top-left corner
    assert_eq!(at(0, 0), &[255, 255, 255, 255]);
    // inside China's bar: group offset (200, 40), first band spans roughly y 44..77
    assert_eq!(at(450, 60), &[70, 130, 180, 255]);
}

#[test]
fn render_with_text_and_theme() {
    // glyph output depends on installed fonts, so only the pipeline is checked here
    let opts = RasterOptions { theme: barchart_core::theme::find("dark"), draw_text: true };
    let bytes = render_to_png_bytes(&chart(), &opts).expect("render with text");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
}
