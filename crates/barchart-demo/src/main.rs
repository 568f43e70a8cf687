// File: crates/barchart-demo/src/main.rs
// Summary: Loads a population CSV, renders the top-10 bar chart once and writes SVG (and optionally PNG).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barchart_core::{
    render_to_png, svg, theme, ChartConfig, ChartRenderer, CsvSource, DataSource, RasterOptions,
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "barchart", about = "Render a horizontal population bar chart from CSV")]
struct Args {
    /// Input CSV with `country` and `population` (thousands) columns
    #[arg(default_value = "data/data.csv")]
    input: PathBuf,

    /// Directory for the generated files
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Optional TOML chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also rasterize to PNG
    #[arg(long)]
    png: bool,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(p) => ChartConfig::load(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };

    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }
    let source = CsvSource::new(&args.input).delimiter(args.delimiter as u8);
    let records = source
        .load()
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;

    let renderer = ChartRenderer::new(config);
    let surface = renderer.render_new(&records).context("render failed")?;
    let theme = theme::find(&renderer.config().theme);

    let svg_out = out_name(&args.out_dir, &args.input, "svg");
    svg::write_svg(&surface, &theme, &svg_out)?;
    println!("Wrote {}", svg_out.display());

    if args.png {
        let png_out = svg_out.with_extension("png");
        let opts = RasterOptions { theme, ..RasterOptions::default() };
        render_to_png(&surface, &opts, &png_out)?;
        println!("Wrote {}", png_out.display());
    }

    info!(records = records.len(), "done");
    Ok(())
}

/// Output file name like <out_dir>/chart_<stem>.<ext>
fn out_name(out_dir: &Path, input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    out_dir.join(format!("chart_{stem}.{ext}"))
}
