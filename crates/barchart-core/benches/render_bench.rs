use anyhow::Result;
use barchart_core::{render_to_png_bytes, svg, theme, ChartConfig, ChartRenderer, RasterOptions, Record};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record::new(format!("country-{i}"), 1.0e6 * (n - i) as f64 + (i as f64 * 0.37).sin() * 1.0e5))
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let renderer = ChartRenderer::new(ChartConfig::default());
    let mut group = c.benchmark_group("render_svg");
    for &n in &[10usize, 100usize, 1_000usize] {
        let records = gen_records(n);
        group.bench_function(format!("bars_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let surface = renderer.render_new(&records)?;
                black_box(svg::to_svg_string(&surface, &theme::Theme::light()));
                Ok(())
            });
        });
    }
    group.finish();

    let surface = renderer.render_new(&gen_records(10)).expect("render");
    let opts = RasterOptions { draw_text: false, ..RasterOptions::default() };
    c.bench_function("render_png_bytes/bars_10", |b| {
        b.iter(|| -> Result<()> {
            black_box(render_to_png_bytes(&surface, &opts)?);
            Ok(())
        });
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
