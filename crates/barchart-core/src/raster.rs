// File: crates/barchart-core/src/raster.rs
// Summary: Headless PNG/RGBA rendering of a surface using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::info;

use crate::error::{ChartError, Result};
use crate::surface::{Anchor, Group, Node, Surface};
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RasterOptions {
    pub theme: Theme,
    /// Text output depends on installed fonts; snapshot tests turn it off.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_text: true }
    }
}

/// Inherited drawing state while descending through groups.
#[derive(Clone, Copy)]
struct Ctx {
    dx: f32,
    dy: f32,
    anchor: Anchor,
    font_size: f32,
}

struct Painter<'a> {
    canvas: &'a skia::Canvas,
    opts: &'a RasterOptions,
    shaper: Option<TextShaper>,
}

impl Painter<'_> {
    fn group(&self, g: &Group, ctx: Ctx) {
        let mut ctx = ctx;
        if let Some(t) = g.transform {
            ctx.dx += t.x as f32;
            ctx.dy += t.y as f32;
        }
        if let Some(a) = g.text_anchor {
            ctx.anchor = a;
        }
        if let Some(s) = g.font_size {
            ctx.font_size = s as f32;
        }
        for child in &g.children {
            self.node(child, ctx);
        }
    }

    fn node(&self, node: &Node, ctx: Ctx) {
        let theme = &self.opts.theme;
        match node {
            Node::Group(g) => self.group(g, ctx),
            Node::Rect(r) => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(theme.bar);
                let rect = skia::Rect::from_xywh(
                    ctx.dx + r.x as f32,
                    ctx.dy + r.y as f32,
                    r.width as f32,
                    r.height as f32,
                );
                self.canvas.draw_rect(rect, &paint);
            }
            Node::Line(l) => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_stroke_width(1.0);
                paint.set_color(theme.grid);
                self.canvas.draw_line(
                    (ctx.dx + l.x1 as f32, ctx.dy + l.y1 as f32),
                    (ctx.dx + l.x2 as f32, ctx.dy + l.y2 as f32),
                    &paint,
                );
            }
            Node::Path(p) => {
                if let Some(path) = skia::Path::from_svg(&p.d) {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(1.0);
                    paint.set_color(theme.grid);
                    let path = path.with_offset((ctx.dx, ctx.dy));
                    self.canvas.draw_path(&path, &paint);
                }
            }
            Node::Text(t) => {
                let Some(shaper) = &self.shaper else { return };
                let (size, color) = match t.class.as_deref() {
                    Some("title") => (theme.title_font_size, theme.title),
                    Some("axis-label") => (theme.axis_label_font_size, theme.axis_label),
                    _ => (theme.tick_font_size.max(ctx.font_size), theme.tick_label),
                };
                let anchor = t.anchor.unwrap_or(ctx.anchor);
                let dy = t.dy_em.unwrap_or(0.0) as f32 * size;
                shaper.draw(
                    self.canvas,
                    &t.content,
                    ctx.dx + t.x as f32,
                    ctx.dy + t.y as f32 + dy,
                    size,
                    color,
                    anchor,
                );
            }
        }
    }
}

fn paint_surface(surface: &Surface, opts: &RasterOptions) -> Result<skia::Surface> {
    let (w, h) = (surface.width() as i32, surface.height() as i32);
    let mut raster = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| ChartError::Raster(format!("failed to create {w}x{h} raster surface")))?;
    {
        let canvas = raster.canvas();
        canvas.clear(opts.theme.background);

        let painter = Painter {
            canvas,
            opts,
            shaper: opts.draw_text.then(TextShaper::new),
        };
        let root = Ctx { dx: 0.0, dy: 0.0, anchor: Anchor::Start, font_size: opts.theme.tick_font_size };
        for node in surface.children() {
            painter.node(node, root);
        }
    }
    Ok(raster)
}

/// Encode the surface as PNG bytes.
pub fn render_to_png_bytes(surface: &Surface, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut raster = paint_surface(surface, opts)?;
    let image = raster.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Raster("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the surface to a PNG at `output_png_path`.
pub fn render_to_png(surface: &Surface, opts: &RasterOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_to_png_bytes(surface, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), "wrote png");
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(surface: &Surface, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut raster = paint_surface(surface, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !raster.read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(ChartError::Raster("read_pixels failed".into()));
    }
    Ok((px, w, h, stride))
}
