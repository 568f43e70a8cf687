// File: crates/barchart-core/src/text.rs
// Summary: Text shaper using Skia textlayout; draws labels anchored at start, middle or end.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::Anchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, aligned to `x` according to `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        // Paragraph draws from top-left; move up by its alphabetic baseline
        let baseline = p.alphabetic_baseline();
        p.paint(canvas, (left, y - baseline));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
