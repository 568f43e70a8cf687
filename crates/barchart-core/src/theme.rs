// File: crates/barchart-core/src/theme.rs
// Summary: Color and type presets shared by the SVG stylesheet and the PNG rasterizer.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub bar: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick_font_size: f32,
    pub axis_label_font_size: f32,
    pub title_font_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            bar: skia::Color::from_argb(255, 70, 130, 180), // steelblue
            grid: skia::Color::from_argb(255, 0xc0, 0xc0, 0xbb),
            tick_label: skia::Color::from_argb(255, 0x63, 0x5f, 0x5d),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0x63, 0x5f, 0x5d),
            tick_font_size: 14.0,
            axis_label_font_size: 20.0,
            title_font_size: 26.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            bar: skia::Color::from_argb(255, 64, 160, 255),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            tick_font_size: 14.0,
            axis_label_font_size: 20.0,
            title_font_size: 26.0,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            bar: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),        // blue
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            tick_label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            tick_font_size: 14.0,
            axis_label_font_size: 20.0,
            title_font_size: 26.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            bar: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            grid: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            tick_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tick_font_size: 14.0,
            axis_label_font_size: 20.0,
            title_font_size: 26.0,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// `#rrggbb` (or `rgba(...)` when translucent) for stylesheets.
pub fn css_color(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}
