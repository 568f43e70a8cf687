// File: crates/barchart-core/src/svg.rs
// Summary: Serialize a surface to an SVG document with a theme-derived stylesheet.

use std::path::Path;

use ::svg::node::element;
use ::svg::Document;
use tracing::info;

use crate::error::Result;
use crate::surface::{Group, Node, Surface};
use crate::theme::{css_color, Theme};

fn stylesheet(theme: &Theme) -> String {
    format!(
        "svg {{ background: {bg}; }}\n\
         rect {{ fill: {bar}; }}\n\
         .tick text {{ font-size: {tick}px; fill: {tick_fill}; }}\n\
         .tick line {{ stroke: {grid}; }}\n\
         .axis-label {{ font-size: {label}px; fill: {label_fill}; }}\n\
         .title {{ font-size: {title}px; fill: {title_fill}; }}\n",
        bg = css_color(theme.background),
        bar = css_color(theme.bar),
        tick = theme.tick_font_size,
        tick_fill = css_color(theme.tick_label),
        grid = css_color(theme.grid),
        label = theme.axis_label_font_size,
        label_fill = css_color(theme.axis_label),
        title = theme.title_font_size,
        title_fill = css_color(theme.title),
    )
}

fn group_element(g: &Group) -> element::Group {
    let mut el = element::Group::new();
    if let Some(class) = &g.class {
        el = el.set("class", class.as_str());
    }
    if let Some(t) = g.transform {
        el = el.set("transform", format!("translate({},{})", t.x, t.y));
    }
    if g.fill_none {
        el = el.set("fill", "none");
    }
    if let Some(size) = g.font_size {
        el = el.set("font-size", size);
    }
    if let Some(family) = &g.font_family {
        el = el.set("font-family", family.as_str());
    }
    if let Some(anchor) = g.text_anchor {
        el = el.set("text-anchor", anchor.as_str());
    }
    for child in &g.children {
        el = el.add(node_element(child));
    }
    el
}

fn node_element(node: &Node) -> Box<dyn ::svg::Node> {
    match node {
        Node::Group(g) => Box::new(group_element(g)),
        Node::Rect(r) => {
            let mut el = element::Rectangle::new();
            if let Some(class) = &r.class {
                el = el.set("class", class.as_str());
            }
            if r.x != 0.0 {
                el = el.set("x", r.x);
            }
            Box::new(el.set("y", r.y).set("width", r.width).set("height", r.height))
        }
        Node::Line(l) => {
            let mut el = element::Line::new();
            if let Some(class) = &l.class {
                el = el.set("class", class.as_str());
            }
            Box::new(
                el.set("stroke", "currentColor")
                    .set("x1", l.x1)
                    .set("y1", l.y1)
                    .set("x2", l.x2)
                    .set("y2", l.y2),
            )
        }
        Node::Path(p) => {
            let mut el = element::Path::new();
            if let Some(class) = &p.class {
                el = el.set("class", class.as_str());
            }
            Box::new(el.set("stroke", "currentColor").set("d", p.d.as_str()))
        }
        Node::Text(t) => {
            let mut el = element::Text::new(t.content.as_str());
            if let Some(class) = &t.class {
                el = el.set("class", class.as_str());
            }
            if let Some(fill) = &t.fill {
                el = el.set("fill", fill.as_str());
            }
            if t.x != 0.0 {
                el = el.set("x", t.x);
            }
            if t.y != 0.0 {
                el = el.set("y", t.y);
            }
            if let Some(dy) = t.dy_em {
                el = el.set("dy", format!("{dy}em"));
            }
            if let Some(anchor) = t.anchor {
                el = el.set("text-anchor", anchor.as_str());
            }
            Box::new(el)
        }
    }
}

/// The surface as an `svg` document tree.
pub fn to_document(surface: &Surface, theme: &Theme) -> Document {
    let (w, h) = (surface.width(), surface.height());
    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", w)
        .set("height", h)
        .set("viewBox", format!("0 0 {w} {h}"))
        .add(element::Style::new(stylesheet(theme)));
    for node in surface.children() {
        doc = doc.add(node_element(node));
    }
    doc
}

/// The whole surface as an SVG document string.
pub fn to_svg_string(surface: &Surface, theme: &Theme) -> String {
    to_document(surface, theme).to_string()
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write_svg(surface: &Surface, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    ::svg::save(path, &to_document(surface, theme))?;
    info!(path = %path.display(), "wrote svg");
    Ok(())
}
