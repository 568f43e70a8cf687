// File: crates/barchart-core/src/axis.rs
// Summary: Axis builders that lay out a domain path plus one tick group (line + label) per tick.

use crate::format::TickFormat;
use crate::scale::{BandScale, LinearScale};
use crate::surface::{Anchor, Group, Line, Node, PathEl, Text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Left,
    Bottom,
}

/// Axis settings. Tick sizes follow the usual sign convention: positive sizes
/// point away from the plot, negative sizes reach across it (grid lines).
#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub tick_count: usize,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(orient: Orient) -> Self {
        Self {
            orient,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            tick_count: 10,
            format: TickFormat::default(),
        }
    }

    pub fn left() -> Self { Self::new(Orient::Left) }
    pub fn bottom() -> Self { Self::new(Orient::Bottom) }

    /// Set inner and outer tick size together.
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    pub fn tick_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    // -1 for axes drawn on the left/top side
    fn k(&self) -> f64 {
        match self.orient {
            Orient::Left => -1.0,
            Orient::Bottom => 1.0,
        }
    }

    fn frame(&self) -> Group {
        Group {
            fill_none: true,
            font_size: Some(10.0),
            font_family: Some("sans-serif".to_string()),
            text_anchor: Some(match self.orient {
                Orient::Left => Anchor::End,
                Orient::Bottom => Anchor::Middle,
            }),
            ..Group::default()
        }
    }

    fn domain_path(&self, r0: f64, r1: f64) -> Node {
        let o = self.k() * self.tick_size_outer;
        let d = match self.orient {
            Orient::Left => format!("M{o},{r0}H0V{r1}H{o}"),
            Orient::Bottom => format!("M{r0},{o}V0H{r1}V{o}"),
        };
        Node::Path(PathEl { class: Some("domain".into()), d })
    }

    fn tick(&self, pos: f64, label: String) -> Node {
        let k = self.k();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let (line, text, transform) = match self.orient {
            Orient::Left => (
                Line { x2: k * self.tick_size_inner, ..Line::default() },
                Text { x: k * spacing, dy_em: Some(0.32), content: label, ..Text::default() },
                (0.0, pos),
            ),
            Orient::Bottom => (
                Line { y2: k * self.tick_size_inner, ..Line::default() },
                Text { y: k * spacing, dy_em: Some(0.71), content: label, ..Text::default() },
                (pos, 0.0),
            ),
        };
        let mut g = Group::new().with_class("tick").translated(transform.0, transform.1);
        g.append(Node::Line(line));
        g.append(Node::Text(Text { fill: Some("currentColor".into()), ..text }));
        Node::Group(g)
    }

    /// Category axis: one tick at the centre of every band, labelled with the category.
    pub fn render_band(&self, scale: &BandScale) -> Group {
        let mut g = self.frame();
        let [r0, r1] = scale.range();
        g.append(self.domain_path(r0, r1));
        let offset = scale.bandwidth() / 2.0;
        for category in scale.domain() {
            if let Some(pos) = scale.position(category) {
                g.append(self.tick(pos + offset, category.clone()));
            }
        }
        g
    }

    /// Value axis: ticks at rounded values, labelled through the tick format.
    pub fn render_linear(&self, scale: &LinearScale) -> Group {
        let mut g = self.frame();
        g.append(self.domain_path(scale.range[0], scale.range[1]));
        for v in scale.ticks(self.tick_count) {
            g.append(self.tick(scale.to_px(v), self.format.apply(v)));
        }
        g
    }
}
