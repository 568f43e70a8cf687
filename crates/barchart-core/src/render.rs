// File: crates/barchart-core/src/render.rs
// Summary: ChartRenderer derives scales from records and appends axes, bars and titles to a surface.

use tracing::{debug, info};

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::format::TickFormat;
use crate::scale::{BandScale, LinearScale};
use crate::surface::{Group, Node, Rect, Surface, Text, Translate};
use crate::types::Record;

/// Scales and plot size derived for one set of records.
#[derive(Clone, Debug)]
pub struct Layout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub x: LinearScale,
    pub y: BandScale,
}

pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Validate the records against the surface and build both scales.
    pub fn layout(&self, records: &[Record], width: u32, height: u32) -> Result<Layout> {
        let margins = self.config.margins;
        let (inner_width, inner_height) = margins
            .inner_size(width, height)
            .ok_or(ChartError::DegenerateCanvas { width, height, margins })?;

        if records.is_empty() {
            return Err(ChartError::EmptyData);
        }
        if let Some(bad) = records.iter().find(|r| !r.value.is_finite() || r.value < 0.0) {
            return Err(ChartError::InvalidValue { category: bad.category.clone(), value: bad.value });
        }

        let max = records.iter().map(|r| r.value).fold(0.0_f64, f64::max);
        let x = LinearScale::new([0.0, max], [0.0, inner_width]);
        let y = BandScale::new(records.iter().map(|r| r.category.as_str()), [0.0, inner_height])
            .with_padding(self.config.band_padding);
        debug!(inner_width, inner_height, max, bandwidth = y.bandwidth(), "layout");

        Ok(Layout { inner_width, inner_height, x, y })
    }

    /// Draw the chart for `records` onto `surface` as one translated group.
    /// Nothing is appended when an error is returned.
    pub fn render(&self, records: &[Record], surface: &mut Surface) -> Result<()> {
        let layout = self.layout(records, surface.width(), surface.height())?;
        let Layout { inner_width, inner_height, ref x, ref y } = layout;
        let margins = self.config.margins;

        let offset = self.config.vertical_offset.resolve(&margins);
        let mut g = Group::new().translated(margins.left as f64, offset as f64);

        // category axis: labels only
        let mut y_axis = Axis::left().render_band(y);
        y_axis.remove_class("domain");
        y_axis.remove_tick_lines();
        g.append(Node::Group(y_axis));

        // value axis: labels plus full-height grid lines
        let mut x_axis = Axis::bottom()
            .tick_format(TickFormat::Population)
            .tick_size(-inner_height)
            .ticks(self.config.tick_count)
            .render_linear(x);
        x_axis.transform = Some(Translate::new(0.0, inner_height));
        x_axis.remove_class("domain");
        x_axis.append(Node::Text(Text {
            class: Some("axis-label".into()),
            x: inner_width / 2.0,
            y: 30.0,
            fill: Some("black".into()),
            content: self.config.axis_label.clone(),
            ..Text::default()
        }));
        g.append(Node::Group(x_axis));

        for r in records {
            // every category is in the band domain by construction
            let top = y.position(&r.category).unwrap_or(0.0);
            g.append(Node::Rect(Rect {
                y: top,
                width: x.to_px(r.value),
                height: y.bandwidth(),
                ..Rect::default()
            }));
        }

        g.append(Node::Text(Text {
            class: Some("title".into()),
            y: -10.0,
            content: self.config.title.clone(),
            ..Text::default()
        }));

        surface.append(Node::Group(g));
        info!(bars = records.len(), "rendered chart");
        Ok(())
    }

    /// Fresh surface sized from the config, with the chart drawn on it.
    pub fn render_new(&self, records: &[Record]) -> Result<Surface> {
        let mut surface = Surface::new(self.config.width, self.config.height);
        self.render(records, &mut surface)?;
        Ok(surface)
    }
}
