//! The display surface: everything that turns a series into pixels (or cells).

pub mod components;
pub mod styling;

use anyhow::{anyhow, Result};
use tui::{
    backend::Backend,
    layout::{Constraint, Layout},
    symbols::Marker,
    text::Span,
    widgets::Paragraph,
    Terminal,
};

use self::{
    components::time_graph::{GraphData, TimeGraph},
    styling::CanvasStyles,
};
use crate::{app::AppConfigFields, constants::LEGEND_NAME};

/// Something that can draw a single line of throughput data.
pub trait DisplaySurface {
    /// Replaces the plotted line with the given points. `x` and `y` are
    /// expected to be the same length.
    fn set_line_data(&mut self, x: &[f64], y: &[f64]);

    /// Recomputes the axis limits from the current line data.
    fn autoscale(&mut self);

    /// Draws the current state. Calling this repeatedly without new data
    /// redraws the same picture.
    fn redraw(&mut self) -> Result<()>;
}

/// Computes x and y bounds that fit `points`.
///
/// The x-axis spans the first to the last point. The y-axis always includes
/// zero and leaves some headroom above the largest value.
pub fn autoscale_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    const HEADROOM: f64 = 1.1;

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return ([0.0, 1.0], [0.0, 1.0]);
    };

    let x_bounds = if last.0 > first.0 {
        [first.0, last.0]
    } else {
        [first.0, first.0 + 1.0]
    };

    let (min_y, max_y) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, y)| {
            (min.min(*y), max.max(*y))
        });

    let lower = min_y.min(0.0);
    let upper = max_y.max(0.0) * HEADROOM;
    let y_bounds = if upper > lower {
        [lower, upper]
    } else {
        [lower, lower + 1.0]
    };

    (x_bounds, y_bounds)
}

/// Draws the throughput chart to a [`Terminal`].
pub struct Painter<B: Backend> {
    terminal: Terminal<B>,
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    config: AppConfigFields,
    styles: CanvasStyles,
}

impl<B: Backend> Painter<B> {
    pub fn new(terminal: Terminal<B>, config: AppConfigFields, styles: CanvasStyles) -> Self {
        let (x_bounds, y_bounds) = autoscale_bounds(&[]);

        Self {
            terminal,
            points: Vec::new(),
            x_bounds,
            y_bounds,
            config,
            styles,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> DisplaySurface for Painter<B> {
    fn set_line_data(&mut self, x: &[f64], y: &[f64]) {
        debug_assert_eq!(x.len(), y.len());

        self.points.clear();
        self.points.extend(x.iter().copied().zip(y.iter().copied()));
    }

    fn autoscale(&mut self) {
        (self.x_bounds, self.y_bounds) = autoscale_bounds(&self.points);
    }

    fn redraw(&mut self) -> Result<()> {
        let time_graph = TimeGraph {
            x_bounds: self.x_bounds,
            hide_x_labels: self.config.hide_time,
            y_bounds: self.y_bounds,
            graph_style: self.styles.graph_style,
            border_style: self.styles.border_style,
            title: self.config.title.as_str().into(),
            title_style: self.styles.title_style,
            hide_legend: self.config.hide_legend,
            marker: if self.config.use_dot {
                Marker::Dot
            } else {
                Marker::Braille
            },
        };
        let graph_data = [GraphData {
            points: &self.points,
            style: self.styles.tx_style,
            name: Some(LEGEND_NAME.into()),
        }];
        let hint_style = self.styles.hint_style;

        self.terminal
            .draw(|f| {
                let [graph_area, hint_area] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
                        .areas(f.area());

                time_graph.draw_time_graph(f, graph_area, &graph_data);
                f.render_widget(
                    Paragraph::new(Span::styled(" Press q to quit ", hint_style)),
                    hint_area,
                );
            })
            .map_err(|err| anyhow!("failed to draw to the terminal: {err}"))?;

        Ok(())
    }
}
