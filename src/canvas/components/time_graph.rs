use std::borrow::Cow;

use tui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::utils::data_units::format_units;

/// Represents the data required by the [`TimeGraph`].
pub struct GraphData<'a> {
    pub points: &'a [(f64, f64)],
    pub style: Style,
    pub name: Option<Cow<'a, str>>,
}

pub struct TimeGraph<'a> {
    /// The min and max x boundaries, in seconds since sampling started.
    pub x_bounds: [f64; 2],

    /// Whether to hide the time/x-labels.
    pub hide_x_labels: bool,

    /// The min and max y boundaries, in bytes per second.
    pub y_bounds: [f64; 2],

    /// The graph style.
    pub graph_style: Style,

    /// The border style.
    pub border_style: Style,

    /// The graph title.
    pub title: Cow<'a, str>,

    /// The title style.
    pub title_style: Style,

    /// Whether to hide the dataset legend.
    pub hide_legend: bool,

    /// The marker type.
    pub marker: Marker,
}

impl TimeGraph<'_> {
    /// Generates the [`Axis`] for the x-axis.
    fn generate_x_axis(&self) -> Axis<'_> {
        let axis = Axis::default()
            .bounds(self.x_bounds)
            .style(self.graph_style);

        if self.hide_x_labels {
            axis
        } else {
            axis.title("Time (s)").labels(
                x_labels(self.x_bounds)
                    .into_iter()
                    .map(|label| Span::styled(label, self.graph_style)),
            )
        }
    }

    /// Generates the [`Axis`] for the y-axis, with labels run through
    /// [`format_units`].
    fn generate_y_axis(&self) -> Axis<'_> {
        Axis::default()
            .title("Throughput")
            .bounds(self.y_bounds)
            .style(self.graph_style)
            .labels(
                y_labels(self.y_bounds)
                    .into_iter()
                    .map(|label| Span::styled(label, self.graph_style)),
            )
    }

    /// Draws a time graph at [`Rect`] location provided by `draw_loc`. Time
    /// runs along the x-axis, oldest on the left.
    pub fn draw_time_graph(
        &self, f: &mut Frame<'_>, draw_loc: Rect, graph_data: &[GraphData<'_>],
    ) {
        let block = Block::default()
            .title(Span::styled(self.title.as_ref(), self.title_style))
            .borders(Borders::ALL)
            .border_style(self.border_style);

        let data = graph_data
            .iter()
            .map(|data| create_dataset(data, self.marker))
            .collect();

        let legend_position = if self.hide_legend {
            None
        } else {
            Some(LegendPosition::TopLeft)
        };

        f.render_widget(
            Chart::new(data)
                .block(block)
                .x_axis(self.generate_x_axis())
                .y_axis(self.generate_y_axis())
                .legend_position(legend_position),
            draw_loc,
        )
    }
}

/// Labels for the start and end of the time axis.
fn x_labels(x_bounds: [f64; 2]) -> [String; 2] {
    [format!("{:.0}s", x_bounds[0]), format!("{:.0}s", x_bounds[1])]
}

/// Labels for the bottom, middle and top of the throughput axis.
fn y_labels(y_bounds: [f64; 2]) -> [String; 3] {
    let [lower, upper] = y_bounds;

    [
        format_units(lower),
        format_units(lower + (upper - lower) / 2.0),
        format_units(upper),
    ]
}

/// Creates a new [`Dataset`].
fn create_dataset<'a>(data: &'a GraphData<'a>, marker: Marker) -> Dataset<'a> {
    let GraphData {
        points,
        style,
        name,
    } = data;

    let dataset = Dataset::default()
        .style(*style)
        .data(points)
        .marker(marker)
        .graph_type(GraphType::Line);

    if let Some(name) = name {
        dataset.name(name.as_ref())
    } else {
        dataset
    }
}
