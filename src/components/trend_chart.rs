use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset},
};

use super::Component;
use crate::action::Action;
use crate::chart;
use crate::state::WeatherReading;
use crate::theme::Palette;

/// Line chart of the synthetic weekly trend around the current temperature
pub struct TrendChart;

pub struct TrendChartProps<'a> {
    pub reading: &'a WeatherReading,
    pub palette: &'a Palette,
}

impl Component<Action> for TrendChart {
    type Props<'a> = TrendChartProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let setup = chart::register();
        let points = chart::series_points(props.reading.temperature);
        let [low, high] = chart::y_bounds(props.reading.temperature);
        let axis_style = Style::default().fg(props.palette.foreground);

        let dataset = Dataset::default()
            .name(chart::dataset_label(props.reading.unit))
            .marker(setup.marker)
            .graph_type(setup.graph_type)
            .style(Style::default().fg(props.palette.chart_line))
            .data(&points);

        let x_axis = Axis::default()
            .style(axis_style)
            .bounds([0.0, (setup.labels.len() - 1) as f64])
            .labels(setup.labels.iter().map(|day| Line::from(*day)));

        let y_axis = Axis::default()
            .style(axis_style)
            .bounds([low, high])
            .labels([
                Line::from(format!("{low:.0}")),
                Line::from(format!("{high:.0}")),
            ]);

        let widget = Chart::new(vec![dataset])
            .block(Block::default())
            .x_axis(x_axis)
            .y_axis(y_axis);
        frame.render_widget(widget, area);
    }
}
