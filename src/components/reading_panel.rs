use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::message::temperature_message;
use crate::state::WeatherReading;
use crate::theme::Palette;

pub const THERMOMETER_ICON: &str = "\u{1f321}\u{fe0f}";
pub const CLOUD_ICON: &str = "\u{2601}\u{fe0f}";
pub const PIN_ICON: &str = "\u{1f4cd}";
pub const WIND_ICON: &str = "\u{1f4a8}";
pub const DROPLET_ICON: &str = "\u{1f4a7}";

/// Rows the panel needs
pub const PANEL_HEIGHT: u16 = 5;

/// The five info lines of a reading
pub struct ReadingPanel;

pub struct ReadingPanelProps<'a> {
    pub reading: &'a WeatherReading,
    pub palette: &'a Palette,
}

impl ReadingPanel {
    pub fn lines(reading: &WeatherReading) -> [(&'static str, String); 5] {
        [
            (
                THERMOMETER_ICON,
                temperature_message(reading.temperature, reading.unit),
            ),
            (CLOUD_ICON, reading.condition_text.clone()),
            (PIN_ICON, reading.location_name.clone()),
            (WIND_ICON, format!("Wind: {} kph", reading.wind_speed_kph)),
            (
                DROPLET_ICON,
                format!("Humidity: {}%", reading.humidity_percent),
            ),
        ]
    }
}

impl Component<Action> for ReadingPanel {
    type Props<'a> = ReadingPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let text_style = Style::default().fg(props.palette.foreground);
        let lines: Vec<Line> = Self::lines(props.reading)
            .into_iter()
            .enumerate()
            .map(|(row, (icon, text))| {
                // The temperature message leads the panel
                let style = if row == 0 {
                    text_style.add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };
                Line::from(vec![
                    Span::raw(icon),
                    Span::raw(" "),
                    Span::styled(text, style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
