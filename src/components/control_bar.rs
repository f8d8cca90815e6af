use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::theme::Palette;

/// Unit, chart and theme buttons shown under a reading
pub struct ControlBar;

pub struct ControlBarProps<'a> {
    pub is_fahrenheit: bool,
    pub show_chart: bool,
    pub is_night_mode: bool,
    pub is_focused: bool,
    pub palette: &'a Palette,
}

pub fn unit_label(is_fahrenheit: bool) -> &'static str {
    if is_fahrenheit { "Switch to °C" } else { "Switch to °F" }
}

pub fn chart_label(show_chart: bool) -> &'static str {
    if show_chart { "Hide Chart" } else { "Show Chart" }
}

pub fn theme_label(is_night_mode: bool) -> &'static str {
    if is_night_mode { "Switch to Day" } else { "Switch to Night" }
}

impl ControlBar {
    /// `(shortcut, label)` for each button, left to right
    pub fn buttons(props: &ControlBarProps<'_>) -> [(&'static str, &'static str); 3] {
        [
            ("u", unit_label(props.is_fahrenheit)),
            ("c", chart_label(props.show_chart)),
            ("t", theme_label(props.is_night_mode)),
        ]
    }
}

impl Component<Action> for ControlBar {
    type Props<'a> = ControlBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let buttons = Self::buttons(&props);
        let mut style = props.palette.button();
        if props.is_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let key_style = style.add_modifier(Modifier::UNDERLINED);

        let widths = buttons
            .iter()
            .map(|(key, label)| Constraint::Length((key.len() + label.chars().count() + 3) as u16));
        let chunks = Layout::horizontal(widths)
            .flex(Flex::SpaceBetween)
            .split(area);

        for ((key, label), chunk) in buttons.iter().zip(chunks.iter()) {
            let line = Line::from(vec![
                Span::styled(" ", style),
                Span::styled(*key, key_style),
                Span::styled(" ", style),
                Span::styled(*label, style),
                Span::styled(" ", style),
            ]);
            frame.render_widget(Paragraph::new(line), *chunk);
        }
    }
}
