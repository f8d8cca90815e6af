use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier},
    text::Line,
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::theme::Palette;

pub const PLACEHOLDER: &str = "Enter a city name";

/// Width of the submit button, wide enough for "Loading..."
const BUTTON_WIDTH: u16 = 14;

/// Text input plus submit button
pub struct SearchForm {
    input: TextInput,
}

pub struct SearchFormProps<'a> {
    pub query: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
    pub palette: &'a Palette,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button_label(is_loading: bool) -> &'static str {
        if is_loading { "Loading..." } else { "Search" }
    }
}

impl Component<Action> for SearchForm {
    type Props<'a> = SearchFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        // Leaving the input is handled here; everything else is text editing
        if matches!(key.code, KeyCode::Tab | KeyCode::Esc) {
            return vec![Action::UiFocusControls];
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Fill(1),              // Input
            Constraint::Length(1),            // Gap
            Constraint::Length(BUTTON_WIDTH), // Button
        ])
        .split(area);

        let input_bg = if props.is_focused {
            Color::Rgb(50, 50, 60)
        } else {
            Color::Rgb(35, 35, 45)
        };
        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(input_bg),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let mut button_style = props.palette.button();
        if props.is_loading {
            button_style = button_style.add_modifier(Modifier::DIM);
        } else {
            button_style = button_style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(Block::default().style(button_style), chunks[2]);
        let label_area = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(chunks[2])[0];
        let button = Line::from(Self::button_label(props.is_loading)).centered();
        frame.render_widget(Paragraph::new(button).style(button_style), label_area);
    }
}
