use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::reading_panel::PANEL_HEIGHT;
use super::{
    Component, ControlBar, ControlBarProps, ReadingPanel, ReadingPanelProps, SearchForm,
    SearchFormProps, TrendChart, TrendChartProps,
};
use crate::action::Action;
use crate::state::{AppState, Focus};
use crate::theme::Palette;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const TITLE: &str = "Weather Widget";
pub const DESCRIPTION: &str = "Search for the current weather conditions in your city.";

/// Card width cap; narrower terminals use the full width
const CARD_MAX_WIDTH: u16 = 64;
/// Smallest useful chart height
const CHART_MIN_HEIGHT: u16 = 8;
/// Below this the card shows a notice instead of its content
const CARD_MIN_WIDTH: u16 = 24;
const CARD_MIN_HEIGHT: u16 = 8;
pub const TOO_SMALL: &str = "Too small";

/// Props for WeatherWidget - read-only view of state
pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: search form, reading, buttons and chart on a themed card
#[derive(Default)]
pub struct WeatherWidget {
    search: SearchForm,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_controls_key(code: KeyCode, state: &AppState) -> Option<Action> {
        match code {
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::UiFocusSearch),
            KeyCode::Char('u') => Some(Action::UiToggleUnit),
            KeyCode::Char('c') => Some(Action::UiToggleChart),
            KeyCode::Char('t') => Some(Action::UiToggleTheme),
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::SearchSubmit(state.query.clone())),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let state = props.state;
        match state.focus {
            Focus::Search => {
                let palette = Palette::for_mode(state.is_night_mode);
                let form_props = SearchFormProps {
                    query: &state.query,
                    is_loading: state.is_loading,
                    is_focused: true,
                    palette,
                    on_change: Action::SearchQueryChange,
                    on_submit: Action::SearchSubmit,
                };
                self.search
                    .handle_event(event, form_props)
                    .into_iter()
                    .collect()
            }
            Focus::Controls => match event {
                EventKind::Key(key) => Self::handle_controls_key(key.code, state)
                    .into_iter()
                    .collect(),
                _ => Vec::new(),
            },
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherWidgetProps<'_>) {
        let state = props.state;
        let palette = Palette::for_mode(state.is_night_mode);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        frame.render_widget(Block::default().style(palette.base()), chunks[0]);

        let [card_area] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(chunks[0]);
        let card = Block::bordered()
            .border_type(BorderType::Rounded)
            .style(palette.base())
            .padding(Padding::horizontal(1));
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        render_card(&mut self.search, frame, inner, state, props.is_focused, palette);

        match state.focus {
            Focus::Search => render_status_bar(
                frame,
                chunks[1],
                &[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("tab", "buttons"),
                ],
            ),
            Focus::Controls => render_status_bar(
                frame,
                chunks[1],
                &[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("c", "chart"),
                    StatusBarHint::new("t", "theme"),
                    StatusBarHint::new("q", "quit"),
                ],
            ),
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, hints: &[StatusBarHint]) {
    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::empty(),
            center: StatusBarSection::hints(hints),
            right: StatusBarSection::empty(),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}

fn render_card(
    search: &mut SearchForm,
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    is_focused: bool,
    palette: &Palette,
) {
    if area.width < CARD_MIN_WIDTH || area.height < CARD_MIN_HEIGHT {
        let notice = Line::from(Span::styled(TOO_SMALL, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(notice.centered()), area);
        return;
    }

    let reading_rows = if state.weather.is_some() {
        PANEL_HEIGHT
    } else {
        0
    };
    let controls_rows = if state.weather.is_some() { 1 } else { 0 };
    let chart_rows = if state.weather.is_some() && state.show_chart {
        CHART_MIN_HEIGHT
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),             // Title
        Constraint::Length(1),             // Description
        Constraint::Length(1),             // Spacer
        Constraint::Length(3),             // Search form
        Constraint::Length(1),             // Error
        Constraint::Length(reading_rows),  // Reading
        Constraint::Length(1),             // Spacer
        Constraint::Length(controls_rows), // Buttons
        Constraint::Min(chart_rows),       // Chart
    ])
    .split(area);

    let title = Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let description = Line::from(Span::styled(
        DESCRIPTION,
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(description), chunks[1]);

    search.render(
        frame,
        chunks[3],
        SearchFormProps {
            query: &state.query,
            is_loading: state.is_loading,
            is_focused: is_focused && state.focus == Focus::Search,
            palette,
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
        },
    );

    if let Some(error) = &state.error_message {
        let line = Line::from(vec![
            Span::raw(ERROR_ICON),
            Span::raw(" "),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), chunks[4]);
    }

    let Some(reading) = &state.weather else {
        return;
    };

    let mut panel = ReadingPanel;
    panel.render(frame, chunks[5], ReadingPanelProps { reading, palette });

    let mut controls = ControlBar;
    controls.render(
        frame,
        chunks[7],
        ControlBarProps {
            is_fahrenheit: state.is_fahrenheit,
            show_chart: state.show_chart,
            is_night_mode: state.is_night_mode,
            is_focused: is_focused && state.focus == Focus::Controls,
            palette,
        },
    );

    if state.show_chart {
        let mut chart = TrendChart;
        chart.render(frame, chunks[8], TrendChartProps { reading, palette });
    }
}
