pub mod control_bar;
pub mod reading_panel;
pub mod search_form;
pub mod trend_chart;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use control_bar::{ControlBar, ControlBarProps};
pub use reading_panel::{ReadingPanel, ReadingPanelProps};
pub use search_form::{SearchForm, SearchFormProps};
pub use trend_chart::{TrendChart, TrendChartProps};
pub use weather_widget::{ERROR_ICON, WeatherWidget, WeatherWidgetProps};
