pub mod icon;
pub mod metric_card;
pub mod panel;
pub mod theme_toggle;

pub use metric_card::MetricCard;
pub use panel::Panel;
pub use theme_toggle::ThemeToggle;
