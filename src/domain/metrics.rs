/// Which KPI a metric card represents; selects the card icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Revenue,
    Users,
    Conversion,
    Session,
}

/// One summary KPI. The value is pre-formatted; only the change is numeric.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRecord {
    pub title: &'static str,
    pub display_value: &'static str,
    /// Signed month-over-month change, in percent.
    pub percent_change: f64,
    pub category: MetricCategory,
}

/// Direction of a metric's change. Zero counts as an increase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

impl MetricRecord {
    pub fn trend(&self) -> Trend {
        if self.percent_change >= 0.0 {
            Trend::Increase
        } else {
            Trend::Decrease
        }
    }

    /// Magnitude of the change with a percent sign, e.g. `-2.1` -> `2.1%`.
    pub fn change_label(&self) -> String {
        format!("{}%", self.percent_change.abs())
    }
}
