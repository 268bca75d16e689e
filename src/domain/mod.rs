//! Dashboard data model and the static sample data set.

pub mod metrics;
pub mod sample_data;
pub mod series;
pub mod theme_mode;

#[allow(unused_imports)]
pub use metrics::{MetricCategory, MetricRecord, Trend};
pub use sample_data::{REVENUE_DATA, STATS_DATA, TRAFFIC_SOURCES_DATA, USER_GROWTH_DATA};
#[allow(unused_imports)]
pub use series::{GrowthPoint, RevenuePoint, TrafficPoint};
pub use theme_mode::ThemeMode;
