//! Static sample data shown on the dashboard.

use super::metrics::{MetricCategory, MetricRecord};
use super::series::{GrowthPoint, RevenuePoint, TrafficPoint};

pub const REVENUE_DATA: [RevenuePoint; 6] = [
    RevenuePoint { month: "Jan", revenue: 45000.0, expenses: 32000.0 },
    RevenuePoint { month: "Feb", revenue: 52000.0, expenses: 35000.0 },
    RevenuePoint { month: "Mar", revenue: 48000.0, expenses: 33000.0 },
    RevenuePoint { month: "Apr", revenue: 61000.0, expenses: 38000.0 },
    RevenuePoint { month: "May", revenue: 55000.0, expenses: 36000.0 },
    RevenuePoint { month: "Jun", revenue: 67000.0, expenses: 41000.0 },
];

pub const USER_GROWTH_DATA: [GrowthPoint; 6] = [
    GrowthPoint { month: "Jan", users: 2400.0 },
    GrowthPoint { month: "Feb", users: 2800.0 },
    GrowthPoint { month: "Mar", users: 3200.0 },
    GrowthPoint { month: "Apr", users: 3800.0 },
    GrowthPoint { month: "May", users: 4200.0 },
    GrowthPoint { month: "Jun", users: 4900.0 },
];

pub const TRAFFIC_SOURCES_DATA: [TrafficPoint; 5] = [
    TrafficPoint { source: "Organic", visits: 12500.0 },
    TrafficPoint { source: "Direct", visits: 8200.0 },
    TrafficPoint { source: "Social", visits: 6100.0 },
    TrafficPoint { source: "Referral", visits: 4300.0 },
    TrafficPoint { source: "Email", visits: 3800.0 },
];

pub const STATS_DATA: [MetricRecord; 4] = [
    MetricRecord {
        title: "Total Revenue",
        display_value: "$67,231",
        percent_change: 12.5,
        category: MetricCategory::Revenue,
    },
    MetricRecord {
        title: "Active Users",
        display_value: "4,892",
        percent_change: 8.2,
        category: MetricCategory::Users,
    },
    MetricRecord {
        title: "Conversion Rate",
        display_value: "3.24%",
        percent_change: -2.1,
        category: MetricCategory::Conversion,
    },
    MetricRecord {
        title: "Avg. Session",
        display_value: "4m 32s",
        percent_change: 5.7,
        category: MetricCategory::Session,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::Trend;

    #[test]
    fn revenue_covers_first_half_year_with_profit() {
        let months: Vec<_> = REVENUE_DATA.iter().map(|p| p.month).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert!(REVENUE_DATA.iter().all(|p| p.revenue >= p.expenses));
    }

    #[test]
    fn user_growth_is_labeled_by_month() {
        assert_eq!(USER_GROWTH_DATA.len(), 6);
        assert_eq!(USER_GROWTH_DATA[0].month, "Jan");
        assert_eq!(USER_GROWTH_DATA[5].month, "Jun");
    }

    #[test]
    fn traffic_sources_sum_to_total_visits() {
        assert_eq!(TRAFFIC_SOURCES_DATA.len(), 5);
        let total: f64 = TRAFFIC_SOURCES_DATA.iter().map(|p| p.visits).sum();
        assert_eq!(total, 34_900.0);
    }

    #[test]
    fn only_conversion_rate_is_declining() {
        let declining: Vec<_> = STATS_DATA
            .iter()
            .filter(|s| s.trend() == Trend::Decrease)
            .map(|s| s.title)
            .collect();
        assert_eq!(declining, ["Conversion Rate"]);
    }
}
