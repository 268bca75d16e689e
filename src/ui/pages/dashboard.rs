use dioxus::prelude::*;

use crate::domain::{
    ThemeMode, REVENUE_DATA, STATS_DATA, TRAFFIC_SOURCES_DATA, USER_GROWTH_DATA,
};
use crate::ui::{
    chart::{AreaChart, BarChart, ChartData, LineChart, Series},
    components::{MetricCard, Panel},
};

pub fn revenue_chart() -> ChartData {
    ChartData {
        categories: REVENUE_DATA.iter().map(|p| p.month).collect(),
        series: vec![
            Series {
                name: "Revenue",
                color: "#3B82F6",
                values: REVENUE_DATA.iter().map(|p| p.revenue).collect(),
            },
            Series {
                name: "Expenses",
                color: "#EF4444",
                values: REVENUE_DATA.iter().map(|p| p.expenses).collect(),
            },
        ],
    }
}

pub fn user_growth_chart() -> ChartData {
    ChartData {
        categories: USER_GROWTH_DATA.iter().map(|p| p.month).collect(),
        series: vec![Series {
            name: "Active Users",
            color: "#10B981",
            values: USER_GROWTH_DATA.iter().map(|p| p.users).collect(),
        }],
    }
}

pub fn traffic_chart() -> ChartData {
    ChartData {
        categories: TRAFFIC_SOURCES_DATA.iter().map(|p| p.source).collect(),
        series: vec![Series {
            name: "Visits",
            color: "#8B5CF6",
            values: TRAFFIC_SOURCES_DATA.iter().map(|p| p.visits).collect(),
        }],
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let theme = use_context::<Signal<ThemeMode>>();
    let mode = theme();

    rsx! {
        div { class: "space-y-8",
            div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
                for record in STATS_DATA.iter() {
                    MetricCard { key: "{record.title}", record: record.clone(), mode }
                }
            }
            div { class: "grid gap-6 md:grid-cols-2",
                Panel {
                    title: "Revenue vs Expenses",
                    description: "Monthly financial overview for 2024",
                    mode,
                    AreaChart { data: revenue_chart(), mode }
                }
                Panel {
                    title: "User Growth",
                    description: "Active users over the last 6 months",
                    mode,
                    LineChart { data: user_growth_chart(), mode }
                }
            }
            Panel {
                title: "Traffic Sources",
                description: "Visitor distribution by channel",
                mode,
                BarChart { data: traffic_chart(), mode }
            }
        }
    }
}
