//! Row types for the chart data sets.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthPoint {
    pub month: &'static str,
    pub users: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrafficPoint {
    pub source: &'static str,
    pub visits: f64,
}
