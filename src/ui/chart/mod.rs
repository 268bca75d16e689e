//! SVG chart rendering for the dashboard panels.

pub mod area;
pub mod bar;
pub mod geometry;
pub mod line;

use dioxus::prelude::*;

pub use area::AreaChart;
pub use bar::BarChart;
pub use line::LineChart;

use crate::domain::ThemeMode;
use crate::ui::theme;
use crate::util::format::{format_compact, format_thousands};
use geometry::{nice_ticks, LinearScale, Point};

pub const CHART_HEIGHT: f64 = 300.0;
const Y_TICK_TARGET: usize = 5;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 30.0;

const GRID_STROKE: &str = "#374151";
const AXIS_STROKE: &str = "#6B7280";

/// One plotted measure with its fixed visual encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Ordered categories and the series plotted against them.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Tooltip rows for one category, in series order.
    pub fn rows_at(&self, index: usize) -> Vec<TooltipRow> {
        self.series
            .iter()
            .filter_map(|series| {
                series.values.get(index).map(|value| TooltipRow {
                    name: series.name,
                    color: series.color,
                    value: format_thousands(*value),
                })
            })
            .collect()
    }

    fn points(&self, series: &Series, x: impl Fn(usize) -> f64, y: &LinearScale) -> Vec<Point> {
        series
            .values
            .iter()
            .take(self.categories.len())
            .enumerate()
            .map(|(idx, value)| Point::new(x(idx), y.map(*value)))
            .collect()
    }
}

/// Plot rectangle inside the SVG viewport plus the shared y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub ticks: Vec<f64>,
    pub y: LinearScale,
}

impl PlotLayout {
    pub fn new(width: f64, height: f64, max_value: f64) -> Self {
        let left = MARGIN_LEFT;
        let right = (width - MARGIN_RIGHT).max(left + 1.0);
        let top = MARGIN_TOP;
        let bottom = (height - MARGIN_BOTTOM).max(top + 1.0);
        let ticks = nice_ticks(max_value, Y_TICK_TARGET);
        let y_max = ticks.last().copied().unwrap_or(1.0);
        Self {
            width,
            height,
            left,
            right,
            top,
            bottom,
            ticks,
            y: LinearScale::new((0.0, y_max), (bottom, top)),
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal position as a percentage of the viewport width.
    pub fn percent_x(&self, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        (x / self.width * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub name: &'static str,
    pub color: &'static str,
    pub value: String,
}

/// Dashed grid, axis lines and tick labels.
#[component]
fn Axes(layout: PlotLayout, x_ticks: Vec<(f64, &'static str)>, vertical_grid: bool) -> Element {
    let y_ticks = layout
        .ticks
        .iter()
        .map(|tick| (layout.y.map(*tick), format_compact(*tick)))
        .collect::<Vec<_>>();
    let x_label_y = layout.bottom + 18.0;
    let y_label_x = layout.left - 8.0;

    rsx! {
        g {
            stroke: GRID_STROKE,
            stroke_dasharray: "3 3",
            opacity: "0.1",
            for (idx, (y, _)) in y_ticks.iter().enumerate() {
                line {
                    key: "h-{idx}",
                    x1: "{layout.left}",
                    x2: "{layout.right}",
                    y1: "{y:.2}",
                    y2: "{y:.2}",
                }
            }
            if vertical_grid {
                for (idx, (x, _)) in x_ticks.iter().enumerate() {
                    line {
                        key: "v-{idx}",
                        x1: "{x:.2}",
                        x2: "{x:.2}",
                        y1: "{layout.top}",
                        y2: "{layout.bottom}",
                    }
                }
            }
        }
        g {
            stroke: AXIS_STROKE,
            line { x1: "{layout.left}", x2: "{layout.right}", y1: "{layout.bottom}", y2: "{layout.bottom}" }
            line { x1: "{layout.left}", x2: "{layout.left}", y1: "{layout.top}", y2: "{layout.bottom}" }
        }
        g {
            fill: AXIS_STROKE,
            font_size: "12",
            for (idx, (x, label)) in x_ticks.iter().enumerate() {
                text {
                    key: "xl-{idx}",
                    x: "{x:.2}",
                    y: "{x_label_y}",
                    text_anchor: "middle",
                    "{label}"
                }
            }
            for (idx, (y, label)) in y_ticks.iter().enumerate() {
                text {
                    key: "yl-{idx}",
                    x: "{y_label_x}",
                    y: "{y:.2}",
                    dy: "4",
                    text_anchor: "end",
                    "{label}"
                }
            }
        }
    }
}

/// Invisible per-category rectangles that drive the hover state.
#[component]
fn HoverTargets(layout: PlotLayout, bands: Vec<(f64, f64)>, hovered: Signal<Option<usize>>) -> Element {
    let mut hovered = hovered;
    let plot_height = layout.plot_height();
    rsx! {
        g {
            for (idx, (x, width)) in bands.into_iter().enumerate() {
                rect {
                    key: "hover-{idx}",
                    x: "{x:.2}",
                    y: "{layout.top}",
                    width: "{width:.2}",
                    height: "{plot_height}",
                    fill: "transparent",
                    onmouseenter: move |_| hovered.set(Some(idx)),
                }
            }
        }
    }
}

#[component]
fn ChartTooltip(mode: ThemeMode, left_pct: f64, title: &'static str, rows: Vec<TooltipRow>) -> Element {
    let flip = if left_pct > 60.0 { "-100%" } else { "0" };
    rsx! {
        div {
            class: "pointer-events-none absolute top-2 px-3 py-2 text-sm shadow-lg",
            style: "{theme::tooltip_style(mode)} left: {left_pct:.2}%; transform: translateX({flip});",
            p { class: "mb-1 font-medium", "{title}" }
            for row in rows {
                p {
                    key: "{row.name}",
                    style: "color: {row.color};",
                    "{row.name} : {row.value}"
                }
            }
        }
    }
}

#[component]
fn ChartLegend(series: Vec<Series>) -> Element {
    rsx! {
        ul { class: "mt-2 flex flex-wrap justify-center gap-4 text-sm",
            for entry in series {
                li {
                    key: "{entry.name}",
                    class: "flex items-center gap-2",
                    style: "color: {entry.color};",
                    span {
                        class: "inline-block h-3 w-3 rounded-sm",
                        style: "background-color: {entry.color};",
                    }
                    "{entry.name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChartData {
        ChartData {
            categories: vec!["Jan", "Feb"],
            series: vec![
                Series { name: "Revenue", color: "#3B82F6", values: vec![45_000.0, 52_000.0] },
                Series { name: "Expenses", color: "#EF4444", values: vec![32_000.0, 35_000.0] },
            ],
        }
    }

    #[test]
    fn max_value_spans_all_series() {
        assert_eq!(sample().max_value(), 52_000.0);
        let empty = ChartData { categories: vec![], series: vec![] };
        assert_eq!(empty.max_value(), 0.0);
    }

    #[test]
    fn tooltip_rows_follow_series_order() {
        let rows = sample().rows_at(1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Revenue");
        assert_eq!(rows[0].value, "52,000");
        assert_eq!(rows[1].value, "35,000");
        assert!(sample().rows_at(7).is_empty());
    }

    #[test]
    fn layout_maps_tick_range_onto_plot() {
        let layout = PlotLayout::new(600.0, CHART_HEIGHT, 67_000.0);
        assert_eq!(layout.ticks.last(), Some(&80_000.0));
        assert_eq!(layout.y.map(0.0), layout.bottom);
        assert_eq!(layout.y.map(80_000.0), layout.top);
        assert_eq!(layout.x_range(), (60.0, 580.0));
        assert_eq!(layout.percent_x(300.0), 50.0);
    }

    #[test]
    fn points_are_clipped_to_category_count() {
        let mut data = sample();
        data.series[0].values.push(99_000.0);
        let layout = PlotLayout::new(600.0, CHART_HEIGHT, data.max_value());
        let points = data.points(&data.series[0], |i| i as f64, &layout.y);
        assert_eq!(points.len(), 2);
    }
}
