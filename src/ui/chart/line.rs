use dioxus::prelude::*;

use super::geometry::{monotone_path, PointScale};
use super::{Axes, ChartData, ChartLegend, ChartTooltip, HoverTargets, PlotLayout, CHART_HEIGHT};
use crate::domain::ThemeMode;

const STROKE_WIDTH: f64 = 3.0;
const DOT_RADIUS: f64 = 5.0;
const ACTIVE_DOT_RADIUS: f64 = 7.0;

/// Smoothed lines with a dot on every category.
#[component]
pub fn LineChart(data: ChartData, mode: ThemeMode, #[props(default = 600.0)] width: f64) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let layout = PlotLayout::new(width, CHART_HEIGHT, data.max_value());
    let x = PointScale::new(data.categories.len(), layout.x_range());
    let x_ticks = data
        .categories
        .iter()
        .enumerate()
        .map(|(idx, label)| (x.position(idx), *label))
        .collect::<Vec<_>>();
    let bands = (0..data.categories.len()).map(|idx| x.hover_band(idx)).collect::<Vec<_>>();

    let lines = data
        .series
        .iter()
        .map(|series| {
            let points = data.points(series, |idx| x.position(idx), &layout.y);
            (series.color, monotone_path(&points), points)
        })
        .collect::<Vec<_>>();

    let active = hovered().filter(|idx| *idx < data.categories.len());
    let cursor_x = active.map(|idx| x.position(idx));

    rsx! {
        div { class: "relative",
            svg {
                class: "block h-auto w-full",
                view_box: "0 0 {layout.width} {layout.height}",
                onmouseleave: move |_| hovered.set(None),
                Axes { layout: layout.clone(), x_ticks, vertical_grid: true }
                if let Some(cx) = cursor_x {
                    line {
                        x1: "{cx:.2}",
                        x2: "{cx:.2}",
                        y1: "{layout.top}",
                        y2: "{layout.bottom}",
                        stroke: "#CCCCCC",
                    }
                }
                for (idx, (color, d, points)) in lines.iter().enumerate() {
                    g { key: "line-{idx}",
                        path { d: "{d}", fill: "none", stroke: "{color}", stroke_width: "{STROKE_WIDTH}" }
                        for (pidx, point) in points.iter().enumerate() {
                            circle {
                                key: "dot-{pidx}",
                                cx: "{point.x:.2}",
                                cy: "{point.y:.2}",
                                r: "{dot_radius(active, pidx)}",
                                fill: "{color}",
                                stroke: "{color}",
                            }
                        }
                    }
                }
                HoverTargets { layout: layout.clone(), bands, hovered }
            }
            if let Some(active) = active {
                ChartTooltip {
                    mode,
                    left_pct: layout.percent_x(x.position(active)),
                    title: data.categories[active],
                    rows: data.rows_at(active),
                }
            }
            ChartLegend { series: data.series.clone() }
        }
    }
}

fn dot_radius(active: Option<usize>, index: usize) -> f64 {
    if active == Some(index) {
        ACTIVE_DOT_RADIUS
    } else {
        DOT_RADIUS
    }
}
