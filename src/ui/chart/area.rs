use dioxus::prelude::*;

use super::geometry::{area_path, monotone_path, PointScale};
use super::{Axes, ChartData, ChartLegend, ChartTooltip, HoverTargets, PlotLayout, CHART_HEIGHT};
use crate::domain::ThemeMode;

const FILL_OPACITY: f64 = 0.6;

/// Overlapping filled areas, one per series, over point-positioned categories.
#[component]
pub fn AreaChart(data: ChartData, mode: ThemeMode, #[props(default = 600.0)] width: f64) -> Element {
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

    let layers = data
        .series
        .iter()
        .map(|series| {
            let points = data.points(series, |idx| x.position(idx), &layout.y);
            (
                series.color,
                area_path(&points, layout.bottom),
                monotone_path(&points),
                points,
            )
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
                for (idx, (color, fill_d, stroke_d, _)) in layers.iter().enumerate() {
                    g { key: "area-{idx}",
                        path { d: "{fill_d}", fill: "{color}", fill_opacity: "{FILL_OPACITY}", stroke: "none" }
                        path { d: "{stroke_d}", fill: "none", stroke: "{color}", stroke_width: "1" }
                    }
                }
                if let Some(active) = active {
                    for (idx, (color, _, _, points)) in layers.iter().enumerate() {
                        if let Some(point) = points.get(active) {
                            circle {
                                key: "dot-{idx}",
                                cx: "{point.x:.2}",
                                cy: "{point.y:.2}",
                                r: "4",
                                fill: "{color}",
                                stroke: "#FFFFFF",
                                stroke_width: "2",
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
