use dioxus::prelude::*;

use super::geometry::{rounded_top_bar, BandScale};
use super::{Axes, ChartData, ChartLegend, ChartTooltip, HoverTargets, PlotLayout, CHART_HEIGHT};
use crate::domain::ThemeMode;

const CORNER_RADIUS: f64 = 8.0;

/// Vertical bars with rounded tops; series share each band side by side.
#[component]
pub fn BarChart(data: ChartData, mode: ThemeMode, #[props(default = 1200.0)] width: f64) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let layout = PlotLayout::new(width, CHART_HEIGHT, data.max_value());
    let x = BandScale::new(data.categories.len(), layout.x_range());
    let x_ticks = data
        .categories
        .iter()
        .enumerate()
        .map(|(idx, label)| (x.center(idx), *label))
        .collect::<Vec<_>>();
    let bands = (0..data.categories.len()).map(|idx| x.hover_band(idx)).collect::<Vec<_>>();

    let series_count = data.series.len().max(1) as f64;
    let bar_width = x.bandwidth() / series_count;
    let baseline = layout.y.map(0.0);
    let bars = data
        .series
        .iter()
        .enumerate()
        .flat_map(|(sidx, series)| {
            let offset = bar_width * sidx as f64;
            let y = layout.y;
            series
                .values
                .iter()
                .take(data.categories.len())
                .enumerate()
                .map(move |(idx, value)| {
                    let top = y.map(*value);
                    (
                        format!("bar-{sidx}-{idx}"),
                        series.color,
                        rounded_top_bar(
                            x.start(idx) + offset,
                            top,
                            bar_width,
                            baseline - top,
                            CORNER_RADIUS,
                        ),
                    )
                })
        })
        .collect::<Vec<_>>();

    let active = hovered().filter(|idx| *idx < data.categories.len());
    let cursor = active.map(|idx| x.hover_band(idx));

    rsx! {
        div { class: "relative",
            svg {
                class: "block h-auto w-full",
                view_box: "0 0 {layout.width} {layout.height}",
                onmouseleave: move |_| hovered.set(None),
                Axes { layout: layout.clone(), x_ticks, vertical_grid: false }
                if let Some((cx, cw)) = cursor {
                    rect {
                        x: "{cx:.2}",
                        y: "{layout.top}",
                        width: "{cw:.2}",
                        height: "{layout.plot_height()}",
                        fill: "#CCCCCC",
                        fill_opacity: "0.3",
                    }
                }
                for (key, color, d) in bars {
                    path { key: "{key}", d: "{d}", fill: "{color}" }
                }
                HoverTargets { layout: layout.clone(), bands, hovered }
            }
            if let Some(active) = active {
                ChartTooltip {
                    mode,
                    left_pct: layout.percent_x(x.center(active)),
                    title: data.categories[active],
                    rows: data.rows_at(active),
                }
            }
            ChartLegend { series: data.series.clone() }
        }
    }
}
