use dioxus::prelude::*;

/// Outline glyphs on a 24x24 grid, stroked with `currentColor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    DollarSign,
    Users,
    TrendingUp,
    Activity,
    ArrowUpRight,
    ArrowDownRight,
    Sun,
    Moon,
}

impl Glyph {
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Glyph::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            Glyph::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Glyph::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Glyph::ArrowDownRight => &["m7 7 10 10", "M17 7v10H7"],
            Glyph::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph, class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for (idx, d) in glyph.paths().iter().enumerate() {
                path { key: "{idx}", d: "{d}" }
            }
        }
    }
}
