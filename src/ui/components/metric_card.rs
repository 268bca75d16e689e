use dioxus::prelude::*;

use crate::domain::{MetricCategory, MetricRecord, ThemeMode, Trend};
use crate::ui::components::icon::{Glyph, Icon};
use crate::ui::theme;

/// Everything a metric card displays, derived from its record alone.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub title: &'static str,
    pub value: &'static str,
    pub change_label: String,
    pub trend: Trend,
    pub icon: Glyph,
}

impl From<&MetricRecord> for CardView {
    fn from(record: &MetricRecord) -> Self {
        CardView {
            title: record.title,
            value: record.display_value,
            change_label: record.change_label(),
            trend: record.trend(),
            icon: category_glyph(record.category),
        }
    }
}

impl CardView {
    pub fn trend_glyph(&self) -> Glyph {
        match self.trend {
            Trend::Increase => Glyph::ArrowUpRight,
            Trend::Decrease => Glyph::ArrowDownRight,
        }
    }
}

fn category_glyph(category: MetricCategory) -> Glyph {
    match category {
        MetricCategory::Revenue => Glyph::DollarSign,
        MetricCategory::Users => Glyph::Users,
        MetricCategory::Conversion => Glyph::TrendingUp,
        MetricCategory::Session => Glyph::Activity,
    }
}

#[component]
pub fn MetricCard(record: MetricRecord, mode: ThemeMode) -> Element {
    let view = CardView::from(&record);

    rsx! {
        div {
            class: "{theme::panel(mode)}",
            div { class: "mb-4 flex items-center justify-between",
                h3 { class: "{theme::card_label(mode)}", "{view.title}" }
                Icon { glyph: view.icon, class: theme::card_icon(mode) }
            }
            div { class: "{theme::card_value(mode)}", "{view.value}" }
            p {
                class: "{theme::trend_text(mode, view.trend)}",
                Icon { glyph: view.trend_glyph(), class: "h-4 w-4" }
                span { class: "font-medium", "{view.change_label}" }
                span { class: "{theme::text_caption(mode)}", "from last month" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::STATS_DATA;

    #[test]
    fn non_negative_change_shows_increase_arrow() {
        for record in STATS_DATA.iter().filter(|r| r.percent_change >= 0.0) {
            let view = CardView::from(record);
            assert_eq!(view.trend, Trend::Increase);
            assert_eq!(view.trend_glyph(), Glyph::ArrowUpRight);
        }
    }

    #[test]
    fn negative_change_shows_decrease_arrow() {
        let conversion = &STATS_DATA[2];
        let view = CardView::from(conversion);
        assert_eq!(view.trend, Trend::Decrease);
        assert_eq!(view.trend_glyph(), Glyph::ArrowDownRight);
        assert_eq!(view.change_label, "2.1%");
        assert_eq!(view.icon, Glyph::TrendingUp);
    }

    #[test]
    fn zero_change_counts_as_increase() {
        let record = MetricRecord {
            title: "Flat",
            display_value: "0",
            percent_change: 0.0,
            category: MetricCategory::Session,
        };
        assert_eq!(CardView::from(&record).trend_glyph(), Glyph::ArrowUpRight);
    }

    #[test]
    fn card_view_is_pure() {
        for record in STATS_DATA.iter() {
            assert_eq!(CardView::from(record), CardView::from(&record.clone()));
        }
    }

    #[test]
    fn each_category_has_its_own_icon() {
        let icons: Vec<_> = STATS_DATA.iter().map(|r| CardView::from(r).icon).collect();
        assert_eq!(
            icons,
            [Glyph::DollarSign, Glyph::Users, Glyph::TrendingUp, Glyph::Activity]
        );
    }
}
