use dioxus::prelude::*;

use crate::domain::ThemeMode;
use crate::ui::theme;

/// Heading, description and a chart body.
#[component]
pub fn Panel(title: &'static str, description: &'static str, mode: ThemeMode, children: Element) -> Element {
    rsx! {
        section {
            class: "{theme::panel(mode)}",
            div { class: "mb-4",
                h2 { class: "{theme::panel_heading(mode)}", "{title}" }
                p { class: "{theme::text_muted(mode)}", "{description}" }
            }
            {children}
        }
    }
}
