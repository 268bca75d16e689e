use dioxus::prelude::*;

use crate::domain::ThemeMode;
use crate::ui::components::icon::{Glyph, Icon};
use crate::ui::theme;

/// Sun in dark mode, moon in light mode.
#[component]
pub fn ThemeToggle(mode: ThemeMode, onclick: EventHandler<()>) -> Element {
    let glyph = match mode {
        ThemeMode::Dark => Glyph::Sun,
        ThemeMode::Light => Glyph::Moon,
    };

    rsx! {
        button {
            class: "{theme::toggle_button(mode)}",
            "aria-label": "Toggle dark mode",
            onclick: move |_| onclick.call(()),
            Icon { glyph, class: theme::toggle_icon(mode) }
        }
    }
}
