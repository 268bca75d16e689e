use dioxus::prelude::*;

use crate::app::toggle_theme;
use crate::domain::ThemeMode;
use crate::ui::{components::ThemeToggle, theme};
use crate::util::version::{version_label, APP_AUTHOR, APP_HOMEPAGE, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let theme_signal = use_context::<Signal<ThemeMode>>();
    let mode = theme_signal();

    rsx! {
        div { class: "{theme::page(mode)}",
            header { class: "{theme::header(mode)}",
                div { class: "container mx-auto flex items-center justify-between px-4 py-4",
                    div {
                        h1 { class: "{theme::title(mode)}", "{APP_NAME}" }
                        p { class: "{theme::text_muted(mode)}", "Real-time data visualization" }
                    }
                    ThemeToggle { mode, onclick: move |_| toggle_theme(theme_signal) }
                }
            }
            main { class: "container mx-auto space-y-8 px-4 py-8",
                {children}
                footer { class: "{theme::footer(mode)}",
                    p { "Built with Rust and Dioxus by {APP_AUTHOR} · {version_label()}" }
                    a { class: "{theme::link(mode)}", href: APP_HOMEPAGE, "← Back to Portfolio" }
                }
            }
        }
    }
}
