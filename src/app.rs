use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::ThemeMode,
    ui::{pages::DashboardPage, shell::Shell},
    util::{assets, persistence::ThemePreference},
};

const PREFERS_DARK_QUERY: &str =
    "return window.matchMedia('(prefers-color-scheme: dark)').matches;";

#[component]
pub fn App() -> Element {
    let preference = use_hook(ThemePreference::platform);
    let stored = use_hook({
        let preference = preference.clone();
        move || preference.stored()
    });
    let theme = use_signal(|| stored.unwrap_or_default());
    use_context_provider(|| theme);

    // Nothing stored: the OS color scheme decides, once, at start-up.
    let _resolve = use_future(move || {
        let preference = preference.clone();
        let mut theme = theme;
        async move {
            if let Some(mode) = stored {
                tracing::info!("Using stored {} theme", mode.name());
                return;
            }
            let mode = preference.read(system_prefers_dark().await);
            tracing::info!("No stored theme; following system {} scheme", mode.name());
            theme.set(mode);
        }
    });

    use_effect(move || apply_document_theme(theme()));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Shell { DashboardPage {} }
    }
}

/// Flips the theme, persists it and updates the signal in one step.
pub fn toggle_theme(mut theme: Signal<ThemeMode>) {
    let next = ThemePreference::platform().toggle(theme());
    tracing::info!("Theme toggled to {}", next.name());
    theme.set(next);
}

/// Mirrors the mode onto `<html>` so document-level styles follow it.
fn apply_document_theme(mode: ThemeMode) {
    let script = format!(
        "document.documentElement.classList.toggle('dark', {dark}); \
         document.documentElement.style.colorScheme = '{name}';",
        dark = mode.is_dark(),
        name = mode.name(),
    );
    let _ = document::eval(&script);
}

async fn system_prefers_dark() -> bool {
    match document::eval(PREFERS_DARK_QUERY).join::<bool>().await {
        Ok(dark) => dark,
        Err(err) => {
            tracing::debug!("Could not query system color scheme: {err:?}");
            false
        }
    }
}
