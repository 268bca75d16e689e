//! Light/dark class helpers for consistent styling across the dashboard.

use crate::domain::{ThemeMode, Trend};

// ============================================
// PAGE CHROME
// ============================================

pub fn page(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "min-h-screen bg-gray-50 font-sans",
        ThemeMode::Dark => "min-h-screen bg-gray-900 font-sans",
    }
}

pub fn header(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "border-b border-gray-200 bg-white",
        ThemeMode::Dark => "border-b border-gray-700 bg-gray-800",
    }
}

pub fn title(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-2xl font-bold text-gray-900",
        ThemeMode::Dark => "text-2xl font-bold text-white",
    }
}

pub fn toggle_button(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "rounded-lg bg-gray-100 p-2 transition hover:bg-gray-200",
        ThemeMode::Dark => "rounded-lg bg-gray-700 p-2 transition hover:bg-gray-600",
    }
}

pub fn toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "h-5 w-5 text-gray-700",
        ThemeMode::Dark => "h-5 w-5 text-gray-300",
    }
}

pub fn footer(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "py-4 text-center text-sm text-gray-600",
        ThemeMode::Dark => "py-4 text-center text-sm text-gray-400",
    }
}

pub fn link(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-blue-600 hover:underline",
        ThemeMode::Dark => "text-blue-400 hover:underline",
    }
}

// ============================================
// PANEL / CARD STYLES
// ============================================

pub fn panel(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "rounded-xl border border-gray-200 bg-white p-6 shadow-lg",
        ThemeMode::Dark => "rounded-xl border border-gray-700 bg-gray-800 p-6 shadow-lg",
    }
}

pub fn panel_heading(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-lg font-semibold text-gray-900",
        ThemeMode::Dark => "text-lg font-semibold text-white",
    }
}

pub fn card_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-sm font-medium text-gray-600",
        ThemeMode::Dark => "text-sm font-medium text-gray-400",
    }
}

pub fn card_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "h-5 w-5 text-gray-400",
        ThemeMode::Dark => "h-5 w-5 text-gray-500",
    }
}

pub fn card_value(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "mb-2 text-3xl font-bold text-gray-900",
        ThemeMode::Dark => "mb-2 text-3xl font-bold text-white",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-sm text-gray-600",
        ThemeMode::Dark => "text-sm text-gray-400",
    }
}

pub fn text_caption(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "text-gray-500",
        ThemeMode::Dark => "text-gray-400",
    }
}

pub fn trend_text(mode: ThemeMode, trend: Trend) -> &'static str {
    match (trend, mode) {
        (Trend::Increase, ThemeMode::Light) => "flex items-center gap-1 text-sm text-green-600",
        (Trend::Increase, ThemeMode::Dark) => "flex items-center gap-1 text-sm text-green-400",
        (Trend::Decrease, ThemeMode::Light) => "flex items-center gap-1 text-sm text-red-600",
        (Trend::Decrease, ThemeMode::Dark) => "flex items-center gap-1 text-sm text-red-400",
    }
}

// ============================================
// CHART STYLES
// ============================================

/// Inline style for chart tooltips; the border stays light in both modes.
pub fn tooltip_style(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "background-color: #FFFFFF; border: 1px solid #E5E7EB; border-radius: 0.5rem; color: #111827;",
        ThemeMode::Dark => "background-color: #1F2937; border: 1px solid #E5E7EB; border-radius: 0.5rem; color: #F9FAFB;",
    }
}
