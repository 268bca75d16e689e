#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

#[cfg(feature = "desktop")]
use crate::util::version::APP_NAME;

fn main() {
    #[cfg(feature = "desktop")]
    set_linux_webview_defaults();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
                .with_inner_size(LogicalSize::new(1280.0, 900.0)),
        );
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

/// Explicit sync in WebKit's DMABUF renderer crashes on some Wayland drivers.
#[cfg(feature = "desktop")]
fn set_linux_webview_defaults() {
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}
