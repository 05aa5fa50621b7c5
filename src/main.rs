//! langmenu - the "Language" screen of a game engine's menu shell
//!
//! Runs the Language screen stand-alone: pick a language, press Activate, and
//! the choice is saved as `ui_language` before the window closes. The next
//! launch starts with that language active.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use langmenu::app::LanguageMenuApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Menu shell runs at the engine's virtual 1024x768 resolution
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Language")
            .with_app_id("langmenu"),
        ..Default::default()
    };

    eframe::run_native(
        "langmenu",
        native_options,
        Box::new(|cc| Ok(Box::new(LanguageMenuApp::new(cc)))),
    )
}
