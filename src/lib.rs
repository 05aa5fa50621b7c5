//! langmenu - the "Language" screen of a game engine's in-game menu shell
//!
//! This library lists the compiled-in set of shell languages, marks the one
//! matching the engine's current content folder, and turns the user's pick
//! into a `ui_language` console command followed by a restart request.
//!
//! ## Module Structure
//!
//! - [`model`] - Language list model and the generic tabular data provider
//! - [`engine`] - Engine-facing seams: current folder query and console commands
//! - [`mod@i18n`] - Localization lookup for menu labels
//! - [`settings`] - Persisted engine settings (`ui_language`)
//! - [`app`] - Reference eframe host for the menu screen
//! - [`ui`] - Menu widgets
//!   - `table` - Weighted-column table bound to a [`model::TableModel`]
//!   - `banner` - Banner art at the top of the screen
//!   - `language_menu` - The Language screen controller

#[macro_use]
extern crate rust_i18n;

// Menu label translations live in the i18n directory
// Fallback to English if a translation is missing
i18n!("i18n", fallback = "en");

pub mod app;
pub mod engine;
pub mod i18n;
pub mod model;
pub mod settings;
pub mod ui;
