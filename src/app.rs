//! Reference host for the Language screen.
//!
//! Stands in for the engine shell: it owns the persisted settings, collects
//! console text from the menu in a [`CommandBuffer`], and applies the parsed
//! commands at the end of every frame.

use eframe::egui;

use crate::engine::{CommandBuffer, ConsoleCommand};
use crate::i18n::{locale_for_code, BundledLocalizer};
use crate::settings::UserSettings;
use crate::ui::language_menu::LanguageMenu;

/// Result of applying queued console commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleOutcome {
    /// `quit` was requested
    pub quit: bool,
    /// The Language screen was (re)opened
    pub reopened: bool,
}

/// Main application state
pub struct LanguageMenuApp {
    settings: UserSettings,
    /// Write settings to disk when `ui_language` is applied
    persist: bool,
    console: CommandBuffer,
    menu: LanguageMenu,
}

impl LanguageMenuApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_settings(UserSettings::load(), true)
    }

    /// Build the host around `settings`; `persist` controls whether language
    /// changes are saved
    pub fn with_settings(settings: UserSettings, persist: bool) -> Self {
        rust_i18n::set_locale(locale_for_code(&settings.ui_language));

        let localizer = BundledLocalizer::for_code(&settings.ui_language);
        let mut menu = LanguageMenu::new(&localizer);
        menu.refresh(&settings);

        tracing::info!("Language menu opened, current language '{}'", settings.ui_language);

        Self {
            settings,
            persist,
            console: CommandBuffer::new(),
            menu,
        }
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn menu(&self) -> &LanguageMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut LanguageMenu {
        &mut self.menu
    }

    pub fn console_mut(&mut self) -> &mut CommandBuffer {
        &mut self.console
    }

    /// Trigger the screen's Activate action against the host console
    pub fn activate(&mut self) -> bool {
        self.menu.on_activate(&mut self.console)
    }

    /// Drain the console and apply each command in order
    pub fn apply_console(&mut self) -> ConsoleOutcome {
        let mut outcome = ConsoleOutcome::default();

        for command in self.console.drain() {
            match command {
                Ok(ConsoleCommand::UiLanguage(code)) => self.set_language(code),
                Ok(ConsoleCommand::Quit) => outcome.quit = true,
                Ok(ConsoleCommand::MenuLanguage) => {
                    self.menu.refresh(&self.settings);
                    outcome.reopened = true;
                }
                Err(e) => tracing::warn!("Console: {}", e),
            }
        }

        outcome
    }

    fn set_language(&mut self, code: String) {
        tracing::info!("ui_language set to '{}'", code);
        self.settings.ui_language = code;

        if self.persist {
            if let Err(e) = self.settings.save() {
                tracing::warn!("Failed to save language setting: {}", e);
            }
        }
    }
}

impl eframe::App for LanguageMenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.menu.show(ui, &mut self.console);
        });

        let outcome = self.apply_console();
        if outcome.quit {
            tracing::info!("Quit requested, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
