//! The Language screen.
//!
//! Lists the supported shell languages, highlights the one in use, and on
//! "Activate" switches to the selected language and restarts the engine.

use eframe::egui;

use crate::engine::{language_switch_command, CommandExecutor, GameInfo};
use crate::i18n::Localizer;
use crate::model::{LangColumn, LangEntry, LangListModel, TableModel};
use crate::ui::banner::Banner;
use crate::ui::table::MenuTable;

/// Banner art for the Language screen
pub const ART_BANNER: &str = "gfx/shell/head_language";

/// Width share of the language name column
pub const NAME_COLUMN_WEIGHT: f32 = 0.70;

/// Width share of the status column
pub const STATUS_COLUMN_WEIGHT: f32 = 0.30;

/// Table placement in the menu area: x, y, width, height
pub const TABLE_RECT: (f32, f32, f32, f32) = (360.0, 230.0, -20.0, 400.0);

/// Top-left of the button column
const BUTTON_ORIGIN: (f32, f32) = (72.0, 230.0);

/// Button size in points
const BUTTON_SIZE: [f32; 2] = [220.0, 32.0];

/// Action bound to a screen button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Activate,
}

/// A labelled button in the screen's button column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub action: MenuAction,
}

/// Controller for the Language screen.
///
/// Owns the model and the table for the lifetime of the screen.
#[derive(Debug)]
pub struct LanguageMenu {
    banner: Banner,
    table: MenuTable,
    model: LangListModel,
    buttons: Vec<MenuButton>,
}

impl LanguageMenu {
    /// Build the screen: banner, two weighted columns, and the Activate button
    pub fn new(localizer: &dyn Localizer) -> Self {
        let mut banner = Banner::new(ART_BANNER);
        banner.set_fallback_title(localizer.localize("Language"));

        let mut table = MenuTable::new();
        table.setup_column(
            LangColumn::Name as usize,
            localizer.localize("Language"),
            NAME_COLUMN_WEIGHT,
        );
        table.setup_column(
            LangColumn::Status as usize,
            localizer.localize("Status"),
            STATUS_COLUMN_WEIGHT,
        );
        let (x, y, w, h) = TABLE_RECT;
        table.set_rect(x, y, w, h);

        let buttons = vec![MenuButton {
            label: localizer.localize("Activate"),
            action: MenuAction::Activate,
        }];

        Self {
            banner,
            table,
            model: LangListModel::new(),
            buttons,
        }
    }

    /// Rebuild the language list; called whenever the screen opens
    pub fn refresh(&mut self, game: &dyn GameInfo) {
        self.model.update(game);
    }

    pub fn model(&self) -> &LangListModel {
        &self.model
    }

    pub fn table(&self) -> &MenuTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut MenuTable {
        &mut self.table
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// Entry under the table's highlight, if it names a valid row
    pub fn selected_entry(&self) -> Option<&LangEntry> {
        self.table
            .current_index()
            .and_then(|index| self.model.entry(index))
    }

    /// Switch to the highlighted language.
    ///
    /// Without a valid selection nothing is sent. Otherwise exactly one
    /// command string is issued: the language change chained with `quit`.
    /// Returns whether a command was dispatched.
    pub fn on_activate(&self, executor: &mut dyn CommandExecutor) -> bool {
        let Some(entry) = self.selected_entry() else {
            tracing::debug!(
                "Activate ignored, no valid selection ({:?})",
                self.table.current_index()
            );
            return false;
        };

        tracing::info!("Switching shell language to '{}' and restarting", entry.code);
        executor.client_cmd(&language_switch_command(&entry.code));
        true
    }

    fn trigger(&self, action: MenuAction, executor: &mut dyn CommandExecutor) {
        match action {
            MenuAction::Activate => {
                self.on_activate(executor);
            }
        }
    }

    /// Render the screen and dispatch any button or table activation
    pub fn show(&mut self, ui: &mut egui::Ui, executor: &mut dyn CommandExecutor) {
        let area = ui.max_rect();

        self.banner.show(ui);

        let table_response = self.table.show(ui, &self.model);

        let mut pressed = None;
        let origin = area.min + egui::vec2(BUTTON_ORIGIN.0, BUTTON_ORIGIN.1);
        let button_area = egui::Rect::from_min_max(origin, area.max);
        ui.scope_builder(egui::UiBuilder::new().max_rect(button_area), |ui| {
            ui.vertical(|ui| {
                for button in &self.buttons {
                    if ui
                        .add_sized(BUTTON_SIZE, egui::Button::new(button.label.as_str()))
                        .clicked()
                    {
                        pressed = Some(button.action);
                    }
                }
            });
        });

        if table_response.activated {
            pressed = Some(MenuAction::Activate);
        }

        if let Some(action) = pressed {
            self.trigger(action, executor);
        }
    }
}
