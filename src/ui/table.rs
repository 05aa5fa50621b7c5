//! Table widget bound to a [`TableModel`].
//!
//! The widget owns layout (column headers, weights, placement) and the
//! highlighted row. Cell text always comes from the model passed to
//! [`MenuTable::show`], so the controller keeps ownership of its data.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::model::TableModel;

/// Height of the header row in points
const HEADER_HEIGHT: f32 = 24.0;

/// Height of a body row in points
const ROW_HEIGHT: f32 = 22.0;

/// A column's header text and share of the table width
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub header: String,
    /// Fraction of the table width, 0.0..=1.0
    pub weight: f32,
}

/// Placement of the table inside the menu area.
///
/// Offsets are from the area's top-left corner. A negative width or height
/// extends to that many points short of the area's right or bottom edge;
/// `-0.0` fills to the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl TableRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Resolve against the area the menu is drawn in
    pub fn resolve(&self, area: egui::Rect) -> egui::Rect {
        let left = area.left() + self.x;
        let top = area.top() + self.y;
        let right = if self.w.is_sign_negative() {
            area.right() + self.w
        } else {
            left + self.w
        };
        let bottom = if self.h.is_sign_negative() {
            area.bottom() + self.h
        } else {
            top + self.h
        };

        egui::Rect::from_min_max(
            egui::pos2(left, top),
            egui::pos2(right.max(left), bottom.max(top)),
        )
    }
}

impl Default for TableRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, -0.0, -0.0)
    }
}

/// What happened to the table during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableResponse {
    /// Row clicked this frame
    pub clicked: Option<usize>,
    /// Row confirmed by double-click or Enter
    pub activated: bool,
}

/// Weighted-column table with a single highlighted row
#[derive(Debug, Clone, Default)]
pub struct MenuTable {
    columns: Vec<TableColumn>,
    rect: TableRect,
    current: Option<usize>,
}

impl MenuTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set header and width share for column `index`, growing the column list
    /// as needed
    pub fn setup_column(&mut self, index: usize, header: impl Into<String>, weight: f32) {
        if self.columns.len() <= index {
            self.columns.resize(
                index + 1,
                TableColumn {
                    header: String::new(),
                    weight: 0.0,
                },
            );
        }
        self.columns[index] = TableColumn {
            header: header.into(),
            weight: weight.clamp(0.0, 1.0),
        };
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn set_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.rect = TableRect::new(x, y, w, h);
    }

    pub fn rect(&self) -> TableRect {
        self.rect
    }

    /// Highlighted row, `None` when nothing is selected
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Highlight `index`. The index is not checked against any model; the
    /// controller validates it when acting on the selection.
    pub fn set_current_index(&mut self, index: Option<usize>) {
        self.current = index;
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    /// Move the highlight by `delta` rows, clamped to `0..rows`.
    ///
    /// With nothing selected, moving down picks the first row and moving up
    /// picks the last.
    pub fn move_selection(&mut self, delta: isize, rows: usize) {
        if rows == 0 {
            self.current = None;
            return;
        }

        let last = rows - 1;
        self.current = Some(match self.current {
            None if delta < 0 => last,
            None => 0,
            Some(index) => index.saturating_add_signed(delta).min(last),
        });
    }

    fn handle_keys(&mut self, ui: &egui::Ui, rows: usize) -> bool {
        let (up, down, enter) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::Enter),
            )
        });

        if up {
            self.move_selection(-1, rows);
        }
        if down {
            self.move_selection(1, rows);
        }

        enter && self.current.is_some()
    }

    /// Render the table inside its rect and update the highlighted row
    pub fn show(&mut self, ui: &mut egui::Ui, model: &dyn TableModel) -> TableResponse {
        let rows = model.rows();
        let column_count = model.columns().min(self.columns.len());
        let mut response = TableResponse {
            activated: self.handle_keys(ui, rows),
            ..Default::default()
        };

        let rect = self.rect.resolve(ui.max_rect());
        let spacing = ui.spacing().item_spacing.x;
        let current = self.current;
        let columns = &self.columns[..column_count];

        let mut clicked = None;
        let mut double_clicked = false;

        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0)
                .max_scroll_height((rect.height() - HEADER_HEIGHT).max(0.0));

            for column in columns {
                let width = (rect.width() * column.weight - spacing).max(0.0);
                builder = builder.column(Column::exact(width));
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for column in columns {
                        header.col(|ui| {
                            ui.strong(&column.header);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows, |mut row| {
                        let index = row.index();
                        row.set_selected(current == Some(index));
                        for column in 0..column_count {
                            row.col(|ui| {
                                ui.label(model.cell_text(index, column).unwrap_or_default());
                            });
                        }

                        let row_response = row.response();
                        if row_response.clicked() {
                            clicked = Some(index);
                        }
                        if row_response.double_clicked() {
                            clicked = Some(index);
                            double_clicked = true;
                        }
                    });
                });
        });

        if let Some(index) = clicked {
            self.current = Some(index);
            response.clicked = Some(index);
            response.activated |= double_clicked;
        }

        response
    }
}
