//! Language list model.
//!
//! The model owns the rows shown by the Language screen's table. It is rebuilt
//! from the compiled-in [`SUPPORTED_LANGUAGES`] table on every refresh and
//! exposes them through the generic [`TableModel`] interface so any table
//! widget can bind to it.

use std::cmp::Ordering;

use strum::{EnumCount, FromRepr};

use crate::engine::GameInfo;

// ============================================================================
// Constants
// ============================================================================

/// Languages offered by the shell as `(code, display name)` pairs.
///
/// The code is the value handed to `ui_language`; rows appear in this order.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 4] = [
    ("english", "English"),
    ("portuguese", "Português"),
    ("spanish", "Español"),
    ("french", "Français"),
];

/// Status cell text for the language currently loaded by the engine
// NOTE: mixed-locale pair kept verbatim until the shell's locale strategy is settled
pub const STATUS_ACTIVE: &str = "Ativo";

/// Status cell text for every other language
pub const STATUS_AVAILABLE: &str = "Available";

// ============================================================================
// Comparison helpers
// ============================================================================

/// ASCII case-insensitive equality, independent of the host locale
pub fn eq_ignore_ascii_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive ordering, byte by byte after folding
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let fold = |c: u8| c.to_ascii_lowercase();
    a.bytes().map(fold).cmp(b.bytes().map(fold))
}

// ============================================================================
// Table Model
// ============================================================================

/// Generic tabular data provider a table widget renders from.
pub trait TableModel {
    /// Rebuild the rows from the engine's current state
    fn update(&mut self, game: &dyn GameInfo);

    /// Number of columns
    fn columns(&self) -> usize;

    /// Number of rows
    fn rows(&self) -> usize;

    /// Text for a cell, `None` when the row or column is out of range
    fn cell_text(&self, row: usize, column: usize) -> Option<&str>;

    /// Reorder rows by a column. Models that don't sort ignore this.
    fn sort(&mut self, _column: usize, _ascending: bool) {}

    fn is_valid_index(&self, row: usize) -> bool {
        row < self.rows()
    }
}

/// Columns of the language table
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, FromRepr)]
#[repr(usize)]
pub enum LangColumn {
    Name = 0,
    Status = 1,
}

// ============================================================================
// Language Entry
// ============================================================================

/// One selectable language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangEntry {
    /// Value passed to `ui_language` (the content folder key)
    pub code: String,
    /// Human-readable label
    pub name: String,
    /// Whether this entry matches the engine's current folder
    pub active: bool,
}

impl LangEntry {
    pub fn new(code: &str, name: &str, active: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            active,
        }
    }

    /// Compare display names, ignoring ASCII case
    pub fn name_cmp(&self, other: &LangEntry) -> Ordering {
        cmp_ignore_ascii_case(&self.name, &other.name)
    }

    pub fn name_cmp_ascend(a: &LangEntry, b: &LangEntry) -> Ordering {
        a.name_cmp(b)
    }

    pub fn name_cmp_descend(a: &LangEntry, b: &LangEntry) -> Ordering {
        b.name_cmp(a)
    }

    /// Status label shown in the status column
    pub fn status_text(&self) -> &'static str {
        if self.active {
            STATUS_ACTIVE
        } else {
            STATUS_AVAILABLE
        }
    }
}

// ============================================================================
// Language List Model
// ============================================================================

/// Two-column (name, status) view over the supported languages
#[derive(Debug, Default)]
pub struct LangListModel {
    entries: Vec<LangEntry>,
}

impl LangListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current rows and rebuild them from [`SUPPORTED_LANGUAGES`].
    ///
    /// An entry is active when its code equals the engine's game folder,
    /// ignoring ASCII case. No match leaves every entry inactive.
    pub fn refresh(&mut self, game: &dyn GameInfo) {
        let folder = game.game_folder();
        self.entries.clear();
        self.entries
            .extend(SUPPORTED_LANGUAGES.iter().map(|(code, name)| {
                LangEntry::new(code, name, eq_ignore_ascii_case(code, folder))
            }));

        tracing::debug!(
            "Language list refreshed: {} entries, folder '{}', active {:?}",
            self.entries.len(),
            folder,
            self.active_entry().map(|e| e.code.as_str())
        );
    }

    pub fn entries(&self) -> &[LangEntry] {
        &self.entries
    }

    pub fn entry(&self, row: usize) -> Option<&LangEntry> {
        self.entries.get(row)
    }

    /// The entry for the language the engine is running, if any
    pub fn active_entry(&self) -> Option<&LangEntry> {
        self.entries.iter().find(|e| e.active)
    }
}

impl TableModel for LangListModel {
    fn update(&mut self, game: &dyn GameInfo) {
        self.refresh(game);
    }

    fn columns(&self) -> usize {
        LangColumn::COUNT
    }

    fn rows(&self) -> usize {
        self.entries.len()
    }

    fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        let entry = self.entries.get(row)?;
        match LangColumn::from_repr(column)? {
            LangColumn::Name => Some(entry.name.as_str()),
            LangColumn::Status => Some(entry.status_text()),
        }
    }

    fn sort(&mut self, column: usize, ascending: bool) {
        if LangColumn::from_repr(column) != Some(LangColumn::Name) {
            return;
        }
        if ascending {
            self.entries.sort_by(LangEntry::name_cmp_ascend);
        } else {
            self.entries.sort_by(LangEntry::name_cmp_descend);
        }
    }
}
