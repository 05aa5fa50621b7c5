//! Tests for the language list model
//!
//! Tests cover:
//! - Refresh contents and ordering
//! - Active language detection (case-insensitive, zero or one match)
//! - Cell text for both columns and out-of-range access
//! - Name sorting helpers

use std::cmp::Ordering;

use langmenu::model::{
    LangColumn, LangEntry, LangListModel, TableModel, STATUS_ACTIVE, STATUS_AVAILABLE,
    SUPPORTED_LANGUAGES,
};

use crate::common::Folder;

fn refreshed(folder: &'static str) -> LangListModel {
    let mut model = LangListModel::new();
    model.refresh(&Folder(folder));
    model
}

// ============================================
// Refresh Tests
// ============================================

#[test]
fn test_model_empty_before_refresh() {
    let model = LangListModel::new();
    assert_eq!(model.rows(), 0);
    assert_eq!(model.cell_text(0, 0), None);
}

#[test]
fn test_refresh_yields_four_rows() {
    let model = refreshed("english");
    assert_eq!(model.rows(), 4);
    assert_eq!(model.columns(), 2);
}

#[test]
fn test_refresh_keeps_compiled_in_order() {
    let model = refreshed("english");
    let codes: Vec<&str> = model.entries().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["english", "portuguese", "spanish", "french"]);

    for (entry, (code, name)) in model.entries().iter().zip(SUPPORTED_LANGUAGES.iter()) {
        assert_eq!(entry.code, *code);
        assert_eq!(entry.name, *name);
    }
}

#[test]
fn test_repeated_refresh_does_not_grow() {
    let mut model = LangListModel::new();
    for _ in 0..5 {
        model.refresh(&Folder("french"));
    }
    assert_eq!(model.rows(), 4);
}

#[test]
fn test_refresh_replaces_previous_active_flag() {
    let mut model = LangListModel::new();
    model.refresh(&Folder("english"));
    assert_eq!(model.active_entry().map(|e| e.code.as_str()), Some("english"));

    model.refresh(&Folder("french"));
    assert_eq!(model.active_entry().map(|e| e.code.as_str()), Some("french"));
    assert_eq!(model.entries().iter().filter(|e| e.active).count(), 1);
}

#[test]
fn test_update_via_trait_matches_refresh() {
    let mut model = LangListModel::new();
    TableModel::update(&mut model, &Folder("portuguese"));
    assert_eq!(model.rows(), 4);
    assert!(model.entry(1).is_some_and(|e| e.active));
}

// ============================================
// Active Detection Tests
// ============================================

#[test]
fn test_active_is_case_insensitive() {
    let model = refreshed("SPANISH");
    let active: Vec<&LangEntry> = model.entries().iter().filter(|e| e.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "spanish");
}

#[test]
fn test_mixed_case_folder() {
    let model = refreshed("PortuGuese");
    assert_eq!(model.active_entry().map(|e| e.code.as_str()), Some("portuguese"));
}

#[test]
fn test_unknown_folder_has_no_active_entry() {
    let model = refreshed("valve");
    assert!(model.entries().iter().all(|e| !e.active));
    assert!(model.active_entry().is_none());
}

#[test]
fn test_empty_folder_has_no_active_entry() {
    let model = refreshed("");
    assert!(model.active_entry().is_none());
}

#[test]
fn test_prefix_does_not_match() {
    let model = refreshed("englis");
    assert!(model.active_entry().is_none());
}

#[test]
fn test_at_most_one_active_for_every_code() {
    for (code, _) in SUPPORTED_LANGUAGES {
        let model = refreshed(code);
        assert_eq!(model.entries().iter().filter(|e| e.active).count(), 1);
    }
}

// ============================================
// Cell Text Tests
// ============================================

#[test]
fn test_name_column() {
    let model = refreshed("english");
    assert_eq!(model.cell_text(0, LangColumn::Name as usize), Some("English"));
    assert_eq!(model.cell_text(1, LangColumn::Name as usize), Some("Português"));
    assert_eq!(model.cell_text(2, LangColumn::Name as usize), Some("Español"));
    assert_eq!(model.cell_text(3, LangColumn::Name as usize), Some("Français"));
}

#[test]
fn test_status_column_is_one_of_two_labels() {
    let model = refreshed("spanish");
    for row in 0..model.rows() {
        let status = model.cell_text(row, LangColumn::Status as usize);
        assert!(status == Some(STATUS_ACTIVE) || status == Some(STATUS_AVAILABLE));
    }
}

#[test]
fn test_status_labels_are_verbatim() {
    let model = refreshed("spanish");
    assert_eq!(model.cell_text(2, 1), Some("Ativo"));
    assert_eq!(model.cell_text(0, 1), Some("Available"));
}

#[test]
fn test_out_of_range_cells() {
    let model = refreshed("english");
    assert_eq!(model.cell_text(0, 2), None);
    assert_eq!(model.cell_text(4, 0), None);
    assert_eq!(model.cell_text(usize::MAX, usize::MAX), None);
}

#[test]
fn test_is_valid_index() {
    let model = refreshed("english");
    assert!(model.is_valid_index(0));
    assert!(model.is_valid_index(3));
    assert!(!model.is_valid_index(4));
}

// ============================================
// Sorting Tests
// ============================================

#[test]
fn test_name_cmp_ignores_ascii_case() {
    let a = LangEntry::new("x", "english", false);
    let b = LangEntry::new("y", "ENGLISH", false);
    assert_eq!(a.name_cmp(&b), Ordering::Equal);
}

#[test]
fn test_ascend_and_descend_are_mirrored() {
    let a = LangEntry::new("english", "English", false);
    let b = LangEntry::new("french", "Français", false);
    assert_eq!(LangEntry::name_cmp_ascend(&a, &b), Ordering::Less);
    assert_eq!(LangEntry::name_cmp_descend(&a, &b), Ordering::Greater);
}

#[test]
fn test_sort_by_name_ascending() {
    let mut model = refreshed("english");
    model.sort(LangColumn::Name as usize, true);
    let names: Vec<&str> = model.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["English", "Español", "Français", "Português"]);
}

#[test]
fn test_sort_by_name_descending() {
    let mut model = refreshed("english");
    model.sort(LangColumn::Name as usize, false);
    let names: Vec<&str> = model.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Português", "Français", "Español", "English"]);
}

#[test]
fn test_sort_by_status_column_is_ignored() {
    let mut model = refreshed("french");
    model.sort(LangColumn::Status as usize, true);
    assert_eq!(model.entry(0).map(|e| e.code.as_str()), Some("english"));
}

#[test]
fn test_sort_keeps_active_flag_with_entry() {
    let mut model = refreshed("portuguese");
    model.sort(LangColumn::Name as usize, true);
    assert_eq!(model.active_entry().map(|e| e.code.as_str()), Some("portuguese"));
    assert_eq!(model.cell_text(3, 1), Some(STATUS_ACTIVE));
}
