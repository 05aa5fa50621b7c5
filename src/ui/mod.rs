//! Menu widgets and screens.
//!
//! - `table` - Weighted-column table that renders a [`crate::model::TableModel`]
//! - `banner` - Banner art with a text fallback
//! - `language_menu` - The Language screen controller

pub mod banner;
pub mod language_menu;
pub mod table;
