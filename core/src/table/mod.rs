//! Sortable metric tables.
//!
//! A table is a declarative column set (what to extract, how to display,
//! how to sort) plus a controller that reacts to result-change
//! notifications and exposes a sorted, render-ready row sequence. The
//! painting of rows is the rendering layer's job; the controller only emits
//! per-cell draw instructions.

mod column;
mod controller;
mod damage_taken;


pub use column::{
    ActionLabel, BarFill, CellContent, CellHandle, ColumnSpec, DisplayKind, RenderContext,
    SortPreference,
};
pub use controller::{
    ColumnHeader, MetricsTable, RecordSource, RenderedCell, RenderedRow, TableConfig, TableError,
};
pub use damage_taken::{DamageTakenSource, damage_taken_columns, damage_taken_table};
