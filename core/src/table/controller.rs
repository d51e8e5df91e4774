//! Table controller.
//!
//! Owns the column set, reacts to result-change notifications, and derives
//! the sorted, render-ready row sequence: filter raw records, group by
//! action identity, merge each group, recompute the normalization maximum,
//! sort. Each notification is processed to completion before the next one;
//! derived state is owned by the controller and mutated only here.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, trace};

use super::column::{CellHandle, ColumnSpec, RenderContext, SortPreference};
use crate::events::ResultsEmitter;
use crate::metrics::{
    ActionAggregate, ActionId, ActionRecord, GroupKey, PetAttribution, group_records, max_of,
    merge_group,
};
use crate::result::SimResultData;

/// Derives the raw records a table should aggregate from a snapshot and
/// its view filter. This is the seam between the generic controller and a
/// concrete table (damage dealt, damage taken, healing, ...).
pub trait RecordSource {
    fn records(&self, data: &SimResultData) -> Vec<ActionRecord>;
}

/// Table-level configuration. Sort activation lives here, not on any
/// column: exactly zero or one column is active at a time.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Index of the column whose sort preference orders the rows.
    pub active_sort_column: Option<usize>,
    pub group_key: GroupKey,
    /// Drop sub-actor ids when merging, so contributions from multiple
    /// sources report as one owner-level row.
    pub combine_across_sources: bool,
    pub pet_attribution: PetAttribution,
}

impl TableConfig {
    /// Resolve the active sort column from the columns' own declared
    /// preferences: the last column declaring one wins.
    pub fn from_columns(columns: &[ColumnSpec]) -> Self {
        let active = columns
            .iter()
            .rposition(|c| c.sort != SortPreference::None);
        Self { active_sort_column: active, ..Self::default() }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("active sort column {index} out of range ({columns} columns)")]
    SortColumnOutOfRange { index: usize, columns: usize },
}

/// Header information for the rendering layer.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    pub name: String,
    pub tooltip: String,
    pub class: Option<String>,
}

/// One rendered row: the row identity plus per-cell draw instructions.
#[derive(Debug, Clone)]
pub struct RenderedRow {
    pub action_id: ActionId,
    pub cells: Vec<RenderedCell>,
}

#[derive(Debug, Clone)]
pub struct RenderedCell {
    /// The column's extracted numeric value for this row.
    pub value: f64,
    pub cell: CellHandle,
}

/// A sortable metrics table over aggregate action rows.
pub struct MetricsTable {
    columns: Vec<ColumnSpec>,
    config: TableConfig,
    source: Box<dyn RecordSource>,
    rows: Vec<ActionAggregate>,
    max_value: Option<f64>,
}

impl MetricsTable {
    pub fn new(
        columns: Vec<ColumnSpec>,
        config: TableConfig,
        source: Box<dyn RecordSource>,
    ) -> Result<Self, TableError> {
        if let Some(index) = config.active_sort_column
            && index >= columns.len()
        {
            return Err(TableError::SortColumnOutOfRange { index, columns: columns.len() });
        }
        Ok(Self { columns, config, source, rows: Vec::new(), max_value: None })
    }

    /// Register the table on a change feed. The emitter delivers
    /// notifications one at a time on the same execution context, so the
    /// `RefCell` borrow inside the handler never overlaps another borrow.
    pub fn attach(table: &Rc<RefCell<MetricsTable>>, emitter: &mut ResultsEmitter) {
        let table = Rc::clone(table);
        emitter.subscribe(move |data| table.borrow_mut().handle_update(data));
    }

    /// Recompute all derived state from a new result snapshot.
    ///
    /// An absent snapshot clears rows and maximum; stale rows are never
    /// retained.
    pub fn handle_update(&mut self, data: Option<&SimResultData>) {
        let Some(data) = data else {
            trace!("result snapshot absent, clearing table");
            self.rows.clear();
            self.max_value = None;
            return;
        };

        let records = self.source.records(data);
        let groups = group_records(records, self.config.group_key);
        let mut rows: Vec<ActionAggregate> = groups
            .iter()
            .map(|group| {
                merge_group(
                    group,
                    self.config.combine_across_sources,
                    self.config.pet_attribution.resolve(group),
                )
            })
            .collect();

        self.max_value = max_of(&rows, |row| row.damage);
        self.sort_rows(&mut rows);
        self.rows = rows;
        debug!(rows = self.rows.len(), max = ?self.max_value, "metrics table recomputed");
    }

    /// Stable sort by the active column's extracted value. Ties keep their
    /// prior relative order, so repeated renders of unchanged data produce
    /// identical row order.
    fn sort_rows(&self, rows: &mut [ActionAggregate]) {
        let Some(index) = self.config.active_sort_column else {
            return;
        };
        let column = &self.columns[index];
        match column.sort {
            SortPreference::None => {}
            SortPreference::Ascending => {
                rows.sort_by(|a, b| column.extract(a).total_cmp(&column.extract(b)));
            }
            SortPreference::Descending => {
                rows.sort_by(|a, b| column.extract(b).total_cmp(&column.extract(a)));
            }
        }
    }

    /// Current aggregate rows, in display order.
    pub fn rows(&self) -> &[ActionAggregate] {
        &self.rows
    }

    /// Normalization maximum of the current rows (`None` when empty).
    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    /// Column headers for the rendering layer.
    pub fn headers(&self) -> Vec<ColumnHeader> {
        self.columns
            .iter()
            .map(|c| ColumnHeader {
                name: c.name.clone(),
                tooltip: c.tooltip.clone(),
                class: c.header_class.clone(),
            })
            .collect()
    }

    /// Per-cell draw instructions for the current rows.
    pub fn render(&self) -> Vec<RenderedRow> {
        let ctx = RenderContext { max_value: self.max_value };
        self.rows
            .iter()
            .map(|row| RenderedRow {
                action_id: row.action_id,
                cells: self
                    .columns
                    .iter()
                    .map(|col| RenderedCell {
                        value: col.extract(row),
                        cell: col.render(row, &ctx),
                    })
                    .collect(),
            })
            .collect()
    }
}
