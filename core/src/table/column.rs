//! Declarative column model.
//!
//! A column is a pure descriptor, never mutated after the table is
//! constructed: a value extractor, a display kind resolved at definition
//! time, a sort preference, and optional style tags the rendering layer may
//! apply to header and value cells.

use std::fmt;

use simview_types::SpellSchool;
use simview_types::formatting::format_value;

use crate::metrics::{ActionAggregate, ActionId};

/// Sort-direction preference a column declares for itself. Which column is
/// actually active is decided by the table configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortPreference {
    #[default]
    None,
    Ascending,
    Descending,
}

/// Context available to custom cell hooks during a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Maximum primary magnitude among the rows of this render cycle, or
    /// `None` when the row set is empty.
    pub max_value: Option<f64>,
}

/// Content of one rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Bar(BarFill),
    Action(ActionLabel),
}

/// A relative-magnitude bar: width is `fraction` of the full cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFill {
    pub school: SpellSchool,
    /// `amount / max` over the current row set; 0 when no maximum exists.
    pub fraction: f64,
    pub amount: f64,
}

/// Name-cell content identifying the row's action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLabel {
    pub name: String,
    pub action_id: ActionId,
}

/// Mutable handle a custom hook fills in for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellHandle {
    pub class: Option<String>,
    pub content: CellContent,
}

/// How a column turns an aggregate row into cell content. Resolved once at
/// column-definition time.
pub enum DisplayKind {
    /// Fixed-precision rendering of the extracted value, compact K/M for
    /// large magnitudes.
    Default,
    /// Custom text formatter.
    Text(Box<dyn Fn(&ActionAggregate) -> String>),
    /// Custom cell content. The hook receives the record read-only; it must
    /// not have side effects on the data model.
    Custom(Box<dyn Fn(&ActionAggregate, &RenderContext, &mut CellHandle)>),
}

/// Static description of one table column.
pub struct ColumnSpec {
    pub name: String,
    pub tooltip: String,
    pub header_class: Option<String>,
    pub column_class: Option<String>,
    pub sort: SortPreference,
    value: Box<dyn Fn(&ActionAggregate) -> f64>,
    display: DisplayKind,
}

impl ColumnSpec {
    /// A column extracting `value`, displayed with the default formatter.
    pub fn new(
        name: impl Into<String>,
        tooltip: impl Into<String>,
        value: impl Fn(&ActionAggregate) -> f64 + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            tooltip: tooltip.into(),
            header_class: None,
            column_class: None,
            sort: SortPreference::None,
            value: Box::new(value),
            display: DisplayKind::Default,
        }
    }

    pub fn with_display(mut self, f: impl Fn(&ActionAggregate) -> String + 'static) -> Self {
        self.display = DisplayKind::Text(Box::new(f));
        self
    }

    pub fn with_custom(
        mut self,
        hook: impl Fn(&ActionAggregate, &RenderContext, &mut CellHandle) + 'static,
    ) -> Self {
        self.display = DisplayKind::Custom(Box::new(hook));
        self
    }

    pub fn with_sort(mut self, sort: SortPreference) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    pub fn with_column_class(mut self, class: impl Into<String>) -> Self {
        self.column_class = Some(class.into());
        self
    }

    /// Numeric value of this column for a row. Total over any aggregate the
    /// table produces.
    pub fn extract(&self, record: &ActionAggregate) -> f64 {
        (self.value)(record)
    }

    /// Produce the cell for a row. Never mutates the record.
    pub fn render(&self, record: &ActionAggregate, ctx: &RenderContext) -> CellHandle {
        let mut cell = CellHandle {
            class: self.column_class.clone(),
            content: CellContent::Text(String::new()),
        };
        match &self.display {
            DisplayKind::Default => {
                cell.content = CellContent::Text(format_value(self.extract(record)));
            }
            DisplayKind::Text(f) => cell.content = CellContent::Text(f(record)),
            DisplayKind::Custom(hook) => hook(record, ctx, &mut cell),
        }
        cell
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}
