pub mod events;
pub mod metrics;
pub mod result;
pub mod table;

// Re-exports for convenience
pub use events::ResultsEmitter;
pub use metrics::{
    ActionAggregate, ActionId, ActionRecord, GroupKey, PetAttribution, group_records, max_of,
    merge_group,
};
pub use result::{SimResult, SimResultData, UnitResult, ViewFilter};
pub use table::{
    CellContent, CellHandle, ColumnSpec, DisplayKind, MetricsTable, RecordSource, RenderContext,
    RenderedCell, RenderedRow, SortPreference, TableConfig, TableError,
};
