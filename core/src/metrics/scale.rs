//! Relative-magnitude scaling for bar cells.

/// Maximum of `value(row)` over all rows, or `None` for an empty row set.
///
/// Returning `None` rather than negative infinity keeps consumers that
/// divide by the maximum honest about the empty case. The result is
/// filter-dependent and must be recomputed whenever the row set changes.
pub fn max_of<T>(rows: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    rows.iter().map(value).reduce(f64::max)
}
