//! Per-action metric records and their aggregation.
//!
//! This module provides:
//! - **Records**: raw per-target measurements produced by the simulation engine
//! - **Aggregation**: grouping records by logical action identity and merging
//!   each group into one render-ready row
//! - **Scaling**: the relative-to-maximum normalization used by bar cells

mod action;
mod aggregate;
mod scale;

#[cfg(test)]
mod aggregate_tests;

pub use action::{ActionId, ActionRecord};
pub use aggregate::{ActionAggregate, GroupKey, PetAttribution, group_records, merge_group};
pub use scale::max_of;
