//! Shared display types for SimView.
//!
//! Leaf crate with no heavy dependencies: the damage-school tag used for
//! cell coloring, and the number formatting used by table cells.

pub mod formatting;
mod school;

pub use school::SpellSchool;
