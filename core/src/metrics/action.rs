//! Raw per-action measurement records.
//!
//! Records are produced by the simulation engine and are read-only to the
//! table core. Measurement counts are `f64` because the engine averages
//! across iterations, so fractional casts and hits are legal values.

use serde::{Deserialize, Serialize};
use simview_types::SpellSchool;

/// Identity of one logical action: the base action id plus an optional
/// sub-actor id distinguishing e.g. pet casts from owner casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId {
    pub id: i64,
    pub sub_id: Option<i64>,
}

impl ActionId {
    pub fn new(id: i64) -> Self {
        Self { id, sub_id: None }
    }

    pub fn with_sub(id: i64, sub_id: i64) -> Self {
        Self { id, sub_id: Some(sub_id) }
    }

    /// The same identity with the sub-actor component dropped.
    pub fn without_sub(self) -> Self {
        Self { id: self.id, sub_id: None }
    }
}

/// One per-target measurement for a single action.
///
/// Immutable once produced by the simulation layer. All additive
/// measurement fields are summed verbatim when records are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action_id: ActionId,
    pub name: String,
    /// Damage school, used only for display coloring.
    pub school: SpellSchool,
    /// Index of the actor this record is attributed to.
    pub unit_index: usize,
    /// Index of the actor on the receiving end, if the measurement is
    /// broken down per target.
    pub target_index: Option<usize>,

    pub damage: f64,
    pub casts: f64,
    pub hits: f64,
    pub misses: f64,
    pub dodges: f64,
    pub parries: f64,
    pub blocks: f64,
    pub crits: f64,
    pub swings: f64,

    /// Encounter duration context for rate derivation.
    pub duration_secs: f64,
}

impl ActionRecord {
    /// Re-attribute this record to a specified actor index.
    ///
    /// Used when contributions that originated from a sub-actor (or were
    /// recorded against an opponent) should be reported under a different
    /// subject entity. Measurements are unchanged.
    pub fn attributed_to(&self, unit_index: usize) -> ActionRecord {
        ActionRecord { unit_index, ..self.clone() }
    }
}
