//! Grouping and merging of raw records into aggregate rows.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use simview_types::SpellSchool;

use super::action::{ActionId, ActionRecord};

/// Merged view over a set of records sharing one logical action identity.
///
/// Constructed fresh on every render cycle and never mutated afterward.
/// Derived rates are computed from the merged totals, never by averaging
/// per-record rates.
#[derive(Debug, Clone)]
pub struct ActionAggregate {
    pub action_id: ActionId,
    pub name: String,
    pub school: SpellSchool,

    pub damage: f64,
    pub casts: f64,
    pub hits: f64,
    pub swings: f64,

    /// Damage / encounter duration.
    pub dps: f64,
    /// Damage / casts (0 when there are no casts).
    pub avg_cast: f64,
    /// Damage / hits (0 when nothing landed).
    pub avg_hit: f64,

    // Percentage breakdowns, each count / swings on the 0-100 scale.
    // A zero-swing group reports 0 for all of them.
    pub miss_pct: f64,
    pub dodge_pct: f64,
    pub parry_pct: f64,
    pub block_pct: f64,
    pub crit_pct: f64,
}

/// How the grouping key treats the sub-actor id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    /// Group by base action id only; sub-actor contributions fold into the
    /// owner's row. This is what the shipped tables use.
    #[default]
    Action,
    /// Additionally distinguish sub-actor ids, so a pet's casts form their
    /// own group.
    ActionWithSub,
}

/// Partition records by logical action identity.
///
/// Group order is insertion order of first appearance; record order within
/// a group is insertion order. Empty input yields empty output, and every
/// group in the output is non-empty.
pub fn group_records(records: Vec<ActionRecord>, key: GroupKey) -> Vec<Vec<ActionRecord>> {
    let mut index: HashMap<ActionId, usize> = HashMap::new();
    let mut groups: Vec<Vec<ActionRecord>> = Vec::new();

    for record in records {
        let group_id = match key {
            GroupKey::Action => record.action_id.without_sub(),
            GroupKey::ActionWithSub => record.action_id,
        };
        match index.get(&group_id) {
            Some(&i) => groups[i].push(record),
            None => {
                index.insert(group_id, groups.len());
                groups.push(vec![record]);
            }
        }
    }
    groups
}

/// Merge one group of records into an aggregate row.
///
/// Sums all additive measurements, takes name and school from the first
/// element, and derives rates from the merged totals. The reported identity
/// is `override_sub_id` when supplied; otherwise the first element's
/// identity, with the sub-id dropped when `combine_across_sources` is set.
///
/// Precondition: `group` is non-empty. The grouping stage guarantees this
/// for its output; callers constructing groups by hand must do the same.
pub fn merge_group(
    group: &[ActionRecord],
    combine_across_sources: bool,
    override_sub_id: Option<i64>,
) -> ActionAggregate {
    debug_assert!(!group.is_empty(), "merge_group requires a non-empty group");
    let first = &group[0];

    let mut damage = 0.0;
    let mut casts = 0.0;
    let mut hits = 0.0;
    let mut misses = 0.0;
    let mut dodges = 0.0;
    let mut parries = 0.0;
    let mut blocks = 0.0;
    let mut crits = 0.0;
    let mut swings = 0.0;
    for r in group {
        damage += r.damage;
        casts += r.casts;
        hits += r.hits;
        misses += r.misses;
        dodges += r.dodges;
        parries += r.parries;
        blocks += r.blocks;
        crits += r.crits;
        swings += r.swings;
    }

    let action_id = match override_sub_id {
        Some(sub) => ActionId::with_sub(first.action_id.id, sub),
        None if combine_across_sources => first.action_id.without_sub(),
        None => first.action_id,
    };

    ActionAggregate {
        action_id,
        name: first.name.clone(),
        school: first.school,
        damage,
        casts,
        hits,
        swings,
        dps: ratio(damage, first.duration_secs),
        avg_cast: ratio(damage, casts),
        avg_hit: ratio(damage, hits),
        miss_pct: pct(misses, swings),
        dodge_pct: pct(dodges, swings),
        parry_pct: pct(parries, swings),
        block_pct: pct(blocks, swings),
        crit_pct: pct(crits, swings),
    }
}

/// Rule for choosing the reported sub-actor identity of a merged group.
///
/// The underlying intent is to distinguish pet-sourced vs. owner-sourced
/// contributions under one display row; the exact identity-selection rule
/// is configuration, not hard-coded pet detection.
#[derive(Debug, Clone, Default)]
pub enum PetAttribution {
    /// Keep the identity produced by the merge itself.
    #[default]
    None,
    /// Report the group under the first sub-actor id found in it.
    FirstPetSubId,
    /// Map specific sub-actor ids to reporting ids; groups whose first
    /// sub-id is absent from the map keep the merge's own identity.
    Remap(HashMap<i64, i64>),
}

impl PetAttribution {
    /// Resolve the sub-id override for one group, fed to [`merge_group`].
    pub fn resolve(&self, group: &[ActionRecord]) -> Option<i64> {
        let first_sub = group.iter().find_map(|r| r.action_id.sub_id);
        match self {
            PetAttribution::None => None,
            PetAttribution::FirstPetSubId => first_sub,
            PetAttribution::Remap(map) => first_sub.and_then(|sub| map.get(&sub).copied()),
        }
    }
}

fn ratio(amount: f64, denom: f64) -> f64 {
    if denom > 0.0 { amount / denom } else { 0.0 }
}

fn pct(count: f64, swings: f64) -> f64 {
    ratio(count, swings) * 100.0
}
