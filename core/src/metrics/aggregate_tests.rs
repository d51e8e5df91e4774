//! Tests for grouping and merging.
//!
//! Covers partition completeness, merge additivity, rate derivation, and
//! the pet-attribution override.

use hashbrown::HashMap;
use simview_types::SpellSchool;

use super::action::{ActionId, ActionRecord};
use super::aggregate::{GroupKey, PetAttribution, group_records, merge_group};

/// Create a minimal record for testing.
fn make_record(action_id: ActionId, damage: f64, casts: f64) -> ActionRecord {
    ActionRecord {
        action_id,
        name: format!("Action {}", action_id.id),
        school: SpellSchool::Physical,
        unit_index: 0,
        target_index: None,
        damage,
        casts,
        hits: casts,
        misses: 0.0,
        dodges: 0.0,
        parries: 0.0,
        blocks: 0.0,
        crits: 0.0,
        swings: casts,
        duration_secs: 60.0,
    }
}

#[test]
fn test_grouping_partitions_exactly() {
    let records = vec![
        make_record(ActionId::new(1), 100.0, 2.0),
        make_record(ActionId::new(2), 50.0, 1.0),
        make_record(ActionId::new(1), 25.0, 1.0),
        make_record(ActionId::new(3), 10.0, 1.0),
    ];
    let total: f64 = records.iter().map(|r| r.damage).sum();

    let groups = group_records(records, GroupKey::Action);

    // Every record appears in exactly one group; union of groups = input.
    assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), 4);
    let grouped_total: f64 = groups.iter().flatten().map(|r| r.damage).sum();
    assert_eq!(grouped_total, total);
    assert!(groups.iter().all(|g| !g.is_empty()));
}

#[test]
fn test_grouping_preserves_insertion_order() {
    let records = vec![
        make_record(ActionId::new(7), 1.0, 1.0),
        make_record(ActionId::new(3), 2.0, 1.0),
        make_record(ActionId::new(7), 3.0, 1.0),
        make_record(ActionId::new(5), 4.0, 1.0),
    ];
    let groups = group_records(records, GroupKey::Action);

    let order: Vec<i64> = groups.iter().map(|g| g[0].action_id.id).collect();
    assert_eq!(order, vec![7, 3, 5]);
    // Within the first group, records keep their arrival order.
    let damages: Vec<f64> = groups[0].iter().map(|r| r.damage).collect();
    assert_eq!(damages, vec![1.0, 3.0]);
}

#[test]
fn test_grouping_empty_input() {
    assert!(group_records(vec![], GroupKey::Action).is_empty());
}

#[test]
fn test_group_key_with_sub_splits_pet_casts() {
    let records = vec![
        make_record(ActionId::new(1), 100.0, 2.0),
        make_record(ActionId::with_sub(1, 9), 50.0, 1.0),
    ];
    let by_action = group_records(records.clone(), GroupKey::Action);
    assert_eq!(by_action.len(), 1);

    let by_sub = group_records(records, GroupKey::ActionWithSub);
    assert_eq!(by_sub.len(), 2);
}

#[test]
fn test_merge_is_additive() {
    let mut a = make_record(ActionId::new(1), 100.0, 2.0);
    a.misses = 1.0;
    a.crits = 2.0;
    a.swings = 5.0;
    let mut b = make_record(ActionId::new(1), 40.0, 3.0);
    b.misses = 2.0;
    b.crits = 1.0;
    b.swings = 5.0;

    let merged = merge_group(&[a, b], true, None);
    assert_eq!(merged.damage, 140.0);
    assert_eq!(merged.casts, 5.0);
    assert_eq!(merged.swings, 10.0);
    // Percentages come from merged totals: 3 misses / 10 swings.
    assert_eq!(merged.miss_pct, 30.0);
    assert_eq!(merged.crit_pct, 30.0);
}

#[test]
fn test_merge_rates_from_merged_totals() {
    // Averaging per-record rates would give (50 + 10) / 2 = 30 per cast;
    // the correct merged rate is 120 / 6 = 20.
    let a = make_record(ActionId::new(1), 100.0, 2.0);
    let b = make_record(ActionId::new(1), 20.0, 4.0);
    let merged = merge_group(&[a, b], true, None);
    assert_eq!(merged.avg_cast, 20.0);
    assert_eq!(merged.dps, 2.0);
}

#[test]
fn test_merge_zero_casts_yields_zero_rate() {
    let record = make_record(ActionId::new(1), 0.0, 0.0);
    let merged = merge_group(&[record], true, None);
    assert_eq!(merged.avg_cast, 0.0);
    assert_eq!(merged.avg_hit, 0.0);
}

#[test]
fn test_merge_zero_swings_yields_zero_percentages() {
    let mut record = make_record(ActionId::new(1), 0.0, 0.0);
    record.swings = 0.0;
    let merged = merge_group(&[record], true, None);
    for p in [
        merged.miss_pct,
        merged.dodge_pct,
        merged.parry_pct,
        merged.block_pct,
        merged.crit_pct,
    ] {
        assert_eq!(p, 0.0);
        assert!(!p.is_nan());
    }
}

#[test]
fn test_merge_identity_rules() {
    let owner = make_record(ActionId::with_sub(1, 9), 10.0, 1.0);

    // Combining across sources drops the sub-id.
    let merged = merge_group(std::slice::from_ref(&owner), true, None);
    assert_eq!(merged.action_id, ActionId::new(1));

    // Without combining, the first element's identity is kept.
    let merged = merge_group(std::slice::from_ref(&owner), false, None);
    assert_eq!(merged.action_id, ActionId::with_sub(1, 9));

    // An explicit override wins over both.
    let merged = merge_group(&[owner], true, Some(42));
    assert_eq!(merged.action_id, ActionId::with_sub(1, 42));
}

#[test]
fn test_merge_takes_name_and_school_from_first() {
    let mut a = make_record(ActionId::new(1), 10.0, 1.0);
    a.name = "Fireball".to_string();
    a.school = SpellSchool::Fire;
    let mut b = make_record(ActionId::new(1), 10.0, 1.0);
    b.name = "Fireball (pet)".to_string();
    b.school = SpellSchool::Shadow;

    let merged = merge_group(&[a, b], true, None);
    assert_eq!(merged.name, "Fireball");
    assert_eq!(merged.school, SpellSchool::Fire);
}

// An owner cast plus a pet-tagged record of the same action merge into one
// row with summed damage and the merged-cast average.
#[test]
fn test_pet_record_folds_into_owner_row() {
    let owner = make_record(ActionId::new(1), 100.0, 2.0);
    let pet = make_record(ActionId::with_sub(1, 77), 50.0, 1.0);

    let groups = group_records(vec![owner, pet], GroupKey::Action);
    assert_eq!(groups.len(), 1);

    let merged = merge_group(&groups[0], true, None);
    assert_eq!(merged.damage, 150.0);
    assert_eq!(merged.avg_cast, 50.0);
}

#[test]
fn test_pet_attribution_none() {
    let group = vec![make_record(ActionId::with_sub(1, 9), 10.0, 1.0)];
    assert_eq!(PetAttribution::None.resolve(&group), None);
}

#[test]
fn test_pet_attribution_first_sub_id() {
    let group = vec![
        make_record(ActionId::new(1), 10.0, 1.0),
        make_record(ActionId::with_sub(1, 9), 5.0, 1.0),
    ];
    assert_eq!(PetAttribution::FirstPetSubId.resolve(&group), Some(9));

    let untagged = vec![make_record(ActionId::new(1), 10.0, 1.0)];
    assert_eq!(PetAttribution::FirstPetSubId.resolve(&untagged), None);
}

#[test]
fn test_pet_attribution_remap() {
    let mut map = HashMap::new();
    map.insert(9, 400);
    let rule = PetAttribution::Remap(map);

    let group = vec![make_record(ActionId::with_sub(1, 9), 5.0, 1.0)];
    assert_eq!(rule.resolve(&group), Some(400));

    let unmapped = vec![make_record(ActionId::with_sub(1, 8), 5.0, 1.0)];
    assert_eq!(rule.resolve(&unmapped), None);
}
