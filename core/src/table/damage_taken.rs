//! Damage-taken table: per-action damage a single player received.

use std::cell::RefCell;
use std::rc::Rc;

use simview_types::formatting::{format_decimal, format_pct};
use tracing::trace;

use super::column::{ActionLabel, BarFill, CellContent, ColumnSpec, SortPreference};
use super::controller::{MetricsTable, RecordSource, TableConfig, TableError};
use crate::events::ResultsEmitter;
use crate::metrics::{ActionRecord, PetAttribution};
use crate::result::SimResultData;

/// Record source for a per-player damage-taken table.
///
/// The view must resolve to exactly one player; an ambiguous filter yields
/// an empty record set rather than guessing a subject. The filtered
/// targets' damage actions aimed at that player are re-attributed to the
/// player's index so grouping treats the player as the subject entity.
pub struct DamageTakenSource;

impl RecordSource for DamageTakenSource {
    fn records(&self, data: &SimResultData) -> Vec<ActionRecord> {
        let players = data.result.filtered_players(&data.filter);
        let [player] = players.as_slice() else {
            trace!(players = players.len(), "filter does not resolve to one player");
            return Vec::new();
        };

        data.result
            .filtered_targets(&data.filter)
            .iter()
            .flat_map(|target| target.damage_actions())
            .filter(|action| action.target_index == Some(player.index))
            .map(|action| action.attributed_to(player.index))
            .collect()
    }
}

/// The damage-taken column set: name, total bar, cast/hit counts and
/// averages, avoidance percentages, and the per-second rate carrying the
/// descending sort preference.
pub fn damage_taken_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Name", "Action", |_| 0.0).with_custom(|record, _, cell| {
            cell.content = CellContent::Action(ActionLabel {
                name: record.name.clone(),
                action_id: record.action_id,
            });
        }),
        ColumnSpec::new("Damage Taken", "Total damage taken", |r| r.damage)
            .with_header_class("text-start")
            .with_custom(|record, ctx, cell| {
                cell.class = Some("metric-total".to_string());
                cell.content = CellContent::Bar(BarFill {
                    school: record.school,
                    fraction: ctx.max_value.map_or(0.0, |max| record.damage / max),
                    amount: record.damage,
                });
            }),
        ColumnSpec::new("Casts", "Casts", |r| r.casts)
            .with_display(|r| format_decimal(r.casts, 1)),
        ColumnSpec::new("Avg Cast", "Damage / Casts", |r| r.avg_cast)
            .with_display(|r| format_decimal(r.avg_cast, 1)),
        ColumnSpec::new("Hits", "Hits + Crits + Blocks", |r| r.hits)
            .with_display(|r| format_decimal(r.hits, 1)),
        ColumnSpec::new("Avg Hit", "Damage / (Hits + Crits + Blocks)", |r| r.avg_hit)
            .with_display(|r| format_decimal(r.avg_hit, 1)),
        ColumnSpec::new("Miss %", "Misses / Swings", |r| r.miss_pct)
            .with_display(|r| format_pct(r.miss_pct)),
        ColumnSpec::new("Dodge %", "Dodges / Swings", |r| r.dodge_pct)
            .with_display(|r| format_pct(r.dodge_pct)),
        ColumnSpec::new("Parry %", "Parries / Swings", |r| r.parry_pct)
            .with_display(|r| format_pct(r.parry_pct)),
        ColumnSpec::new("Block %", "Blocks / Swings", |r| r.block_pct)
            .with_display(|r| format_pct(r.block_pct)),
        ColumnSpec::new("Crit %", "Crits / Swings", |r| r.crit_pct)
            .with_display(|r| format_pct(r.crit_pct)),
        ColumnSpec::new("DTPS", "Damage Taken / Encounter Duration", |r| r.dps)
            .with_sort(SortPreference::Descending)
            .with_header_class("text-body")
            .with_column_class("text-success")
            .with_display(|r| format_decimal(r.dps, 1)),
    ]
}

/// Build a fully configured damage-taken table and attach it to the feed.
pub fn damage_taken_table(
    emitter: &mut ResultsEmitter,
) -> Result<Rc<RefCell<MetricsTable>>, TableError> {
    let columns = damage_taken_columns();
    let config = TableConfig {
        combine_across_sources: true,
        pet_attribution: PetAttribution::FirstPetSubId,
        ..TableConfig::from_columns(&columns)
    };
    let table = Rc::new(RefCell::new(MetricsTable::new(
        columns,
        config,
        Box::new(DamageTakenSource),
    )?));
    MetricsTable::attach(&table, emitter);
    Ok(table)
}
