//! Damage-school tag.

use serde::{Deserialize, Serialize};

/// The school of a damaging action. Used only for display coloring of
/// bar cells; it never participates in grouping or sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSchool {
    #[default]
    Physical,
    Arcane,
    Fire,
    Frost,
    Holy,
    Nature,
    Shadow,
}

impl SpellSchool {
    /// Human-readable school name for tooltips and legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            SpellSchool::Physical => "Physical",
            SpellSchool::Arcane => "Arcane",
            SpellSchool::Fire => "Fire",
            SpellSchool::Frost => "Frost",
            SpellSchool::Holy => "Holy",
            SpellSchool::Nature => "Nature",
            SpellSchool::Shadow => "Shadow",
        }
    }
}
