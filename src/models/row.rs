use crate::models::spell::{CodeOrText, SpellRecord};
use crate::models::tables::{casting_time_name, school_name, source_name};

/// A code together with the label it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub code: i64,
    pub name: &'static str,
}

impl Resolved {
    pub fn new(code: i64, lookup: fn(i64) -> &'static str) -> Self {
        Self { code, name: lookup(code) }
    }
}

/// A spell ready for the grid. Identity is the name; duplicates are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub name: String,
    pub level: i64,
    pub school: Resolved,
    pub casting_time: Resolved,
    pub duration: Option<CodeOrText>,
    pub range: Option<CodeOrText>,
    pub area: Option<String>,
    pub attack: Option<String>,
    pub save: Option<String>,
    pub damage_and_effect: Option<String>,
    pub ritual: Option<bool>,
    pub concentration: Option<bool>,
    pub verbal: Option<bool>,
    pub somatic: Option<bool>,
    pub material: Option<String>,
    pub source: Resolved,
    pub details: Option<String>,
    pub link: Option<String>,
}

/// Resolves the school, casting time and source codes and copies every other
/// field verbatim. Absent optional fields stay absent.
pub fn build_row(raw: &SpellRecord) -> DisplayRow {
    DisplayRow {
        name: raw.name.clone(),
        level: raw.level,
        school: Resolved::new(raw.school, school_name),
        casting_time: Resolved::new(raw.casting_time, casting_time_name),
        duration: raw.duration.clone(),
        range: raw.range.clone(),
        area: raw.area.clone(),
        attack: raw.attack.clone(),
        save: raw.save.clone(),
        damage_and_effect: raw.damage_and_effect.clone(),
        ritual: raw.ritual,
        concentration: raw.concentration,
        verbal: raw.verbal,
        somatic: raw.somatic,
        material: raw.material.clone(),
        source: Resolved::new(raw.source, source_name),
        details: raw.details.clone(),
        link: raw.link.clone(),
    }
}

#[cfg(test)]
impl DisplayRow {
    /// A row with only a name and every code at zero.
    pub fn placeholder(name: &str) -> Self {
        build_row(&SpellRecord {
            name: name.to_string(),
            level: 0,
            school: 0,
            casting_time: 0,
            duration: None,
            range: None,
            area: None,
            attack: None,
            save: None,
            damage_and_effect: None,
            ritual: None,
            concentration: None,
            verbal: None,
            somatic: None,
            material: None,
            source: 0,
            details: None,
            link: None,
        })
    }
}

pub fn build_rows(spells: &[SpellRecord]) -> Vec<DisplayRow> {
    spells.iter().map(build_row).collect()
}
