use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::filters::{filter_for_column, FilterModel, GridFilter};
use crate::models::codes::CodeTable;
use crate::models::{duration_name, level_name, range_name, CodeOrText, Column, DisplayRow};
use crate::parsing::compare_optional_areas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// Text shown for a cell whose full content opens in a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellModal {
    pub title: String,
    pub text: String,
}

/// Holds the full row set and the per-column filters, and keeps the list of
/// visible row indices (filtered, then sorted) up to date.
pub struct SpellGrid {
    rows: Vec<DisplayRow>,
    filters: Vec<Box<dyn GridFilter>>,
    /// Bumped by every filter's change callback
    filter_generation: Rc<Cell<u64>>,
    applied_generation: Option<u64>,
    sort: Option<SortState>,
    sort_dirty: bool,
    visible: Vec<usize>,
    selected_rows: BTreeSet<usize>,
}

impl SpellGrid {
    pub fn new(rows: Vec<DisplayRow>) -> Self {
        let filter_generation = Rc::new(Cell::new(0));
        let filters = Column::all()
            .iter()
            .filter_map(|column| filter_for_column(*column))
            .map(|mut filter| {
                let generation = filter_generation.clone();
                filter.set_filter_changed_callback(Box::new(move || generation.set(generation.get() + 1)));
                filter
            })
            .collect();

        let mut grid = Self {
            rows,
            filters,
            filter_generation,
            applied_generation: None,
            sort: None,
            sort_dirty: false,
            visible: Vec::new(),
            selected_rows: BTreeSet::new(),
        };
        grid.refresh();
        grid
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DisplayRow> {
        self.rows.get(index)
    }

    pub fn filter(&self, column: Column) -> Option<&dyn GridFilter> {
        self.filters.iter().find(|filter| filter.column() == column).map(|filter| &**filter)
    }

    pub fn filter_mut(&mut self, column: Column) -> Option<&mut dyn GridFilter> {
        match self.filters.iter_mut().find(|filter| filter.column() == column) {
            Some(filter) => Some(&mut **filter),
            None => None,
        }
    }

    pub fn is_any_filter_active(&self) -> bool {
        self.filters.iter().any(|filter| filter.is_filter_active())
    }

    /// Models of the active filters only.
    pub fn filter_models(&self) -> BTreeMap<Column, FilterModel> {
        self.filters
            .iter()
            .filter_map(|filter| filter.get_model().map(|model| (filter.column(), model)))
            .collect()
    }

    /// Columns missing from `models` are reset to inactive.
    pub fn set_filter_models(&mut self, mut models: BTreeMap<Column, FilterModel>) {
        for filter in &mut self.filters {
            let model = models.remove(&filter.column());
            filter.set_model(model);
        }
        self.refresh();
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
        self.sort_dirty = true;
        self.refresh();
    }

    /// Unsorted, ascending, descending, then back to unsorted.
    pub fn cycle_sort(&mut self, column: Column) {
        let next = match self.sort {
            Some(SortState { column: current, direction: SortDirection::Ascending }) if current == column => {
                Some(SortState { column, direction: SortDirection::Descending })
            }
            Some(SortState { column: current, direction: SortDirection::Descending }) if current == column => None,
            _ => Some(SortState { column, direction: SortDirection::Ascending }),
        };
        self.set_sort(next);
    }

    /// Visible row indices after filtering and sorting.
    pub fn visible_rows(&mut self) -> &[usize] {
        self.refresh();
        &self.visible
    }

    /// Re-runs filtering if any filter changed since the last run.
    pub fn refresh(&mut self) {
        let generation = self.filter_generation.get();
        if self.applied_generation == Some(generation) && !self.sort_dirty {
            return;
        }

        let mut visible: Vec<usize> = (0..self.rows.len())
            .filter(|index| {
                let row = &self.rows[*index];
                self.filters.iter().all(|filter| filter.does_filter_pass(row))
            })
            .collect();

        if let Some(sort) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = compare_rows(sort.column, &self.rows[*a], &self.rows[*b]);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        tracing::debug!(visible = visible.len(), total = self.rows.len(), "grid refreshed");
        self.visible = visible;
        self.applied_generation = Some(generation);
        self.sort_dirty = false;
    }

    pub fn toggle_row_selection(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        if !self.selected_rows.remove(&index) {
            self.selected_rows.insert(index);
        }
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selected_rows.contains(&index)
    }

    pub fn selected_rows(&self) -> &BTreeSet<usize> {
        &self.selected_rows
    }

    /// Modal content for a clicked cell, when the column has long text and
    /// the row has some.
    pub fn modal_for_cell(&self, index: usize, column: Column) -> Option<CellModal> {
        let row = self.rows.get(index)?;
        let text = match column {
            Column::Material => row.material.as_deref(),
            Column::Details => row.details.as_deref(),
            _ => None,
        }?;
        if text.is_empty() {
            return None;
        }
        Some(CellModal { title: column.display_name().to_string(), text: text.to_string() })
    }
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => String::new(),
    }
}

/// Display text of one cell.
pub fn cell_text(row: &DisplayRow, column: Column) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    match column {
        Column::Name => row.name.clone(),
        Column::Level => level_name(row.level).to_string(),
        Column::School => row.school.name.to_string(),
        Column::CastingTime => row.casting_time.name.to_string(),
        Column::Duration => row.duration.as_ref().map(|d| d.display_with(duration_name)).unwrap_or_default(),
        Column::Range => row.range.as_ref().map(|r| r.display_with(range_name)).unwrap_or_default(),
        Column::Area => text(&row.area),
        Column::Attack => text(&row.attack),
        Column::Save => text(&row.save),
        Column::DamageAndEffect => text(&row.damage_and_effect),
        Column::Ritual => yes_no(row.ritual),
        Column::Concentration => yes_no(row.concentration),
        Column::Verbal => yes_no(row.verbal),
        Column::Somatic => yes_no(row.somatic),
        Column::Material => text(&row.material),
        Column::Source => row.source.name.to_string(),
        Column::Details => text(&row.details),
    }
}

/// Coded values in code order, then free text, then missing.
fn compare_code_or_text(a: &Option<CodeOrText>, b: &Option<CodeOrText>) -> Ordering {
    fn key(value: &Option<CodeOrText>) -> (u8, i64, &str) {
        match value {
            Some(CodeOrText::Code(code)) => (0, *code, ""),
            Some(CodeOrText::Text(text)) => (1, 0, text.as_str()),
            None => (2, 0, ""),
        }
    }
    key(a).cmp(&key(b))
}

/// School and Source compare by name; other coded columns by code.
pub fn compare_rows(column: Column, a: &DisplayRow, b: &DisplayRow) -> Ordering {
    match column {
        Column::Name => a.name.cmp(&b.name),
        Column::Level => a.level.cmp(&b.level),
        Column::School => a.school.name.cmp(b.school.name).then(a.school.code.cmp(&b.school.code)),
        Column::CastingTime => a.casting_time.code.cmp(&b.casting_time.code),
        Column::Duration => compare_code_or_text(&a.duration, &b.duration),
        Column::Range => compare_code_or_text(&a.range, &b.range),
        Column::Area => compare_optional_areas(a.area.as_deref(), b.area.as_deref()),
        Column::Attack => a.attack.cmp(&b.attack),
        Column::Save => a.save.cmp(&b.save),
        Column::DamageAndEffect => a.damage_and_effect.cmp(&b.damage_and_effect),
        Column::Ritual => a.ritual.cmp(&b.ritual),
        Column::Concentration => a.concentration.cmp(&b.concentration),
        Column::Verbal => a.verbal.cmp(&b.verbal),
        Column::Somatic => a.somatic.cmp(&b.somatic),
        Column::Material => a.material.cmp(&b.material),
        Column::Source => a.source.name.cmp(b.source.name).then(a.source.code.cmp(&b.source.code)),
        Column::Details => a.details.cmp(&b.details),
    }
}
