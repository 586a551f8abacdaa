use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type Selection = BTreeSet<i64>;

/// Persisted form of an active checkbox filter: `{ "value": [codes] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterModel {
    pub value: Vec<i64>,
}

/// A filter is active unless every option is selected. "All checked" and
/// "untouched" are the same state.
pub fn is_active(selected: &Selection, full_set_size: usize) -> bool {
    selected.len() != full_set_size
}

/// Inactive filters pass every row, including rows with no value.
pub fn passes(row_value: Option<i64>, selected: &Selection, full_set_size: usize) -> bool {
    if !is_active(selected, full_set_size) {
        return true;
    }
    row_value.is_some_and(|code| selected.contains(&code))
}

pub fn toggle(selected: &Selection, code: i64) -> Selection {
    let mut next = selected.clone();
    if !next.remove(&code) {
        next.insert(code);
    }
    next
}

pub fn serialize(selected: &Selection, full_set_size: usize) -> Option<FilterModel> {
    if !is_active(selected, full_set_size) {
        return None;
    }
    Some(FilterModel { value: selected.iter().copied().collect() })
}

/// A missing model restores the full selection.
pub fn deserialize(model: Option<&FilterModel>, options: &[i64]) -> Selection {
    match model {
        Some(model) => model.value.iter().copied().collect(),
        None => options.iter().copied().collect(),
    }
}

/// Checkbox-list state over a fixed option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFilter {
    options: Vec<i64>,
    selected: Selection,
}

impl NumberFilter {
    /// Starts with every option selected, i.e. inactive.
    pub fn new(options: Vec<i64>) -> Self {
        let selected = options.iter().copied().collect();
        Self { options, selected }
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    pub fn is_active(&self) -> bool {
        is_active(&self.selected, self.options.len())
    }

    pub fn passes(&self, row_value: Option<i64>) -> bool {
        passes(row_value, &self.selected, self.options.len())
    }

    pub fn is_checked(&self, code: i64) -> bool {
        self.selected.contains(&code)
    }

    /// Codes outside the option set are ignored. Returns whether the
    /// selection changed.
    pub fn toggle(&mut self, code: i64) -> bool {
        if !self.options.contains(&code) {
            return false;
        }
        self.selected = toggle(&self.selected, code);
        true
    }

    pub fn select_all(&mut self) -> bool {
        self.replace(self.options.iter().copied().collect())
    }

    pub fn select_none(&mut self) -> bool {
        self.replace(Selection::new())
    }

    pub fn get_model(&self) -> Option<FilterModel> {
        serialize(&self.selected, self.options.len())
    }

    /// Codes outside the option set are dropped so the active check stays
    /// meaningful. Returns whether the selection changed.
    pub fn set_model(&mut self, model: Option<&FilterModel>) -> bool {
        let restored: Selection = deserialize(model, &self.options)
            .into_iter()
            .filter(|code| self.options.contains(code))
            .collect();
        if let Some(model) = model {
            if restored.len() != model.value.len() {
                tracing::warn!(
                    dropped = model.value.len() - restored.len(),
                    "filter model contained unknown codes"
                );
            }
        }
        self.replace(restored)
    }

    fn replace(&mut self, selected: Selection) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        true
    }
}
