use std::marker::PhantomData;

use crate::filters::grid_filter::{FilterChangedCallback, FilterOption, GridFilter};
use crate::filters::number_filter::{FilterModel, NumberFilter};
use crate::models::codes::CodeTable;
use crate::models::{CastingTime, Column, DisplayRow, Duration, Level, Range, School, Source};

/// Describes which column a checkbox filter applies to, its options, and how
/// to read a row's code for it.
pub trait FilterDimension: 'static {
    const COLUMN: Column;

    /// `(code, label)` pairs in display order.
    fn options() -> Vec<(i64, &'static str)>;

    /// `None` when the row has no code for this column (missing or free text).
    fn row_value(row: &DisplayRow) -> Option<i64>;
}

pub fn table_options<T: CodeTable>() -> Vec<(i64, &'static str)> {
    T::all().iter().map(|variant| (variant.code(), variant.display_name())).collect()
}

/// A checkbox-list filter for one dimension.
pub struct ColumnFilter<D: FilterDimension> {
    state: NumberFilter,
    labels: Vec<(i64, &'static str)>,
    on_change: Option<FilterChangedCallback>,
    _dimension: PhantomData<D>,
}

impl<D: FilterDimension> ColumnFilter<D> {
    pub fn new() -> Self {
        let labels = D::options();
        let state = NumberFilter::new(labels.iter().map(|(code, _)| *code).collect());
        Self { state, labels, on_change: None, _dimension: PhantomData }
    }

    fn notify(&self, changed: bool) {
        if !changed {
            return;
        }
        tracing::debug!(column = D::COLUMN.display_name(), active = self.state.is_active(), "filter changed");
        if let Some(callback) = &self.on_change {
            callback();
        }
    }
}

impl<D: FilterDimension> Default for ColumnFilter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: FilterDimension> GridFilter for ColumnFilter<D> {
    fn column(&self) -> Column {
        D::COLUMN
    }

    fn does_filter_pass(&self, row: &DisplayRow) -> bool {
        self.state.passes(D::row_value(row))
    }

    fn is_filter_active(&self) -> bool {
        self.state.is_active()
    }

    fn get_model(&self) -> Option<FilterModel> {
        self.state.get_model()
    }

    fn set_model(&mut self, model: Option<FilterModel>) {
        let changed = self.state.set_model(model.as_ref());
        self.notify(changed);
    }

    fn set_filter_changed_callback(&mut self, callback: FilterChangedCallback) {
        self.on_change = Some(callback);
    }

    fn options(&self) -> Vec<FilterOption> {
        self.labels
            .iter()
            .map(|(code, label)| FilterOption { code: *code, label: *label, checked: self.state.is_checked(*code) })
            .collect()
    }

    fn toggle(&mut self, code: i64) {
        let changed = self.state.toggle(code);
        self.notify(changed);
    }

    fn select_all(&mut self) {
        let changed = self.state.select_all();
        self.notify(changed);
    }

    fn select_none(&mut self) {
        let changed = self.state.select_none();
        self.notify(changed);
    }
}

pub struct LevelDimension;
pub struct SchoolDimension;
pub struct CastingTimeDimension;
pub struct DurationDimension;
pub struct RangeDimension;
pub struct SourceDimension;

impl FilterDimension for LevelDimension {
    const COLUMN: Column = Column::Level;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<Level>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        Some(row.level)
    }
}

impl FilterDimension for SchoolDimension {
    const COLUMN: Column = Column::School;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<School>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        Some(row.school.code)
    }
}

impl FilterDimension for CastingTimeDimension {
    const COLUMN: Column = Column::CastingTime;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<CastingTime>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        Some(row.casting_time.code)
    }
}

impl FilterDimension for DurationDimension {
    const COLUMN: Column = Column::Duration;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<Duration>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        row.duration.as_ref().and_then(|duration| duration.code())
    }
}

impl FilterDimension for RangeDimension {
    const COLUMN: Column = Column::Range;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<Range>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        row.range.as_ref().and_then(|range| range.code())
    }
}

impl FilterDimension for SourceDimension {
    const COLUMN: Column = Column::Source;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<Source>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        Some(row.source.code)
    }
}

pub type LevelFilter = ColumnFilter<LevelDimension>;
pub type SchoolFilter = ColumnFilter<SchoolDimension>;
pub type CastingTimeFilter = ColumnFilter<CastingTimeDimension>;
pub type DurationFilter = ColumnFilter<DurationDimension>;
pub type RangeFilter = ColumnFilter<RangeDimension>;
pub type SourceFilter = ColumnFilter<SourceDimension>;

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::models::{school_name, CodeOrText, Resolved};

    fn row(school: i64, range: Option<CodeOrText>) -> DisplayRow {
        let mut row = DisplayRow::placeholder("Test");
        row.school = Resolved::new(school, school_name);
        row.range = range;
        row
    }

    #[test]
    fn callback_fires_only_on_change() {
        let calls = Rc::new(Cell::new(0));
        let mut filter = SchoolFilter::new();
        let counter = calls.clone();
        filter.set_filter_changed_callback(Box::new(move || counter.set(counter.get() + 1)));

        filter.select_all();
        assert_eq!(calls.get(), 0);
        filter.toggle(3);
        filter.select_none();
        filter.toggle(99);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn range_text_only_passes_inactive_filter() {
        let mut filter = RangeFilter::new();
        let free_text = row(0, Some(CodeOrText::Text("Special".to_string())));
        let coded = row(0, Some(CodeOrText::Code(5)));
        assert!(filter.does_filter_pass(&free_text));

        filter.toggle(0);
        assert!(!filter.does_filter_pass(&free_text));
        assert!(filter.does_filter_pass(&coded));
    }

    #[test]
    fn options_follow_table_order() {
        let filter = LevelFilter::new();
        let options = filter.options();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0], FilterOption { code: 0, label: "Cantrip", checked: true });
        assert_eq!(filter.column(), Column::Level);
    }

    #[test]
    fn model_restores_through_trait() {
        let mut filter = SchoolFilter::new();
        filter.set_model(Some(FilterModel { value: vec![1, 2] }));
        assert!(filter.is_filter_active());
        assert!(filter.does_filter_pass(&row(2, None)));
        assert!(!filter.does_filter_pass(&row(0, None)));
        assert_eq!(filter.get_model(), Some(FilterModel { value: vec![1, 2] }));

        filter.set_model(None);
        assert!(!filter.is_filter_active());
        assert_eq!(filter.get_model(), None);
    }
}
