use crate::filters::number_filter::FilterModel;
use crate::models::{Column, DisplayRow};

/// Invoked whenever a filter's selection changes, so the host can re-run
/// filtering before the next frame.
pub type FilterChangedCallback = Box<dyn Fn()>;

/// One checkbox in a filter's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub code: i64,
    pub label: &'static str,
    pub checked: bool,
}

/// Contract between the spell grid and a per-column filter.
pub trait GridFilter {
    fn column(&self) -> Column;
    fn does_filter_pass(&self, row: &DisplayRow) -> bool;
    fn is_filter_active(&self) -> bool;
    /// `None` while inactive.
    fn get_model(&self) -> Option<FilterModel>;
    fn set_model(&mut self, model: Option<FilterModel>);
    fn set_filter_changed_callback(&mut self, callback: FilterChangedCallback);

    fn options(&self) -> Vec<FilterOption>;
    fn toggle(&mut self, code: i64);
    fn select_all(&mut self);
    fn select_none(&mut self);
}
