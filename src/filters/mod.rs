pub mod number_filter;
pub mod grid_filter;
pub mod column_filter;
pub mod area_filter;

pub use number_filter::{FilterModel, NumberFilter, Selection};
pub use grid_filter::{FilterChangedCallback, FilterOption, GridFilter};
pub use column_filter::{
    CastingTimeFilter, ColumnFilter, DurationFilter, FilterDimension, LevelFilter, RangeFilter,
    SchoolFilter, SourceFilter,
};
pub use area_filter::AreaFilter;

use crate::models::Column;

/// The filter attached to a column, if it has one.
pub fn filter_for_column(column: Column) -> Option<Box<dyn GridFilter>> {
    let filter: Box<dyn GridFilter> = match column {
        Column::Level => Box::new(LevelFilter::new()),
        Column::School => Box::new(SchoolFilter::new()),
        Column::CastingTime => Box::new(CastingTimeFilter::new()),
        Column::Duration => Box::new(DurationFilter::new()),
        Column::Range => Box::new(RangeFilter::new()),
        Column::Area => Box::new(AreaFilter::new()),
        Column::Source => Box::new(SourceFilter::new()),
        _ => return None,
    };
    Some(filter)
}
