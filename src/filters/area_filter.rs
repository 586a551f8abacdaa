use crate::filters::column_filter::{table_options, ColumnFilter, FilterDimension};
use crate::models::codes::CodeTable;
use crate::models::{AreaShape, Column, DisplayRow};
use crate::parsing::parse_area;

/// Filters on the shape bucket of the parsed area text. Text without a
/// recognizable shape falls in `Other`; rows without an area have no code.
pub struct AreaDimension;

impl FilterDimension for AreaDimension {
    const COLUMN: Column = Column::Area;

    fn options() -> Vec<(i64, &'static str)> {
        table_options::<AreaShape>()
    }

    fn row_value(row: &DisplayRow) -> Option<i64> {
        row.area.as_deref().map(|area| parse_area(area).shape().code())
    }
}

pub type AreaFilter = ColumnFilter<AreaDimension>;
