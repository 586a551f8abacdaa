pub mod codes;
pub mod tables;
pub mod spell;
pub mod row;
pub mod columns;
pub mod settings;
pub mod dice;

pub use codes::{CodeTable, UNKNOWN_LABEL, code_to_name};
pub use tables::{
    AreaShape, CastingTime, Duration, Level, Range, School, Source, casting_time_name,
    duration_name, level_name, range_name, school_name, source_name,
};
pub use spell::{CodeOrText, SpellDataset, SpellRecord};
pub use row::{DisplayRow, Resolved, build_row, build_rows};
pub use columns::Column;
pub use settings::{AppSettings, ColumnVisibility, Theme};
