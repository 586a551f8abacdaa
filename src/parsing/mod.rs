pub mod regex;
pub mod area;

pub use area::{ParsedArea, parse_area, area_comparator, compare_optional_areas};
