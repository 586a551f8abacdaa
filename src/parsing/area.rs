use std::cmp::Ordering;

use crate::models::AreaShape;
use crate::parsing::regex::RE_AREA;

const FEET_PER_MILE: u32 = 5280;

/// Structured reading of an area string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArea {
    /// `size` is in feet.
    Parsed { shape: AreaShape, size: u32 },
    /// Text that carries no recognizable shape and size, kept verbatim.
    Unparsed(String),
}

impl ParsedArea {
    /// Filter bucket for this area; unparsed text goes to `Other`.
    pub fn shape(&self) -> AreaShape {
        match self {
            ParsedArea::Parsed { shape, .. } => *shape,
            ParsedArea::Unparsed(_) => AreaShape::Other,
        }
    }
}

pub fn parse_area(text: &str) -> ParsedArea {
    let Some(caps) = RE_AREA.captures(text) else {
        return ParsedArea::Unparsed(text.to_string());
    };

    let Ok(amount) = caps["size"].parse::<u32>() else {
        return ParsedArea::Unparsed(text.to_string());
    };

    let size = if caps["unit"].to_lowercase().starts_with("mile") {
        amount.saturating_mul(FEET_PER_MILE)
    } else {
        amount
    };

    let shape = match caps["shape"].to_lowercase().as_str() {
        "cone" => AreaShape::Cone,
        "cube" => AreaShape::Cube,
        "cylinder" => AreaShape::Cylinder,
        "line" => AreaShape::Line,
        "radius" => AreaShape::Radius,
        "sphere" => AreaShape::Sphere,
        "square" => AreaShape::Square,
        "wall" => AreaShape::Wall,
        "circle" => AreaShape::Circle,
        _ => return ParsedArea::Unparsed(text.to_string()),
    };

    ParsedArea::Parsed { shape, size }
}

/// Parsed areas first by size ascending, then unparsed ones; ties fall back
/// to the original text so the order is total.
pub fn area_comparator(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Same as [`area_comparator`], with missing areas after everything else.
pub fn compare_optional_areas(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => area_comparator(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_key(text: &str) -> (bool, u32, &str) {
    match parse_area(text) {
        ParsedArea::Parsed { size, .. } => (false, size, text),
        ParsedArea::Unparsed(_) => (true, 0, text),
    }
}
