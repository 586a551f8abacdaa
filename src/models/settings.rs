use std::collections::BTreeSet;

use crate::models::codes::{code_table, CodeTable};
use crate::models::columns::Column;

code_table! {
    #[derive(Default)]
    pub enum Theme {
        #[default]
        Light = 0 => "Light",
        Dark = 1 => "Dark",
    }
}

/// The set of columns currently shown. Starts with every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    shown: BTreeSet<Column>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self { shown: Column::all().iter().copied().collect() }
    }
}

impl ColumnVisibility {
    pub fn is_shown(&self, column: Column) -> bool {
        self.shown.contains(&column)
    }

    pub fn toggle(&mut self, column: Column) {
        if !self.shown.remove(&column) {
            self.shown.insert(column);
        }
    }

    /// Shown columns in grid order.
    pub fn shown(&self) -> Vec<Column> {
        self.shown.iter().copied().collect()
    }

    /// Comma-separated column codes, as stored in the `columns` cookie.
    pub fn to_cookie_value(&self) -> String {
        self.shown
            .iter()
            .map(|column| column.code().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Unknown or malformed entries are skipped.
    pub fn from_cookie_value(value: &str) -> Self {
        let shown = value
            .split(',')
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .filter_map(Column::from_code)
            .collect();
        Self { shown }
    }
}

/// User preferences held for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// Whether the user opted in to persisting preferences in cookies
    pub use_cookies: bool,
    pub theme: Theme,
    pub columns: ColumnVisibility,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_shown_by_default() {
        let columns = ColumnVisibility::default();
        assert_eq!(columns.shown().len(), Column::all().len());
        assert!(columns.is_shown(Column::Details));
    }

    #[test]
    fn toggle_hides_then_shows() {
        let mut columns = ColumnVisibility::default();
        columns.toggle(Column::Area);
        assert!(!columns.is_shown(Column::Area));
        columns.toggle(Column::Area);
        assert_eq!(columns, ColumnVisibility::default());
    }

    #[test]
    fn cookie_value_skips_garbage() {
        let columns = ColumnVisibility::from_cookie_value("0, 2,x,99,16");
        assert_eq!(columns.shown(), vec![Column::Name, Column::School, Column::Details]);
        assert_eq!(columns.to_cookie_value(), "0,2,16");
    }

    #[test]
    fn light_theme_is_default() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(AppSettings::default().theme.code(), 0);
    }
}
