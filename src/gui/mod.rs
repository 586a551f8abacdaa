pub mod app;
pub mod grid;
pub mod helpers;
pub mod table_view;
pub mod settings_panel;
pub mod modal;

pub use app::SpellGridApp;
pub use grid::{CellModal, SortDirection, SortState, SpellGrid, cell_text, compare_rows};
pub use table_view::GridAction;
