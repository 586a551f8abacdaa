pub mod error;
pub mod models;
pub mod parsing;
pub mod filters;
pub mod utils;
pub mod gui;

pub use error::{CookieError, DatasetError};
pub use models::{build_row, DisplayRow, SpellRecord};
pub use gui::{SpellGrid, SpellGridApp};
pub use utils::{load_bundled_spells, Preferences};

#[cfg(test)]
mod test;
