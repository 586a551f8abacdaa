pub mod cookie_jar;
pub mod preferences;
pub mod dataset;

pub use cookie_jar::{CookieStore, FileCookieStore, MemoryCookieStore};
pub use preferences::{Preferences, COLUMNS_COOKIE, THEME_COOKIE, USE_COOKIES_COOKIE};
pub use dataset::{load_bundled_spells, parse_spell_dataset};
