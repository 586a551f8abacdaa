use crate::error::CookieError;
use crate::models::codes::CodeTable;
use crate::models::{AppSettings, Column, ColumnVisibility, Theme};
use crate::utils::cookie_jar::CookieStore;

pub const USE_COOKIES_COOKIE: &str = "useCookies";
pub const THEME_COOKIE: &str = "theme";
pub const COLUMNS_COOKIE: &str = "columns";

/// Session preferences, optionally mirrored into a cookie store.
///
/// Cookies are only written while the user has opted in. Opting out deletes
/// every cookie in the store but leaves the in-memory values alone. Any store
/// failure switches the session to in-memory only.
pub struct Preferences<S: CookieStore> {
    settings: AppSettings,
    store: S,
    cookies_available: bool,
}

impl<S: CookieStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let mut preferences = Self { settings: AppSettings::default(), store, cookies_available: true };

        match preferences.read_settings() {
            Ok(Some(settings)) => {
                tracing::info!(theme = settings.theme.display_name(), "restored preferences from cookies");
                preferences.settings = settings;
            }
            Ok(None) => tracing::info!("no cookie opt-in found, using default preferences"),
            Err(e) => {
                tracing::warn!("cookies unavailable: {}. Using in-memory preferences.", e);
                preferences.cookies_available = false;
            }
        }

        preferences
    }

    fn read_settings(&self) -> Result<Option<AppSettings>, CookieError> {
        if self.store.get(USE_COOKIES_COOKIE)?.as_deref() != Some("true") {
            return Ok(None);
        }

        let theme = self
            .store
            .get(THEME_COOKIE)?
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(Theme::from_code)
            .unwrap_or_default();
        let columns = self
            .store
            .get(COLUMNS_COOKIE)?
            .map(|value| ColumnVisibility::from_cookie_value(&value))
            .unwrap_or_default();

        Ok(Some(AppSettings { use_cookies: true, theme, columns }))
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn columns(&self) -> &ColumnVisibility {
        &self.settings.columns
    }

    pub fn use_cookies(&self) -> bool {
        self.settings.use_cookies
    }

    pub fn cookies_available(&self) -> bool {
        self.cookies_available
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist_with(|store| store.set(THEME_COOKIE, &theme.code().to_string()));
    }

    pub fn toggle_column(&mut self, column: Column) {
        self.settings.columns.toggle(column);
        self.persist_columns();
    }

    pub fn reset_columns(&mut self) {
        self.settings.columns = ColumnVisibility::default();
        self.persist_columns();
    }

    pub fn enable_cookies(&mut self) {
        self.settings.use_cookies = true;
        let theme = self.settings.theme.code().to_string();
        let columns = self.settings.columns.to_cookie_value();
        self.persist_with(|store| {
            store.set(USE_COOKIES_COOKIE, "true")?;
            store.set(THEME_COOKIE, &theme)?;
            store.set(COLUMNS_COOKIE, &columns)
        });
        tracing::info!("cookies enabled");
    }

    pub fn disable_cookies(&mut self) {
        self.settings.use_cookies = false;
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to delete cookies: {}", e);
            self.cookies_available = false;
        }
        tracing::info!("cookies disabled");
    }

    fn persist_columns(&mut self) {
        let columns = self.settings.columns.to_cookie_value();
        self.persist_with(|store| store.set(COLUMNS_COOKIE, &columns));
    }

    fn persist_with(&mut self, write: impl FnOnce(&mut S) -> Result<(), CookieError>) {
        if !self.settings.use_cookies || !self.cookies_available {
            return;
        }
        if let Err(e) = write(&mut self.store) {
            tracing::warn!("failed to write cookies: {}. Preferences kept in memory only.", e);
            self.cookies_available = false;
        }
    }
}
