use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::CookieError;

const COOKIE_FILE: &str = "cookies.json";

/// Key/value storage for preferences the user opted in to keep.
pub trait CookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError>;
    fn set(&mut self, name: &str, value: &str) -> Result<(), CookieError>;
    fn remove(&mut self, name: &str) -> Result<(), CookieError>;
    fn names(&self) -> Result<Vec<String>, CookieError>;

    /// Deletes every cookie in the store.
    fn clear(&mut self) -> Result<(), CookieError> {
        for name in self.names()? {
            self.remove(&name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryCookieStore {
    cookies: BTreeMap<String, String>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        Ok(self.cookies.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), CookieError> {
        self.cookies.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), CookieError> {
        self.cookies.remove(name);
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, CookieError> {
        Ok(self.cookies.keys().cloned().collect())
    }
}

/// Cookie jar persisted as a flat JSON object. Every call reads or rewrites
/// the whole file.
#[derive(Debug, Clone)]
pub struct FileCookieStore {
    path: PathBuf,
}

impl Default for FileCookieStore {
    fn default() -> Self {
        Self::new(PathBuf::from(COOKIE_FILE))
    }
}

impl FileCookieStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CookieError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, cookies: &BTreeMap<String, String>) -> Result<(), CookieError> {
        let json_content = serde_json::to_string_pretty(cookies)?;
        let mut file = fs::File::create(&self.path)?;
        file.write_all(json_content.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %self.path.display(), count = cookies.len(), "saved cookie jar");
        Ok(())
    }
}

impl CookieStore for FileCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        Ok(self.load()?.remove(name))
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), CookieError> {
        let mut cookies = self.load()?;
        cookies.insert(name.to_string(), value.to_string());
        self.save(&cookies)
    }

    fn remove(&mut self, name: &str) -> Result<(), CookieError> {
        let mut cookies = self.load()?;
        if cookies.remove(name).is_some() {
            self.save(&cookies)?;
        }
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, CookieError> {
        Ok(self.load()?.into_keys().collect())
    }

    fn clear(&mut self) -> Result<(), CookieError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
