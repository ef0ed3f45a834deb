//! String lookup for user-visible text

use rustc_hash::FxHashMap;

/// Key for the search box placeholder
pub const SEARCH_BOX_KEY: &str = "gui.search_box";

/// Resolves a translation key to display text
pub trait Localizer {
    fn get(&self, key: &str) -> String;
}

/// In-memory translation table. Unknown keys resolve to themselves.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    entries: FxHashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// English defaults for the keys panelkit uses
    pub fn english() -> Self {
        Self::new().with(SEARCH_BOX_KEY, "Search...")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Localizer for Translations {
    fn get(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::trace!(key, "missing translation");
                key.to_string()
            }
        }
    }
}
