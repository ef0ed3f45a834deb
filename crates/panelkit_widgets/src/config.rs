//! Button list screen configuration
//!
//! Screens can be configured from a TOML file. Every field is optional:
//!
//! ```toml
//! title = "Recipes"
//! search_box = true
//! scrollbar_width = 16
//! gutter = 6
//! scroll_step = 20
//! can_always_scroll = true
//!
//! [border]
//! horizontal = 4
//! vertical = 2
//! spacing = 1
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scroll_bar::DEFAULT_SCROLL_STEP;

/// Spacing around and between the buttons of a list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Left and right inset of each button inside the panel
    pub horizontal: i32,
    /// Gap above the first and below the last button
    pub vertical: i32,
    /// Gap between consecutive buttons
    pub spacing: i32,
}

/// Configuration for a [`ButtonListScreen`](crate::button_list::ButtonListScreen)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListScreenConfig {
    pub title: String,
    pub search_box: bool,
    pub scrollbar_width: i32,
    /// Margin between the screen edge, the panel and the scroll bar
    pub gutter: i32,
    pub scroll_step: i32,
    pub can_always_scroll: bool,
    pub border: BorderConfig,
}

impl Default for ListScreenConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            search_box: false,
            scrollbar_width: 16,
            gutter: 6,
            scroll_step: DEFAULT_SCROLL_STEP,
            can_always_scroll: true,
            border: BorderConfig::default(),
        }
    }
}

impl ListScreenConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded list screen config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scrollbar_width", self.scrollbar_width),
            ("scroll_step", self.scroll_step),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be positive, got {value}"),
                });
            }
        }

        let non_negative = [
            ("gutter", self.gutter),
            ("border.horizontal", self.border.horizontal),
            ("border.vertical", self.border.vertical),
            ("border.spacing", self.border.spacing),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must not be negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}
