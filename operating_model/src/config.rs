//! Configuration file support for the widget.
//!
//! Loads an optional TOML file such as:
//!
//! ```toml
//! title = "Consult Operating Model Horizon 1:"
//! tagline = "Run and transform with clear accountability in each country"
//! scroll_step = 300
//! item_min_width = 200
//!
//! [placeholders]
//! global_leader = "TBD"
//! key_contacts = "Region Leaders TBA"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::scroll::DEFAULT_SCROLL_STEP;

/// Presentation settings for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Heading shown above the model
    pub title: String,
    /// Highlighted line next to the heading
    pub tagline: String,
    /// Pixels moved by one scroll button press
    pub scroll_step: i32,
    /// Minimum item cell width in the reflowing grid, in pixels
    pub item_min_width: u32,
    /// Static texts in the detail modal
    pub placeholders: Placeholders,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Consult Operating Model Horizon 1:".into(),
            tagline: "Run and transform with clear accountability in each country".into(),
            scroll_step: DEFAULT_SCROLL_STEP,
            item_min_width: 200,
            placeholders: Placeholders::default(),
        }
    }
}

/// Leadership fields of the detail modal. These are not derived from items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub global_leader: String,
    pub key_contacts: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            global_leader: "TBD".into(),
            key_contacts: "Region Leaders TBA".into(),
        }
    }
}

impl WidgetConfig {
    /// Parse a TOML document. `origin` is only used in error messages.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ModelError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no widget config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// CSS `grid-template-columns` value for item grids.
    pub fn grid_template(&self) -> String {
        format!(
            "grid-template-columns: repeat(auto-fill, minmax({}px, 1fr))",
            self.item_min_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.scroll_step, 300);
        assert_eq!(config.item_min_width, 200);
        assert_eq!(config.placeholders.global_leader, "TBD");
        assert_eq!(config.placeholders.key_contacts, "Region Leaders TBA");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = WidgetConfig::load_from_path(&temp.path().join("widget.toml"))
            .expect("missing file falls back to defaults");
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("widget.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
scroll_step = 120

[placeholders]
global_leader = "A. Person"
"#
        )
        .expect("write config");

        let config = WidgetConfig::load_from_path(&config_path).expect("load config");
        assert_eq!(config.scroll_step, 120);
        assert_eq!(config.placeholders.global_leader, "A. Person");
        // untouched fields keep their defaults
        assert_eq!(config.placeholders.key_contacts, "Region Leaders TBA");
        assert_eq!(config.title, WidgetConfig::default().title);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = WidgetConfig::from_toml("scroll_step = \"far\"", Path::new("widget.toml"))
            .unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse widget.toml"));
    }

    #[test]
    fn test_grid_template_uses_min_width() {
        let config = WidgetConfig {
            item_min_width: 180,
            ..Default::default()
        };
        assert_eq!(
            config.grid_template(),
            "grid-template-columns: repeat(auto-fill, minmax(180px, 1fr))"
        );
    }
}
