//! Session configuration
//!
//! Loaded from RON; every field is optional and falls back to its default.
//!
//! ```ron
//! (
//!     show_stale_element_indicator: false,
//!     default_width: 900,
//! )
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default element width handed to renderers
pub const DEFAULT_WIDTH: u16 = 700;

/// How a session presents its report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fade out elements from a superseded run
    ///
    /// Turned off when viewing a shared, static report.
    pub show_stale_element_indicator: bool,
    /// Disable interactive controls while not connected to the backend
    pub disable_widgets_when_disconnected: bool,
    /// Width handed to renderers
    pub default_width: u16,
}

impl SessionConfig {
    /// Parse a configuration from a RON string
    ///
    /// # Example
    ///
    /// ```
    /// use reportview_session::SessionConfig;
    ///
    /// let config = SessionConfig::from_ron("(default_width: 900)").unwrap();
    /// assert_eq!(config.default_width, 900);
    /// assert!(config.show_stale_element_indicator);
    /// ```
    pub fn from_ron(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Load a configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_stale_element_indicator: true,
            disable_widgets_when_disconnected: true,
            default_width: DEFAULT_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(config.show_stale_element_indicator);
        assert!(config.disable_widgets_when_disconnected);
        assert_eq!(config.default_width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = SessionConfig::from_ron("(show_stale_element_indicator: false)").unwrap();
        assert!(!config.show_stale_element_indicator);
        assert!(config.disable_widgets_when_disconnected);
        assert_eq!(config.default_width, DEFAULT_WIDTH);

        assert_eq!(SessionConfig::from_ron("()").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_invalid_ron() {
        let err = SessionConfig::from_ron("(default_width: \"wide\")").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(default_width: 320, disable_widgets_when_disconnected: false)").unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.default_width, 320);
        assert!(!config.disable_widgets_when_disconnected);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load("/nonexistent/reportview.ron").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
