//! Scanner configuration.
//!
//! Options are plain data so embedders can build them in code, but they can
//! also be read from the `[scanner]` table of a TOML file:
//!
//! ```toml
//! [scanner]
//! number_mode = "fractional"
//! report_unterminated = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// How digit runs followed by a `.` are scanned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    /// `456.789` scans as `456`, `.`, `789`; the parser reassembles floats.
    #[default]
    Split,
    /// `456.789` scans as one literal. A `.` not followed by a digit is
    /// left alone, so `1..2` is still `1`, `..`, `2`.
    Fractional,
}

/// Options controlling a [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Numeric literal handling.
    #[serde(default)]
    pub number_mode: NumberMode,

    /// Report unterminated strings and block comments to the attached
    /// handler. Tokens are the same either way.
    #[serde(default = "default_true")]
    pub report_unterminated: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            number_mode: NumberMode::Split,
            report_unterminated: true,
        }
    }
}

/// On-disk layout: options live under `[scanner]`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    scanner: ScanConfig,
}

impl ScanConfig {
    /// Parses configuration from TOML text.
    ///
    /// Missing tables and keys fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use luanova_lex::{NumberMode, ScanConfig};
    ///
    /// let config = ScanConfig::from_toml_str("[scanner]\nnumber_mode = \"fractional\"\n").unwrap();
    /// assert_eq!(config.number_mode, NumberMode::Fractional);
    /// assert!(config.report_unterminated);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.scanner)
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded scanner configuration");
        Ok(config)
    }

    /// Serializes the configuration under a `[scanner]` table.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        let file = ConfigFile { scanner: *self };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
