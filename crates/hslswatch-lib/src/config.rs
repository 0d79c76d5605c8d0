//! Provider configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::presentation::LEGACY_VARIABLE_NAME;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# HslSwatch configuration — changes made outside the host may be overwritten.\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document language ids that get swatches. Default: `["css"]`.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Reuse the edited declaration's own name in the replacement text.
    #[serde(default = "default_true")]
    pub preserve_variable_name: bool,

    /// Name written when the original cannot be recovered, or when
    /// `preserve_variable_name` is off. Default: "var-name".
    #[serde(default = "default_fallback_variable_name")]
    pub fallback_variable_name: String,
}

fn default_languages() -> Vec<String> {
    vec!["css".into()]
}

fn default_true() -> bool {
    true
}

fn default_fallback_variable_name() -> String {
    LEGACY_VARIABLE_NAME.into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            languages: default_languages(),
            preserve_variable_name: true,
            fallback_variable_name: default_fallback_variable_name(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `languages` is empty, so no document would ever be scanned.
    NoLanguages,
    /// A `languages` entry is empty or whitespace-only.
    BlankLanguage { index: usize },
    /// `fallback_variable_name` is not a valid custom-property name.
    InvalidFallbackName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoLanguages => write!(f, "At least one language is required"),
            ValidationError::BlankLanguage { index } => {
                write!(f, "Language #{} is blank", index + 1)
            }
            ValidationError::InvalidFallbackName(e) => {
                write!(f, "Invalid fallback variable name: {e}")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hslswatch"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Save config to an arbitrary path atomically (write to temp file, then rename).
    pub fn save_to(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        if std::fs::rename(&tmp, path).is_err() {
            // Rename can fail across filesystems; fall back to direct write + cleanup
            let result = std::fs::write(path, &contents);
            let _ = std::fs::remove_file(&tmp);
            result?;
        }
        Ok(())
    }

    /// Save config to the default platform path.
    pub fn save(&self) -> crate::error::Result<()> {
        let Some(path) = Self::path() else {
            return Err(crate::HslSwatchError::Config("No config directory".into()));
        };
        self.save_to(&path)
    }

    /// True if `language_id` is one of the configured languages (ASCII case-insensitive).
    pub fn handles_language(&self, language_id: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.trim().eq_ignore_ascii_case(language_id.trim()))
    }

    /// Check that `name` can follow `--` in a declaration the scanner recognizes.
    pub fn validate_variable_name(name: &str) -> crate::error::Result<()> {
        if name.is_empty() {
            return Err(crate::HslSwatchError::Config(
                "variable name cannot be empty".into(),
            ));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(crate::HslSwatchError::Config(format!(
                "unsupported character {bad:?} in \"{name}\""
            )));
        }
        Ok(())
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.languages.is_empty() {
            errors.push(ValidationError::NoLanguages);
        }
        for (index, language) in self.languages.iter().enumerate() {
            if language.trim().is_empty() {
                errors.push(ValidationError::BlankLanguage { index });
            }
        }

        if let Err(e) = Self::validate_variable_name(&self.fallback_variable_name) {
            errors.push(ValidationError::InvalidFallbackName(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
