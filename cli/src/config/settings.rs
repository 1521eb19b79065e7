use super::error::ConfigError;
use crate::display::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "unitprice.toml";

const MAX_FRACTION_DIGITS_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Display locale, "ja" when unset
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormatConfig {
    // Rounding applied to displayed prices only
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

fn default_max_fraction_digits() -> usize {
    2
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        log::debug!("Loaded config from {}", path.display());
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, else `unitprice.toml` in `dir` if present, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load_from_file(&fallback)
        } else {
            log::debug!("No {} found, using defaults", fallback.display());
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.format.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "format.max_fraction_digits must be at most {}, got {}",
                MAX_FRACTION_DIGITS_LIMIT, self.format.max_fraction_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.locale, Locale::Ja);
        assert_eq!(config.format.max_fraction_digits, 2);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
locale = "en"

[format]
max_fraction_digits = 1
"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.format.max_fraction_digits, 1);
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let result = Config::load_from_str(r#"locale = "fr""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_too_many_fraction_digits_rejected() {
        let result = Config::load_from_str("[format]\nmax_fraction_digits = 11\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let missing = Path::new("definitely/not/here/unitprice.toml");
        let result = Config::resolve(Some(missing), Path::new("."));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let dir = Path::new("definitely/not/here");
        assert_eq!(Config::resolve(None, dir).unwrap(), Config::empty());
    }
}
