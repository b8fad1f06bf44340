//! Source configuration.
//!
//! Each of the two documents is read from a local file or an `http(s)` URL.
//! Values come from, highest precedence first: a YAML file, environment
//! variables, built-in defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use senate_core::SeatingParams;

pub const DEFAULT_MEMBERS_SOURCE: &str = "data/senators.json";
pub const DEFAULT_IMAGES_SOURCE: &str = "data/imgSources.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SourceLocation {
    File(PathBuf),
    Url(Url),
}

impl FromStr for SourceLocation {
    type Err = ConfigError;

    /// `http://` and `https://` prefixes select a URL; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::EmptyLocation);
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Url::parse(s)
                .map(Self::Url)
                .map_err(|e| ConfigError::InvalidUrl(s.to_string(), e.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl TryFrom<String> for SourceLocation {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Resolved loader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub members: SourceLocation,
    pub images: SourceLocation,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    pub seating: SeatingParams,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            members: SourceLocation::File(PathBuf::from(DEFAULT_MEMBERS_SOURCE)),
            images: SourceLocation::File(PathBuf::from(DEFAULT_IMAGES_SOURCE)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            seating: SeatingParams::default(),
        }
    }
}

/// On-disk YAML shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    members: Option<SourceLocation>,
    images: Option<SourceLocation>,
    timeout_secs: Option<u64>,
    seating: Option<SeatingParams>,
}

impl SourceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SENATE_MEMBERS_SOURCE` (default: `data/senators.json`)
    /// - `SENATE_IMAGES_SOURCE` (default: `data/imgSources.json`)
    /// - `SENATE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            members: env_location("SENATE_MEMBERS_SOURCE", DEFAULT_MEMBERS_SOURCE)?,
            images: env_location("SENATE_IMAGES_SOURCE", DEFAULT_IMAGES_SOURCE)?,
            timeout_secs: parse_timeout(std::env::var("SENATE_TIMEOUT_SECS").ok().as_deref())?,
            seating: SeatingParams::default(),
        })
    }

    /// Environment and defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        match path {
            Some(path) => config.with_yaml_file(path),
            None => Ok(config),
        }
    }

    /// Overlay the keys present in a YAML file.
    pub fn with_yaml_file(self, path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e.to_string()))?;
        self.with_yaml_str(&text)
            .map_err(|e| match e {
                ConfigError::Yaml(_, msg) => ConfigError::Yaml(path.display().to_string(), msg),
                other => other,
            })
    }

    fn with_yaml_str(self, text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = if text.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(text)
                .map_err(|e| ConfigError::Yaml("<inline>".to_string(), e.to_string()))?
        };
        if file.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(Self {
            members: file.members.unwrap_or(self.members),
            images: file.images.unwrap_or(self.images),
            timeout_secs: file.timeout_secs.unwrap_or(self.timeout_secs),
            seating: file.seating.unwrap_or(self.seating),
        })
    }
}

/// Timeout in whole seconds; absent means the default, zero is rejected.
fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TIMEOUT_SECS);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

fn env_location(var: &str, default: &str) -> Result<SourceLocation, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|e| match e {
        ConfigError::InvalidUrl(_, msg) => ConfigError::InvalidUrl(var.to_string(), msg),
        other => other,
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("source location must not be empty")]
    EmptyLocation,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("failed to read config file {0}: {1}")]
    Read(String, String),
    #[error("invalid config file {0}: {1}")]
    Yaml(String, String),
    #[error("timeout must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_distinguishes_urls_from_paths() {
        assert_eq!(
            "data/senators.json".parse::<SourceLocation>().unwrap(),
            SourceLocation::File(PathBuf::from("data/senators.json"))
        );
        let url = "https://example.com/senators.json"
            .parse::<SourceLocation>()
            .unwrap();
        assert!(matches!(url, SourceLocation::Url(_)));
        assert_eq!(url.to_string(), "https://example.com/senators.json");
        assert!("http://".parse::<SourceLocation>().is_err());
        assert_eq!("  ".parse::<SourceLocation>(), Err(ConfigError::EmptyLocation));
    }

    #[test]
    fn env_location_uses_default_when_var_absent() {
        let loc = env_location("NONEXISTENT_VAR_SENATE_12345", "data/x.json").unwrap();
        assert_eq!(loc, SourceLocation::File(PathBuf::from("data/x.json")));
    }

    #[test]
    fn env_location_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_SENATE", "https://");
        let result = env_location("TEST_BAD_URL_SENATE", "data/x.json");
        std::env::remove_var("TEST_BAD_URL_SENATE");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(var, _)) if var == "TEST_BAD_URL_SENATE"));
    }

    #[test]
    fn yaml_overrides_only_present_keys() {
        let yaml = "images: https://cdn.example/img.json\nseating:\n  group_size: 25\n";
        let config = SourceConfig::default().with_yaml_str(yaml).unwrap();
        assert_eq!(
            config.members,
            SourceLocation::File(PathBuf::from(DEFAULT_MEMBERS_SOURCE))
        );
        assert!(matches!(config.images, SourceLocation::Url(_)));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.seating.group_size.get(), 25);
        assert_eq!(config.seating.origin_x, 800.0);
    }

    #[test]
    fn yaml_rejects_zero_group_size_and_unknown_keys() {
        let zero = SourceConfig::default().with_yaml_str("seating:\n  group_size: 0\n");
        assert!(matches!(zero, Err(ConfigError::Yaml(..))));
        let unknown = SourceConfig::default().with_yaml_str("memberz: a.json\n");
        assert!(matches!(unknown, Err(ConfigError::Yaml(..))));
        let misspelt = SourceConfig::default().with_yaml_str("seating:\n  group_sise: 25\n");
        assert!(matches!(misspelt, Err(ConfigError::Yaml(_, msg)) if msg.contains("group_sise")));
    }

    #[test]
    fn timeout_must_be_positive_integer() {
        assert_eq!(parse_timeout(None), Ok(DEFAULT_TIMEOUT_SECS));
        assert_eq!(parse_timeout(Some(" 5 ")), Ok(5));
        assert_eq!(
            parse_timeout(Some("thirty")),
            Err(ConfigError::InvalidTimeout("thirty".into()))
        );
        assert_eq!(parse_timeout(Some("0")), Err(ConfigError::InvalidTimeout("0".into())));
        assert!(parse_timeout(Some("-1")).is_err());

        let zero = SourceConfig::default().with_yaml_str("timeout_secs: 0\n");
        assert!(matches!(zero, Err(ConfigError::InvalidTimeout(_))));
    }

    #[test]
    fn yaml_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("senate.yaml");
        std::fs::write(&path, "members: other/senators.json\ntimeout_secs: 5\n").unwrap();
        let config = SourceConfig::default().with_yaml_file(&path).unwrap();
        assert_eq!(
            config.members,
            SourceLocation::File(PathBuf::from("other/senators.json"))
        );
        assert_eq!(config.timeout_secs, 5);

        let missing = SourceConfig::default().with_yaml_file(&dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(ConfigError::Read(..))));
    }
}
