/// Harness configuration loader - parses probe.toml
///
/// The file is embedded into the binary at compile time, so a run never
/// touches the filesystem for settings. Changing the test area or timeout
/// means editing `probe.toml` and rebuilding.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::logging::LogLevel;
use crate::model::ConfigError;

/// Contents of `probe.toml` at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../probe.toml");

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the site service reachability request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub format: String,
    pub bbox: BoundingBox,
    pub site_type: String,
    pub site_status: String,
    pub timeout_secs: u64,
    pub preview_lines: usize,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Geographic test region in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Renders as the `bBox` query value: `west,south,east,north`.
///
/// Uses `{:?}` so whole degrees keep their trailing `.0` (`-109.0`, not `-109`).
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?},{:?},{:?},{:?}", self.west, self.south, self.east, self.north)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub console_timestamps: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// Parses `level`. Unknown names fall back to `Info`.
    pub fn min_level(&self) -> LogLevel {
        match self.level.to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://waterservices.usgs.gov/nwis/site/".to_string(),
                format: "rdb".to_string(),
                bbox: BoundingBox {
                    west: -109.0,
                    south: 36.5,
                    east: -108.0,
                    north: 37.0,
                },
                site_type: "ST".to_string(),
                site_status: "active".to_string(),
                timeout_secs: 10,
                preview_lines: 10,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl ProbeConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ProbeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.api.bbox;
        if !(-180.0..=180.0).contains(&b.west) || !(-180.0..=180.0).contains(&b.east) {
            return Err(ConfigError::Invalid(format!("bbox longitude out of range: {}", b)));
        }
        if !(-90.0..=90.0).contains(&b.south) || !(-90.0..=90.0).contains(&b.north) {
            return Err(ConfigError::Invalid(format!("bbox latitude out of range: {}", b)));
        }
        if b.west >= b.east || b.south >= b.north {
            return Err(ConfigError::Invalid(format!("bbox corners are inverted: {}", b)));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

/// Loads the configuration embedded from `probe.toml`.
pub fn load_config() -> Result<ProbeConfig, ConfigError> {
    ProbeConfig::from_toml_str(EMBEDDED_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = load_config().expect("embedded probe.toml should parse");
        assert_eq!(config.api.format, "rdb");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = load_config().expect("embedded probe.toml should parse");
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn test_bbox_renders_with_trailing_decimal() {
        let config = ProbeConfig::default();
        assert_eq!(config.api.bbox.to_string(), "-109.0,36.5,-108.0,37.0");
    }

    #[test]
    fn test_timeout_is_ten_seconds() {
        assert_eq!(ProbeConfig::default().api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_logging_section_uses_defaults() {
        let toml = r#"
            [api]
            base_url = "https://example.test/site/"
            format = "rdb"
            site_type = "ST"
            site_status = "active"
            timeout_secs = 5
            preview_lines = 3
            [api.bbox]
            west = -110.0
            south = 35.0
            east = -109.0
            north = 36.0
        "#;
        let config = ProbeConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.logging.min_level(), LogLevel::Info);
    }

    #[test]
    fn test_inverted_bbox_is_rejected() {
        let toml = EMBEDDED_CONFIG.replace("west = -109.0", "west = -107.0");
        let result = ProbeConfig::from_toml_str(&toml);
        assert!(
            matches!(result, Err(ConfigError::Invalid(_))),
            "west east of east should be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let toml = EMBEDDED_CONFIG.replace("timeout_secs = 10", "timeout_secs = 0");
        let result = ProbeConfig::from_toml_str(&toml);
        assert!(
            matches!(&result, Err(ConfigError::Invalid(msg)) if msg.contains("timeout_secs")),
            "zero timeout should be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_longitude_out_of_range_is_rejected() {
        let toml = EMBEDDED_CONFIG.replace("west = -109.0", "west = -190.0");
        let result = ProbeConfig::from_toml_str(&toml);
        assert!(
            matches!(&result, Err(ConfigError::Invalid(msg)) if msg.contains("longitude")),
            "west beyond -180 should be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_latitude_out_of_range_is_rejected() {
        let toml = EMBEDDED_CONFIG.replace("north = 37.0", "north = 91.0");
        let result = ProbeConfig::from_toml_str(&toml);
        assert!(
            matches!(&result, Err(ConfigError::Invalid(msg)) if msg.contains("latitude")),
            "north beyond 90 should be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() {
        let result = ProbeConfig::from_toml_str("[api\nbase_url = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_log_level_names() {
        let mut logging = LoggingConfig::default();
        logging.level = "WARN".to_string();
        assert_eq!(logging.min_level(), LogLevel::Warning);
        logging.level = "debug".to_string();
        assert_eq!(logging.min_level(), LogLevel::Debug);
        logging.level = "verbose".to_string();
        assert_eq!(logging.min_level(), LogLevel::Info);
    }
}
