use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"[roster]
path = "~/.meeting-scribe/roster.json"

[matching]
threshold = 0.6

[telemetry]
enabled = true
log_path = "~/.meeting-scribe/app.log"
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub roster: RosterConfig,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    /// Minimum similarity ratio for a roster name to count as a match.
    pub threshold: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub log_path: String,
}

impl Config {
    /// Load config from ~/.meeting-scribe.toml
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default(&config_path)
                .context("failed to create default config")?;
        }

        let contents = fs::read_to_string(&config_path)
            .context("failed to read config file")?;

        Self::from_toml_str(&contents)
    }

    fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .context("failed to parse config TOML")?;

        ensure!(
            (0.0..=1.0).contains(&config.matching.threshold),
            "matching.threshold must be within 0.0..=1.0, got {}",
            config.matching.threshold
        );

        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".meeting-scribe.toml"))
    }

    fn create_default(path: &PathBuf) -> Result<()> {
        fs::write(path, DEFAULT_CONFIG)
            .context("failed to write default config")?;
        Ok(())
    }

    /// Expand ~ in paths to home directory
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(stripped) = path.strip_prefix("~/") {
            let home = std::env::var("HOME")
                .context("HOME environment variable not set")?;
            Ok(PathBuf::from(home).join(stripped))
        } else {
            Ok(PathBuf::from(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.roster.path, "~/.meeting-scribe/roster.json");
        assert!((config.matching.threshold - 0.6).abs() < f64::EPSILON);
        assert!(config.telemetry.enabled);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let contents = DEFAULT_CONFIG.replace("threshold = 0.6", "threshold = 1.5");
        assert!(Config::from_toml_str(&contents).is_err());
    }

    #[test]
    fn test_missing_section_rejected() {
        assert!(Config::from_toml_str("[roster]\npath = \"x\"\n").is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let home = std::env::var("HOME").expect("HOME not set");
        let result = Config::expand_path("~/data/roster.json").unwrap();
        assert_eq!(result, PathBuf::from(home).join("data/roster.json"));
    }

    #[test]
    fn test_expand_path_absolute() {
        let result = Config::expand_path("/etc/roster.json").unwrap();
        assert_eq!(result, PathBuf::from("/etc/roster.json"));
    }
}
