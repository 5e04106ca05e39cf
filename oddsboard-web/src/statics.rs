use std::sync::OnceLock;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// The global config.
///
/// The config is set once at startup by [`crate::run`] and lives for the rest of the program.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base: Box<str>,
    /// The id of the html element the app is mounted at.
    #[serde(default = "Config::default_mountpoint")]
    pub mountpoint: Box<str>,
    /// Refresh the games every `refresh_interval` seconds. Disabled when `None` or `0`.
    #[serde(default)]
    pub refresh_interval: Option<u64>,
    #[serde(default = "Config::default_log_level")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Returns the defined api_base.
    #[inline]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    fn default_mountpoint() -> Box<str> {
        "app".into()
    }

    fn default_log_level() -> LevelFilter {
        LevelFilter::Info
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the global config.
///
/// # Panics
///
/// Panics if [`set_config`] was not called before.
#[inline]
pub fn config() -> &'static Config {
    CONFIG.get().expect("config accessed before initialization")
}

/// Sets the config. Returns the `config` back if it was already set.
#[inline]
pub(super) fn set_config(config: Config) -> Result<(), Config> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use log::LevelFilter;

    use super::Config;

    #[test]
    fn test_config_deserialize_defaults() {
        let config: Config = parse(r#"{"api_base":"http://localhost:8080"}"#);

        assert_eq!(config.api_base(), "http://localhost:8080");
        assert_eq!(&*config.mountpoint, "app");
        assert_eq!(config.refresh_interval(), None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_refresh_interval() {
        let config: Config = parse(
            r#"{"api_base":"/api","mountpoint":"main","refresh_interval":30,"log_level":"debug"}"#,
        );

        assert_eq!(&*config.mountpoint, "main");
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config: Config = parse(r#"{"api_base":"/api","refresh_interval":0}"#);
        assert_eq!(config.refresh_interval(), None);
    }

    fn parse(s: &str) -> Config {
        serde_json::from_str(s).unwrap()
    }
}
