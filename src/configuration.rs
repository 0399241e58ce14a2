// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Configuration file handling.

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_WEBSOCKET_RENEWAL_DELAY, language_code};
use crate::errors::ServiceError;
use config::Config;
use log::{info, warn};
use serde_with::{DurationSeconds, serde_as};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default configuration file.
pub const DEF_CONFIG_FILE: &str = "configuration.yaml";

/// Prefix of environment variables overriding configuration values.
///
/// E.g. `ELX_ELECTROLUX_NOTIFICATIONS=false` sets the `electrolux.notifications` key.
pub const ENV_PREFIX: &str = "ELX";

/// Minimal websocket renewal interval.
const MIN_RENEW_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Default, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub electrolux: ElectroluxSettings,
}

#[serde_as]
#[derive(Clone, serde::Deserialize, serde::Serialize)]
pub struct ElectroluxSettings {
    /// Electrolux account user name, passed to the appliance API client.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Mobile app language display name, see [`crate::constants::LANGUAGES`].
    #[serde(default = "default_language")]
    pub language: String,
    /// Websocket session renewal interval.
    #[serde_as(as = "DurationSeconds")]
    #[serde(rename = "renew_interval_sec", default = "default_renew_interval")]
    pub renew_interval: Duration,
    /// Create persistent notifications for appliance alerts.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

impl Default for ElectroluxSettings {
    fn default() -> Self {
        Self {
            username: "".to_string(),
            password: "".to_string(),
            language: default_language(),
            renew_interval: default_renew_interval(),
            notifications: default_notifications(),
        }
    }
}

impl ElectroluxSettings {
    /// Language code of the configured language, e.g. `eng` for `English`.
    pub fn language_code(&self) -> &'static str {
        language_code(&self.language).unwrap_or("eng")
    }
}

// don't expose the password
impl Display for ElectroluxSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "user={}, language={}, renew interval={:?}, notifications={}",
            self.username, self.language, self.renew_interval, self.notifications
        )
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
fn default_renew_interval() -> Duration {
    Duration::from_secs(DEFAULT_WEBSOCKET_RENEWAL_DELAY)
}
fn default_notifications() -> bool {
    true
}

/// Load the configuration settings.
///
/// The application provides default values which can be overriden in the following order:
/// 1. Configuration settings in the yaml or json configuration file specified in `filename`
/// 2. Environment variables with prefix `ELX_` (works only for cfg keys not containing a `_`!)
pub fn get_configuration(filename: Option<&str>) -> Result<Settings, ServiceError> {
    let mut config = Config::builder().add_source(Config::try_from(&Settings::default())?);
    if let Some(filename) = filename {
        info!("Loading configuration file: {filename}");
        config = config.add_source(config::File::with_name(filename));
    }

    let config = config
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("_"))
        .build()?;

    Ok(check_cfg_values(config.try_deserialize()?))
}

/// Load the configuration settings from a yaml string, without environment overrides.
pub fn parse_configuration(yaml: &str) -> Result<Settings, ServiceError> {
    let config = Config::builder()
        .add_source(Config::try_from(&Settings::default())?)
        .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
        .build()?;

    Ok(check_cfg_values(config.try_deserialize()?))
}

fn check_cfg_values(mut settings: Settings) -> Settings {
    if language_code(&settings.electrolux.language).is_none() {
        warn!(
            "Unsupported language '{}', using {DEFAULT_LANGUAGE}.",
            settings.electrolux.language
        );
        settings.electrolux.language = default_language();
    }

    if settings.electrolux.renew_interval < MIN_RENEW_INTERVAL {
        warn!(
            "Invalid renew interval {:?}, using default.",
            settings.electrolux.renew_interval
        );
        settings.electrolux.renew_interval = default_renew_interval();
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let settings = parse_configuration("electrolux:\n  password: secret\n")
            .expect("default configuration must load");
        assert_eq!("English", settings.electrolux.language);
        assert_eq!("eng", settings.electrolux.language_code());
        assert_eq!(Duration::from_secs(43200), settings.electrolux.renew_interval);
        assert!(settings.electrolux.notifications);
        assert!(settings.electrolux.username.is_empty());
        assert_eq!("secret", settings.electrolux.password);
    }

    #[test]
    fn yaml_overrides_defaults() {
        let yaml = r#"
electrolux:
  username: user@example.com
  password: secret
  language: Deutsch
  renew_interval_sec: 3600
  notifications: false
"#;
        let settings = parse_configuration(yaml).expect("valid configuration");
        assert_eq!("user@example.com", settings.electrolux.username);
        assert_eq!("deu", settings.electrolux.language_code());
        assert_eq!(Duration::from_secs(3600), settings.electrolux.renew_interval);
        assert!(!settings.electrolux.notifications);
    }

    #[test]
    fn invalid_values_are_reset_to_defaults() {
        let yaml = r#"
electrolux:
  language: Klingon
  renew_interval_sec: 10
"#;
        let settings = parse_configuration(yaml).expect("valid configuration");
        assert_eq!("English", settings.electrolux.language);
        assert_eq!(Duration::from_secs(43200), settings.electrolux.renew_interval);
    }

    #[rstest]
    #[case("electrolux:\n  renew_interval_sec: soon\n")]
    #[case("electrolux: [\n")]
    fn invalid_configuration_is_a_configuration_error(#[case] yaml: &str) {
        let result = parse_configuration(yaml);
        assert!(
            matches!(result, Err(ServiceError::ConfigurationError(_))),
            "{yaml}"
        );
    }

    #[test]
    fn display_hides_password() {
        let settings = ElectroluxSettings {
            password: "secret".into(),
            ..Default::default()
        };
        assert!(!settings.to_string().contains("secret"));
    }
}
