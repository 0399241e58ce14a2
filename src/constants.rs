// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Integration constants.

use crate::catalog::Platform;

/// Integration name, also used as default notification title.
pub const NAME: &str = "Electrolux status";
pub const DOMAIN: &str = "electrolux_status";
pub const DOMAIN_DATA: &str = const_format::concatcp!(DOMAIN, "_data");

/// Entity platforms provided by the integration.
pub const PLATFORMS: [Platform; 6] = [
    Platform::BinarySensor,
    Platform::Button,
    Platform::Number,
    Platform::Select,
    Platform::Sensor,
    Platform::Switch,
];

// Configuration and option keys
pub const CONF_LANGUAGE: &str = "language";
pub const CONF_RENEW_INTERVAL: &str = "renew_interval";
pub const CONF_NOTIFICATIONS: &str = "notifications";

pub const DEFAULT_LANGUAGE: &str = "English";
/// Websocket renewal delay in seconds: 12 hours.
pub const DEFAULT_WEBSOCKET_RENEWAL_DELAY: u64 = 43200;

/// Attributes which appear in the appliance state but not in its capabilities.
///
/// They are defined here and in the catalog so that these entities can be added dynamically.
pub const STATIC_ATTRIBUTES: &[&str] = &[
    "connectivityState",
    "networkInterface/linkQualityIndicator",
    "applianceMode",
];

/// Icons of the default `executeCommand` values.
const COMMAND_ICONS: &[(&str, &str)] = &[
    ("OFF", "mdi:power-off"),
    ("ON", "mdi:power-on"),
    ("START", "mdi:play"),
    ("STOPRESET", "mdi:stop"),
    ("PAUSE", "mdi:pause"),
    ("RESUME", "mdi:play-pause"),
];

/// Supported mobile app languages: display name and ISO 639-2 code.
///
/// See <https://emea-production.api.electrolux.net/masterdata-service/api/v1/languages>
pub const LANGUAGES: &[(&str, &str)] = &[
    ("български", "bul"),
    ("český", "ces"),
    ("Dansk", "dan"),
    ("Deutsch", "deu"),
    ("ελληνικός", "ell"),
    ("English", "eng"),
    ("eesti", "est"),
    ("Soome", "fin"),
    ("Français", "fra"),
    ("Hrvatski", "hrv"),
    ("magyar", "hun"),
    ("Italiano", "ita"),
    ("lettone", "lav"),
    ("lituano", "lit"),
    ("Luxembourgish", "ltz"),
    ("nederlands", "nld"),
    ("Norsk", "nor"),
    ("Polski", "pol"),
    ("Português", "por"),
    ("Română", "ron"),
    ("rusesc", "rus"),
    ("slovenský", "slk"),
    ("slovinský", "slv"),
    ("Español", "spa"),
    ("Svenska", "swe"),
    ("Türk", "tur"),
    ("Ukrayna", "ukr"),
];

/// Icon of a default `executeCommand` value, e.g. `mdi:play` for `START`.
pub fn command_icon(command: &str) -> Option<&'static str> {
    COMMAND_ICONS
        .iter()
        .find(|(c, _)| *c == command)
        .map(|(_, icon)| *icon)
}

/// Language code of a language display name from [`LANGUAGES`].
pub fn language_code(language: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rstest::rstest;

    #[rstest]
    #[case("OFF", Some("mdi:power-off"))]
    #[case("START", Some("mdi:play"))]
    #[case("STOPRESET", Some("mdi:stop"))]
    #[case("RESUME", Some("mdi:play-pause"))]
    #[case("start", None)]
    #[case("RESET", None)]
    fn icon_of_command(#[case] command: &str, #[case] expected: Option<&str>) {
        assert_eq!(expected, command_icon(command));
    }

    #[test]
    fn every_execute_command_value_has_an_icon() {
        let catalog = Catalog::new();
        let info = catalog
            .get("executeCommand")
            .and_then(|d| d.capability_info)
            .unwrap();
        for value in info.selectable_values() {
            assert!(command_icon(value).is_some(), "no icon for {value}");
        }
    }

    #[rstest]
    #[case("English", Some("eng"))]
    #[case("Deutsch", Some("deu"))]
    #[case("Română", Some("ron"))]
    #[case("english", None)]
    #[case("Klingon", None)]
    fn code_of_language(#[case] language: &str, #[case] expected: Option<&str>) {
        assert_eq!(expected, language_code(language));
    }

    #[test]
    fn default_language_is_supported() {
        assert_eq!(Some("eng"), language_code(DEFAULT_LANGUAGE));
    }
}
