// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Appliance capability catalog.
//!
//! The catalog maps an appliance attribute path, e.g. `freezer/doorState`, to a
//! [`CapabilityDescriptor`] describing how the attribute is presented as an entity and how its
//! values are translated. It is built once with [`Catalog::new`] and is read-only afterwards.

mod entries;
mod model;

pub use model::*;

use crate::constants::STATIC_ATTRIBUTES;
use crate::errors::ServiceError;
use entries::CATALOG_ENTRIES;
use log::{debug, error};
use std::collections::{BTreeMap, HashSet};

/// Immutable lookup table of capability descriptors.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<&'static str, CapabilityDescriptor>,
    /// Paths which were defined more than once in the source table.
    duplicates: Vec<&'static str>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create the catalog from the compiled-in capability table.
    pub fn new() -> Self {
        Self::from_entries(CATALOG_ENTRIES.iter().copied())
    }

    /// Create a catalog from the given entries.
    ///
    /// If a path is defined more than once, the first definition is used. Duplicates are logged
    /// and reported by [`Catalog::validate`].
    pub fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, CapabilityDescriptor)>,
    ) -> Self {
        let mut map = BTreeMap::new();
        let mut duplicates = Vec::new();
        for (path, descriptor) in entries {
            if map.contains_key(path) {
                error!("Duplicate capability path in catalog: {path}");
                duplicates.push(path);
                continue;
            }
            map.insert(path, descriptor);
        }
        debug!("Capability catalog created with {} entries", map.len());

        Self {
            entries: map,
            duplicates,
        }
    }

    /// Exact-match lookup of an attribute path.
    pub fn get(&self, path: &str) -> Option<&CapabilityDescriptor> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by attribute path.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CapabilityDescriptor)> {
        self.entries.iter().map(|(path, d)| (*path, d))
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Attribute paths which are only present in the appliance state and not in the reported
    /// capabilities. They must always be considered for entity creation.
    pub fn static_attributes(&self) -> &'static [&'static str] {
        STATIC_ATTRIBUTES
    }

    /// Merge the capability paths discovered on an appliance with the static attribute paths.
    ///
    /// Discovered paths come first in their original order, followed by the static attributes not
    /// already discovered. Duplicates are removed.
    pub fn considered_paths<I, S>(&self, discovered: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        discovered
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .chain(STATIC_ATTRIBUTES.iter().map(|p| p.to_string()))
            .filter(|p| seen.insert(p.clone()))
            .collect()
    }

    /// Check all catalog invariants.
    ///
    /// Returns the first violation. All violations are logged.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut violations = self.violations();
        for v in &violations {
            error!("{v}");
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.swap_remove(0))
        }
    }

    fn violations(&self) -> Vec<ServiceError> {
        let mut violations: Vec<ServiceError> = self
            .duplicates
            .iter()
            .map(|path| ServiceError::InvalidCatalog {
                path: path.to_string(),
                reason: "duplicate path".into(),
            })
            .collect();

        for (path, descriptor) in self.iter() {
            if let Err(reason) = descriptor.check() {
                violations.push(ServiceError::InvalidCatalog {
                    path: path.to_string(),
                    reason,
                });
            }
            if let Some(target) = descriptor.state_mapping
                && !self.contains(target)
            {
                violations.push(ServiceError::InvalidCatalog {
                    path: path.to_string(),
                    reason: format!("state mapping target {target} not in catalog"),
                });
            }
        }

        for path in STATIC_ATTRIBUTES {
            if !self.contains(path) {
                violations.push(ServiceError::InvalidCatalog {
                    path: path.to_string(),
                    reason: "static attribute without catalog entry".into(),
                });
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn compiled_in_catalog_is_valid() {
        let catalog = Catalog::new();
        assert_eq!(Ok(()), catalog.validate());
    }

    #[test]
    fn compiled_in_paths_are_unique() {
        let paths: HashSet<_> = CATALOG_ENTRIES.iter().map(|(path, _)| *path).collect();
        assert_eq!(CATALOG_ENTRIES.len(), paths.len());
        assert_eq!(CATALOG_ENTRIES.len(), Catalog::new().len());
    }

    #[test]
    fn constants_have_default_value() {
        let catalog = Catalog::new();
        let constants: Vec<_> = catalog
            .iter()
            .filter(|(_, d)| d.access() == Some(Access::Constant))
            .collect();
        assert!(!constants.is_empty());
        for (path, descriptor) in constants {
            assert!(
                descriptor
                    .capability_info
                    .and_then(|i| i.default_value())
                    .is_some(),
                "{path} must have a default value"
            );
        }
    }

    #[test]
    fn static_attributes_resolve() {
        let catalog = Catalog::new();
        for path in catalog.static_attributes() {
            assert!(catalog.get(path).is_some(), "{path} missing in catalog");
        }
    }

    #[test]
    fn mapping_labels_are_enumerated_values() {
        for (path, descriptor) in Catalog::new().iter() {
            let (Some(mapping), Some(info)) = (descriptor.value_mapping, descriptor.capability_info)
            else {
                continue;
            };
            if info.values.is_none() {
                continue;
            }
            for label in mapping.labels() {
                assert!(info.has_value(label), "{path}: {label} not enumerated");
            }
        }
    }

    #[rstest]
    #[case("freezer/doorState", true)]
    #[case("doorState", true)]
    #[case("networkInterface/linkQualityIndicator", true)]
    #[case("freezer", false)]
    #[case("freezer/", false)]
    #[case("DoorState", false)]
    #[case("door", false)]
    #[case("", false)]
    fn lookup_is_exact_match(#[case] path: &str, #[case] found: bool) {
        assert_eq!(found, Catalog::new().get(path).is_some());
    }

    #[test]
    fn lookup_returns_descriptor_metadata() {
        let catalog = Catalog::new();
        let descriptor = catalog.get("freezer/targetTemperatureC").unwrap();
        let info = descriptor.capability_info.unwrap();
        assert_eq!(Access::ReadWrite, info.access);
        assert_eq!(ValueType::Temperature, info.value_type);
        assert_eq!(
            Some(NumberRange {
                min: Some(-23.0),
                max: Some(-13.0),
                step: Some(1.0),
                default: Some(-18.0),
            }),
            info.range
        );
        assert_eq!(Some(Unit::Celsius), descriptor.unit);
        assert_eq!(Some(Platform::Number), descriptor.platform());
        assert!(descriptor.enabled_by_default);
    }

    #[test]
    fn ice_maker_command_reflects_sibling_state() {
        let catalog = Catalog::new();
        let descriptor = catalog.get("iceMaker/executeCommand").unwrap();
        assert_eq!(Some("Ice Maker"), descriptor.friendly_name);
        let sibling = descriptor.state_mapping.and_then(|p| catalog.get(p)).unwrap();
        assert!(!sibling.enabled_by_default);
        assert_eq!(Some(Platform::BinarySensor), sibling.platform());
    }

    #[test]
    fn value_mapping_translates_appliance_codes() {
        let catalog = Catalog::new();
        let mapping = catalog
            .get("iceMaker/iceDispenserState")
            .and_then(|d| d.value_mapping)
            .unwrap();
        assert_eq!(Some("Crushed"), mapping.label(&json!(4)));
        assert_eq!(None, mapping.label(&json!(3)));
        assert_eq!(Some(RawCode::Int(2)), mapping.raw("Dispensing Cubes"));
    }

    #[test]
    fn presentation_only_descriptor() {
        let catalog = Catalog::new();
        let descriptor = catalog.get("targetTemperatureF").unwrap();
        assert!(descriptor.capability_info.is_none());
        assert_eq!(Some(Unit::Fahrenheit), descriptor.unit);
    }

    #[test]
    fn considered_paths_union_with_static_attributes() {
        let catalog = Catalog::new();
        let paths = catalog.considered_paths(["doorState", "applianceMode", "doorState"]);
        assert_eq!(
            vec![
                "doorState",
                "applianceMode",
                "connectivityState",
                "networkInterface/linkQualityIndicator",
            ],
            paths
        );
    }

    #[test]
    fn considered_paths_without_discovered_capabilities() {
        let catalog = Catalog::new();
        let paths = catalog.considered_paths(Vec::<String>::new());
        assert_eq!(catalog.static_attributes(), paths.as_slice());
    }

    #[test]
    fn duplicate_paths_keep_first_and_fail_validation() {
        let first = CapabilityDescriptor::new(CapabilityInfo::read(ValueType::String));
        let second = CapabilityDescriptor::new(CapabilityInfo::read(ValueType::Number));
        let catalog = Catalog::from_entries([("doorState", first), ("doorState", second)]);

        assert_eq!(1, catalog.len());
        assert_eq!(Some(&first), catalog.get("doorState"));
        assert!(matches!(
            catalog.validate(),
            Err(ServiceError::InvalidCatalog { path, .. }) if path == "doorState"
        ));
    }

    #[test]
    fn missing_state_mapping_target_fails_validation() {
        let mut entries: Vec<_> = CATALOG_ENTRIES.to_vec();
        entries.retain(|(path, _)| *path != "iceMaker/applianceState");
        let catalog = Catalog::from_entries(entries);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn value_mappings_round_trip_every_label() {
        let catalog = Catalog::new();
        let mut mapped = 0;
        for (path, descriptor) in catalog.iter() {
            let Some(mapping) = descriptor.value_mapping else {
                continue;
            };
            for label in mapping.labels() {
                let raw = mapping
                    .raw(label)
                    .unwrap_or_else(|| panic!("{path}: no raw code for '{label}'"));
                assert_eq!(Some(label), mapping.label(&raw.into()), "{path}");
                mapped += 1;
            }
        }
        assert!(mapped > 0);
    }

    #[test]
    fn float_codes_map_to_extra_cavity_temperatures() {
        let catalog = Catalog::new();
        let mapping = catalog
            .get("extraCavity/targetTemperatureC")
            .and_then(|d| d.value_mapping)
            .expect("extra cavity temperature mapping");
        assert_eq!(Some("-2.0"), mapping.label(&json!(-0.5)));
        assert_eq!(Some(RawCode::Float(-0.5)), mapping.raw("-2.0"));
    }

    #[test]
    fn iteration_is_sorted_by_path() {
        let catalog = Catalog::new();
        let paths: Vec<_> = catalog.paths().collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, paths);
    }
}
