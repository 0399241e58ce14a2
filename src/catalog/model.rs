// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Capability descriptor data structures.
//!
//! All types are plain `Copy` values referencing `'static` data, so the whole catalog table can be
//! compiled in as a `static` slice.

use serde::Serialize;
use serde_json::Value;
use serde_with::SerializeDisplay;
use std::fmt::{Display, Formatter};

/// Access mode of an appliance capability.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
    ReadWrite,
    /// Fixed value defined by the catalog, never read from the appliance.
    Constant,
}

impl Access {
    /// Live value is reported by the appliance.
    pub fn is_readable(&self) -> bool {
        matches!(self, Access::Read | Access::ReadWrite)
    }

    /// Value can be sent to the appliance.
    pub fn is_writable(&self) -> bool {
        matches!(self, Access::Write | Access::ReadWrite)
    }
}

/// Primitive value type of an appliance capability.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Temperature,
    Alert,
}

/// One allowed raw value of an enumerated capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnumValue {
    pub name: &'static str,
    /// The appliance reports the value but it can't be selected.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Numeric bounds of a capability. Every bound is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumberRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
}

impl NumberRange {
    pub const UNBOUNDED: NumberRange = NumberRange {
        min: None,
        max: None,
        step: None,
        default: None,
    };
}

/// Capability information as reported by the appliance capability negotiation, or a fixed
/// override of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapabilityInfo {
    pub access: Access,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<&'static [EnumValue]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<NumberRange>,
}

impl CapabilityInfo {
    pub const fn new(access: Access, value_type: ValueType) -> Self {
        Self {
            access,
            value_type,
            values: None,
            range: None,
        }
    }

    pub const fn read(value_type: ValueType) -> Self {
        Self::new(Access::Read, value_type)
    }

    pub const fn write(value_type: ValueType) -> Self {
        Self::new(Access::Write, value_type)
    }

    pub const fn read_write(value_type: ValueType) -> Self {
        Self::new(Access::ReadWrite, value_type)
    }

    /// A numeric constant with a fixed default value.
    pub const fn constant(default: f64) -> Self {
        Self::new(Access::Constant, ValueType::Number).with_default(default)
    }

    pub const fn with_values(self, values: &'static [EnumValue]) -> Self {
        Self {
            values: Some(values),
            ..self
        }
    }

    pub const fn with_bounds(self, min: f64, max: f64, step: f64) -> Self {
        let range = match self.range {
            Some(r) => r,
            None => NumberRange::UNBOUNDED,
        };
        Self {
            range: Some(NumberRange {
                min: Some(min),
                max: Some(max),
                step: Some(step),
                ..range
            }),
            ..self
        }
    }

    pub const fn with_default(self, default: f64) -> Self {
        let range = match self.range {
            Some(r) => r,
            None => NumberRange::UNBOUNDED,
        };
        Self {
            range: Some(NumberRange {
                default: Some(default),
                ..range
            }),
            ..self
        }
    }

    /// Fixed default value, if any.
    pub fn default_value(&self) -> Option<f64> {
        self.range.and_then(|r| r.default)
    }

    /// Check if `value` is one of the enumerated values.
    ///
    /// Returns `false` if the capability doesn't define enumerated values.
    pub fn has_value(&self, value: &str) -> bool {
        self.values
            .map(|values| values.iter().any(|v| v.name == value))
            .unwrap_or_default()
    }

    /// Enumerated values which can be selected, i.e. without the `disabled` ones.
    pub fn selectable_values(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.values
            .unwrap_or_default()
            .iter()
            .filter(|v| !v.disabled)
            .map(|v| v.name)
    }
}

/// Home Assistant entity platform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    BinarySensor,
    Button,
    Number,
    Select,
    Sensor,
    Switch,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SensorDeviceClass {
    Duration,
    Energy,
    Enum,
    Humidity,
    Temperature,
    Water,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum BinarySensorDeviceClass {
    Door,
    Lock,
    Running,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NumberDeviceClass {
    Temperature,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SwitchDeviceClass {
    Switch,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonDeviceClass {
    Restart,
}

/// Display class of an entity, tagged with the platform it belongs to.
///
/// The [`Display`] implementation yields the Home Assistant device class identifier, e.g.
/// `duration` or `door`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay)]
pub enum DeviceClass {
    Sensor(SensorDeviceClass),
    BinarySensor(BinarySensorDeviceClass),
    Number(NumberDeviceClass),
    Switch(SwitchDeviceClass),
    Button(ButtonDeviceClass),
}

impl DeviceClass {
    pub fn platform(&self) -> Platform {
        match self {
            DeviceClass::Sensor(_) => Platform::Sensor,
            DeviceClass::BinarySensor(_) => Platform::BinarySensor,
            DeviceClass::Number(_) => Platform::Number,
            DeviceClass::Switch(_) => Platform::Switch,
            DeviceClass::Button(_) => Platform::Button,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Sensor(c) => c.into(),
            DeviceClass::BinarySensor(c) => c.into(),
            DeviceClass::Number(c) => c.into(),
            DeviceClass::Switch(c) => c.into(),
            DeviceClass::Button(c) => c.into(),
        }
    }
}

impl Display for DeviceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity category for non-primary entities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// Unit of measurement, serialized with the Home Assistant unit symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
pub enum Unit {
    #[strum(serialize = "s")]
    #[serde(rename = "s")]
    Seconds,
    #[strum(serialize = "°C")]
    #[serde(rename = "°C")]
    Celsius,
    #[strum(serialize = "°F")]
    #[serde(rename = "°F")]
    Fahrenheit,
    #[strum(serialize = "W")]
    #[serde(rename = "W")]
    Watt,
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Liters,
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percentage,
}

/// Raw value code as reported by the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawCode {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl RawCode {
    fn as_f64(&self) -> Option<f64> {
        match self {
            RawCode::Int(v) => Some(*v as f64),
            RawCode::Float(v) => Some(*v),
            RawCode::Text(_) => None,
        }
    }

    /// Compare two codes. Numeric codes are compared by value, so `2` matches `2.0`.
    pub fn matches(&self, other: &RawCode) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Check if the code matches a raw json value reported by the appliance.
    pub fn matches_json(&self, value: &Value) -> bool {
        match (self, value) {
            (RawCode::Text(code), Value::String(s)) => code == s,
            (code, Value::Number(n)) => match (code.as_f64(), n.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl From<RawCode> for Value {
    fn from(code: RawCode) -> Self {
        match code {
            RawCode::Int(v) => v.into(),
            RawCode::Float(v) => v.into(),
            RawCode::Text(v) => v.into(),
        }
    }
}

/// Closed translation table between raw appliance codes and display labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueMapping(pub &'static [(RawCode, &'static str)]);

impl ValueMapping {
    /// Display label of a raw appliance value.
    pub fn label(&self, raw: &Value) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(code, _)| code.matches_json(raw))
            .map(|(_, label)| *label)
    }

    /// Raw appliance code of a display label, used when writing a value.
    pub fn raw(&self, label: &str) -> Option<RawCode> {
        self.0
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(code, _)| *code)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + use<> {
        let entries = self.0;
        entries.iter().map(|(_, label)| *label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Static metadata describing how a capability is presented and interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapabilityDescriptor {
    /// Overrides the capability information of the appliance.
    /// If not set, the appliance reported information is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_info: Option<CapabilityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_mapping: Option<ValueMapping>,
    pub enabled_by_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<&'static str>,
    /// Attribute path of a sibling capability providing the state of this (command) entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_mapping: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub state_invert: bool,
}

impl CapabilityDescriptor {
    pub const fn new(capability_info: CapabilityInfo) -> Self {
        Self {
            capability_info: Some(capability_info),
            ..Self::presentation_only()
        }
    }

    /// Descriptor without capability information, only providing presentation metadata.
    pub const fn presentation_only() -> Self {
        Self {
            capability_info: None,
            device_class: None,
            unit: None,
            entity_category: None,
            icon: None,
            value_mapping: None,
            enabled_by_default: true,
            friendly_name: None,
            state_mapping: None,
            state_invert: false,
        }
    }

    pub const fn with_device_class(self, device_class: DeviceClass) -> Self {
        Self {
            device_class: Some(device_class),
            ..self
        }
    }

    pub const fn with_unit(self, unit: Unit) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }

    pub const fn with_category(self, entity_category: EntityCategory) -> Self {
        Self {
            entity_category: Some(entity_category),
            ..self
        }
    }

    pub const fn with_icon(self, icon: &'static str) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }

    pub const fn with_value_mapping(self, mapping: &'static [(RawCode, &'static str)]) -> Self {
        Self {
            value_mapping: Some(ValueMapping(mapping)),
            ..self
        }
    }

    pub const fn with_friendly_name(self, name: &'static str) -> Self {
        Self {
            friendly_name: Some(name),
            ..self
        }
    }

    pub const fn with_state_mapping(self, path: &'static str) -> Self {
        Self {
            state_mapping: Some(path),
            ..self
        }
    }

    pub const fn disabled_by_default(self) -> Self {
        Self {
            enabled_by_default: false,
            ..self
        }
    }

    pub const fn inverted(self) -> Self {
        Self {
            state_invert: true,
            ..self
        }
    }

    pub fn access(&self) -> Option<Access> {
        self.capability_info.map(|i| i.access)
    }

    /// Platform implied by the device class, if one is set.
    pub fn platform(&self) -> Option<Platform> {
        self.device_class.map(|c| c.platform())
    }

    /// Check the descriptor invariants.
    ///
    /// Returns a description of the first violation.
    pub fn check(&self) -> Result<(), String> {
        if let Some(info) = &self.capability_info {
            if info.access == Access::Constant && info.default_value().is_none() {
                return Err("constant capability without default value".into());
            }
            if let Some(range) = &info.range {
                if let (Some(min), Some(max)) = (range.min, range.max)
                    && min > max
                {
                    return Err(format!("min {min} is greater than max {max}"));
                }
                if let Some(step) = range.step
                    && step <= 0.0
                {
                    return Err(format!("invalid step {step}"));
                }
            }
            if let Some(values) = info.values {
                for (i, value) in values.iter().enumerate() {
                    if values[..i].iter().any(|v| v.name == value.name) {
                        return Err(format!("duplicate enumerated value {}", value.name));
                    }
                }
            }
        }

        if let Some(mapping) = &self.value_mapping {
            for (i, (code, label)) in mapping.0.iter().enumerate() {
                let previous = &mapping.0[..i];
                if previous.iter().any(|(c, _)| c.matches(code)) {
                    return Err(format!("duplicate value mapping code {code:?}"));
                }
                if previous.iter().any(|(_, l)| l == label) {
                    return Err(format!("duplicate value mapping label {label}"));
                }
                if let Some(info) = &self.capability_info
                    && info.values.is_some()
                    && !info.has_value(label)
                {
                    return Err(format!(
                        "value mapping label {label} is not an enumerated value"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const MAPPING: ValueMapping = ValueMapping(&[
        (RawCode::Int(0), "OFF"),
        (RawCode::Int(2), "FREEZER"),
        (RawCode::Float(-0.5), "-2.0"),
    ]);

    #[rstest]
    #[case(json!(0), Some("OFF"))]
    #[case(json!(2), Some("FREEZER"))]
    #[case(json!(2.0), Some("FREEZER"))]
    #[case(json!(-0.5), Some("-2.0"))]
    #[case(json!(1), None)]
    #[case(json!("0"), None)]
    #[case(json!(null), None)]
    fn value_mapping_label(#[case] raw: Value, #[case] expected: Option<&str>) {
        assert_eq!(expected, MAPPING.label(&raw));
    }

    #[test]
    fn value_mapping_raw_is_inverse_of_label() {
        for label in MAPPING.labels() {
            let raw = MAPPING.raw(label).expect("label must map back to a raw code");
            assert_eq!(Some(label), MAPPING.label(&raw.into()));
        }
        assert_eq!(None, MAPPING.raw("UNKNOWN"));
    }

    #[rstest]
    #[case(Access::Read, true, false)]
    #[case(Access::Write, false, true)]
    #[case(Access::ReadWrite, true, true)]
    #[case(Access::Constant, false, false)]
    fn access_modes(#[case] access: Access, #[case] readable: bool, #[case] writable: bool) {
        assert_eq!(readable, access.is_readable());
        assert_eq!(writable, access.is_writable());
    }

    #[rstest]
    #[case("read", Access::Read)]
    #[case("write", Access::Write)]
    #[case("readwrite", Access::ReadWrite)]
    #[case("constant", Access::Constant)]
    fn access_from_str(#[case] value: &str, #[case] expected: Access) {
        assert_eq!(Ok(expected), value.parse::<Access>());
        assert_eq!(value, expected.to_string());
    }

    #[rstest]
    #[case(DeviceClass::Sensor(SensorDeviceClass::Duration), "duration", Platform::Sensor)]
    #[case(DeviceClass::Sensor(SensorDeviceClass::Enum), "enum", Platform::Sensor)]
    #[case(DeviceClass::BinarySensor(BinarySensorDeviceClass::Door), "door", Platform::BinarySensor)]
    #[case(DeviceClass::Number(NumberDeviceClass::Temperature), "temperature", Platform::Number)]
    #[case(DeviceClass::Switch(SwitchDeviceClass::Switch), "switch", Platform::Switch)]
    #[case(DeviceClass::Button(ButtonDeviceClass::Restart), "restart", Platform::Button)]
    fn device_class_translation(
        #[case] class: DeviceClass,
        #[case] name: &str,
        #[case] platform: Platform,
    ) {
        assert_eq!(name, class.to_string());
        assert_eq!(platform, class.platform());
        assert_eq!(json!(name), serde_json::to_value(class).unwrap());
    }

    #[test]
    fn unit_symbols() {
        assert_eq!("°C", Unit::Celsius.to_string());
        assert_eq!("%", Unit::Percentage.as_ref());
        assert_eq!(json!("s"), serde_json::to_value(Unit::Seconds).unwrap());
    }

    #[test]
    fn constant_without_default_is_rejected() {
        let descriptor = CapabilityDescriptor::new(CapabilityInfo::new(
            Access::Constant,
            ValueType::Number,
        ));
        assert!(descriptor.check().is_err());
        assert!(
            CapabilityDescriptor::new(CapabilityInfo::constant(354.0))
                .check()
                .is_ok()
        );
    }

    #[test]
    fn mapping_label_must_be_enumerated_value() {
        let descriptor = CapabilityDescriptor::new(
            CapabilityInfo::read(ValueType::Number).with_values(&[EnumValue {
                name: "OFF",
                disabled: false,
            }]),
        )
        .with_value_mapping(&[(RawCode::Int(0), "OFF"), (RawCode::Int(1), "ON")]);
        assert!(descriptor.check().is_err());
    }

    #[rstest]
    #[case(&[(RawCode::Int(0), "OFF"), (RawCode::Float(0.0), "ON")])]
    #[case(&[(RawCode::Int(0), "OFF"), (RawCode::Int(1), "OFF")])]
    fn mapping_must_be_injective(#[case] mapping: &'static [(RawCode, &'static str)]) {
        let descriptor = CapabilityDescriptor::new(CapabilityInfo::read(ValueType::Number))
            .with_value_mapping(mapping);
        assert!(descriptor.check().is_err());
    }

    #[test]
    fn selectable_values_skip_disabled() {
        let info = CapabilityInfo::read_write(ValueType::String).with_values(&[
            EnumValue {
                name: "400_RPM",
                disabled: false,
            },
            EnumValue {
                name: "DISABLED",
                disabled: true,
            },
        ]);
        assert_eq!(vec!["400_RPM"], info.selectable_values().collect::<Vec<_>>());
        assert!(info.has_value("DISABLED"));
    }

    #[test]
    fn bounds_keep_default() {
        let info = CapabilityInfo::read_write(ValueType::Number)
            .with_default(1200.0)
            .with_bounds(1200.0, 2700.0, 60.0);
        assert_eq!(Some(1200.0), info.default_value());
        assert_eq!(Some(2700.0), info.range.and_then(|r| r.max));
    }
}
