// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Compiled-in capability table.
//!
//! Entries are sorted by attribute path. Lookups go through [`Catalog`](super::Catalog), this
//! table is only read once to build it.

use super::model::{
    BinarySensorDeviceClass, ButtonDeviceClass, CapabilityDescriptor as Descriptor,
    CapabilityInfo as Info, DeviceClass, EntityCategory, EnumValue, NumberDeviceClass, RawCode,
    SensorDeviceClass, SwitchDeviceClass, Unit, ValueType,
};

macro_rules! values {
    ($($name:literal),* $(,)?) => {
        &[$(EnumValue { name: $name, disabled: false }),*]
    };
}

const DURATION: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Duration);
const ENERGY: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Energy);
const ENUM: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Enum);
const HUMIDITY: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Humidity);
const TEMPERATURE: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Temperature);
const WATER: DeviceClass = DeviceClass::Sensor(SensorDeviceClass::Water);
const DOOR: DeviceClass = DeviceClass::BinarySensor(BinarySensorDeviceClass::Door);
const LOCK: DeviceClass = DeviceClass::BinarySensor(BinarySensorDeviceClass::Lock);
const RUNNING: DeviceClass = DeviceClass::BinarySensor(BinarySensorDeviceClass::Running);
const NUMBER_TEMPERATURE: DeviceClass = DeviceClass::Number(NumberDeviceClass::Temperature);
const SWITCH: DeviceClass = DeviceClass::Switch(SwitchDeviceClass::Switch);
const RESTART: DeviceClass = DeviceClass::Button(ButtonDeviceClass::Restart);

const CONFIG: EntityCategory = EntityCategory::Config;
const DIAGNOSTIC: EntityCategory = EntityCategory::Diagnostic;

const CAVITY_SENSOR_ALERTS: &[EnumValue] = values![
    "AIR_SENSOR_BROKEN",
    "AIR_SENSOR_OPEN_CIRCUIT",
    "AIR_SENSOR_SHORT_CIRCUIT",
    "DEFROST_SENSOR_BROKEN",
    "DEFROST_SENSOR_OPEN_CIRCUIT",
    "DEFROST_SENSOR_SHORT_CIRCUIT",
    "DOOR_ALARM",
    "TEMPERATURE_ALARM",
];
const OFF_RUNNING: &[EnumValue] = values!["OFF", "RUNNING"];
const CLOSED_OPEN: &[EnumValue] = values!["CLOSED", "OPEN"];
const OFF_ON: &[EnumValue] = values!["OFF", "ON"];
const FILTER_STATES: &[EnumValue] = values!["BUY", "CHANGE", "CLEAN", "GOOD"];

const CAVITY_TARGET_TEMPERATURE: Info = Info::read_write(ValueType::Temperature)
    .with_default(-18.0)
    .with_bounds(-23.0, -13.0, 1.0);

pub(crate) static CATALOG_ENTRIES: &[(&str, Descriptor)] = &[
    (
        "airFilterLifeTime",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:air-filter"),
    ),
    (
        "airFilterLifeTimeBuyThreshold",
        Descriptor::new(Info::constant(12873600.0))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:air-filter")
            .disabled_by_default(),
    ),
    (
        "airFilterLifeTimeChangeThreshold",
        Descriptor::new(Info::constant(15724800.0))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:air-filter")
            .disabled_by_default(),
    ),
    (
        "airFilterState",
        Descriptor::new(Info::read(ValueType::String).with_values(FILTER_STATES))
            .with_icon("mdi:air-filter"),
    ),
    (
        "airFilterStateReset",
        Descriptor::new(Info::write(ValueType::String).with_values(values!["RESET"]))
            .with_category(CONFIG)
            .with_icon("mdi:air-filter"),
    ),
    (
        "alerts",
        Descriptor::new(Info::read(ValueType::Alert))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:alert"),
    ),
    (
        "applianceMode",
        Descriptor::new(
            Info::read(ValueType::String).with_values(values!["DEMO", "NORMAL", "SERVICE"]),
        )
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:auto-mode")
        .disabled_by_default(),
    ),
    (
        "applianceState",
        Descriptor::new(Info::read(ValueType::String)).with_icon("mdi:state-machine"),
    ),
    (
        "applianceTotalWorkingTime",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:clock-time-eight-outline"),
    ),
    (
        "connectivityState",
        Descriptor::new(Info::read(ValueType::String))
            .with_device_class(ENUM)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:wifi"),
    ),
    ("cyclePhase", Descriptor::new(Info::read(ValueType::String))),
    ("cycleSubPhase", Descriptor::new(Info::read(ValueType::String))),
    (
        "defaultExtraRinse",
        Descriptor::new(Info::read_write(ValueType::String).with_values(values![
            "EXTRA_RINSE_1",
            "EXTRA_RINSE_2",
            "EXTRA_RINSE_OFF",
        ])),
    ),
    (
        "defrostRoutineState",
        Descriptor::new(Info::read(ValueType::String))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:snowflake-thermometer")
            .disabled_by_default(),
    ),
    (
        "defrostTemperature",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_icon("mdi:thermometer"),
    ),
    (
        "displayFoodProbeTemperature",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_icon("mdi:thermometer"),
    ),
    (
        "displayTemperature",
        Descriptor::new(Info::read(ValueType::String))
            .with_device_class(TEMPERATURE)
            .with_icon("mdi:thermometer"),
    ),
    (
        "doorLock",
        Descriptor::new(Info::read(ValueType::String))
            .with_device_class(LOCK)
            .with_icon("mdi:door-closed-lock"),
    ),
    (
        "doorState",
        Descriptor::new(Info::read(ValueType::String))
            .with_device_class(DOOR)
            .with_icon("mdi:door"),
    ),
    (
        "endOfCycleSound",
        Descriptor::new(
            Info::read_write(ValueType::String).with_values(values!["NO_SOUND", "SHORT_SOUND"]),
        )
        .with_icon("mdi:cellphone-sound"),
    ),
    (
        "executeCommand",
        Descriptor::new(Info::write(ValueType::String).with_values(values![
            "OFF",
            "ON",
            "PAUSE",
            "RESUME",
            "START",
            "STOPRESET",
        ]))
        .with_icon("mdi:house"),
    ),
    (
        "extraCavity/alerts",
        Descriptor::new(Info::read(ValueType::Alert).with_values(values![
            "AIR_SENSOR_BROKEN",
            "AIR_SENSOR_OPEN_CIRCUIT",
            "AIR_SENSOR_SHORT_CIRCUIT",
            "DOOR_ALARM",
            "TEMPERATURE_ALARM",
        ]))
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:alert"),
    ),
    (
        "extraCavity/applianceState",
        Descriptor::new(Info::read(ValueType::String).with_values(OFF_RUNNING))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "extraCavity/cloneTargetTemperatureMode",
        Descriptor::new(Info::read_write(ValueType::Number).with_values(values!["FREEZER", "OFF"]))
            .with_icon("mdi:fridge-variant")
            .with_value_mapping(&[(RawCode::Int(0), "OFF"), (RawCode::Int(2), "FREEZER")]),
    ),
    (
        "extraCavity/doorState",
        Descriptor::new(Info::read(ValueType::String).with_values(CLOSED_OPEN))
            .with_device_class(DOOR)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "extraCavity/fanState",
        Descriptor::new(Info::read(ValueType::Number).with_values(OFF_ON))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant")
            .inverted()
            .disabled_by_default(),
    ),
    (
        // select entity, the device class is intentionally not set
        "extraCavity/targetTemperatureC",
        Descriptor::new(
            Info::read_write(ValueType::Temperature)
                .with_values(values!["-2.0", "0.0", "3.0", "7.0"]),
        )
        .with_unit(Unit::Celsius)
        .with_icon("mdi:thermometer")
        .with_value_mapping(&[
            (RawCode::Float(-0.5), "-2.0"),
            (RawCode::Float(0.5), "0.0"),
            (RawCode::Float(3.5), "3.0"),
        ]),
    ),
    (
        "extraCavity/temperatureAdjustingState",
        Descriptor::new(Info::read(ValueType::Number).with_values(values!["DOWN", "NONE", "UP"]))
            .with_device_class(ENUM)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant")
            .with_value_mapping(&[
                (RawCode::Int(1), "DOWN"),
                (RawCode::Int(0), "NONE"),
                (RawCode::Int(2), "UP"),
            ])
            .disabled_by_default(),
    ),
    (
        "freezer/alerts",
        Descriptor::new(Info::read(ValueType::Alert).with_values(CAVITY_SENSOR_ALERTS))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:alert"),
    ),
    (
        "freezer/applianceState",
        Descriptor::new(Info::read(ValueType::String).with_values(OFF_RUNNING))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "freezer/doorState",
        Descriptor::new(Info::read(ValueType::String).with_values(CLOSED_OPEN))
            .with_device_class(DOOR)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "freezer/fastMode",
        Descriptor::new(Info::read_write(ValueType::String).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "freezer/fastModeTimeToEnd",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "freezer/targetTemperatureC",
        Descriptor::new(CAVITY_TARGET_TEMPERATURE)
            .with_device_class(NUMBER_TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_icon("mdi:thermometer"),
    ),
    (
        "fridge/alerts",
        Descriptor::new(Info::read(ValueType::Alert).with_values(CAVITY_SENSOR_ALERTS))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:alert"),
    ),
    (
        "fridge/applianceState",
        Descriptor::new(Info::read(ValueType::String).with_values(OFF_RUNNING))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "fridge/doorState",
        Descriptor::new(Info::read(ValueType::String).with_values(CLOSED_OPEN))
            .with_device_class(DOOR)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "fridge/fastMode",
        Descriptor::new(Info::read_write(ValueType::String).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "fridge/fastModeTimeToEnd",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:fridge-variant"),
    ),
    (
        "fridge/targetTemperatureC",
        Descriptor::new(CAVITY_TARGET_TEMPERATURE)
            .with_device_class(NUMBER_TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_icon("mdi:thermometer"),
    ),
    (
        "iceMaker/alerts",
        Descriptor::new(Info::read(ValueType::Alert).with_values(values![
            "AIR_SENSOR_BROKEN",
            "AIR_SENSOR_OPEN_CIRCUIT",
            "AIR_SENSOR_SHORT_CIRCUIT",
            "DEFROST_SENSOR_BROKEN",
            "DEFROST_SENSOR_OPEN_CIRCUIT",
            "DEFROST_SENSOR_SHORT_CIRCUIT",
        ]))
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:alert"),
    ),
    (
        // state source of iceMaker/executeCommand
        "iceMaker/applianceState",
        Descriptor::new(Info::read(ValueType::String).with_values(OFF_RUNNING))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:snowflake")
            .disabled_by_default(),
    ),
    (
        "iceMaker/defrostTemperatureC",
        Descriptor::new(Info::read(ValueType::Temperature))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:snowflake"),
    ),
    (
        "iceMaker/defrostTemperatureF",
        Descriptor::new(Info::read(ValueType::Temperature))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Fahrenheit)
            .with_icon("mdi:snowflake"),
    ),
    (
        "iceMaker/evaporatorFanState",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(RUNNING)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:snowflake")
            .disabled_by_default(),
    ),
    (
        "iceMaker/executeCommand",
        Descriptor::new(Info::write(ValueType::String).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:snowflake")
            .with_friendly_name("Ice Maker")
            .with_state_mapping("iceMaker/applianceState"),
    ),
    (
        "iceMaker/iceDispenserState",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(ENUM)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:snowflake")
            .with_value_mapping(&[
                (RawCode::Int(0), "Water"),
                (RawCode::Int(1), "Cubes"),
                (RawCode::Int(2), "Dispensing Cubes"),
                (RawCode::Int(4), "Crushed"),
                (RawCode::Int(5), "Dispensing Crushed"),
            ]),
    ),
    (
        "iceMaker/iceTrayWaterFillSetting",
        Descriptor::new(Info::read(ValueType::Number).with_values(values![
            "LOW_PRESSURE",
            "NORMAL_PRESSURE",
            "VERY_HIGH_PRESSURE",
            "VERY_LOW_PRESSURE",
        ]))
        .with_device_class(ENUM)
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:snowflake")
        .with_value_mapping(&[
            (RawCode::Int(0), "LOW_PRESSURE"),
            (RawCode::Int(1), "NORMAL_PRESSURE"),
            (RawCode::Int(2), "VERY_HIGH_PRESSURE"),
            (RawCode::Int(3), "VERY_LOW_PRESSURE"),
        ]),
    ),
    (
        "networkInterface/linkQualityIndicator",
        Descriptor::new(Info::read(ValueType::String).with_values(values![
            "EXCELLENT",
            "GOOD",
            "POOR",
            "UNDEFINED",
            "VERY_GOOD",
            "VERY_POOR",
        ]))
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:wifi")
        .disabled_by_default(),
    ),
    (
        "ovenProcessIdentifier",
        Descriptor::new(Info::read(ValueType::String))
            .with_icon("mdi:application-settings-outline"),
    ),
    (
        "preWashPhase",
        Descriptor::new(Info::read(ValueType::Boolean)).with_icon("mdi:washing-machine"),
    ),
    (
        // presented as a read-only duration sensor although the appliance accepts writes
        "reminderTime",
        Descriptor::new(
            Info::read_write(ValueType::Number)
                .with_default(1200.0)
                .with_bounds(1200.0, 2700.0, 60.0),
        )
        .with_device_class(DURATION)
        .with_unit(Unit::Seconds)
        .with_category(DIAGNOSTIC)
        .with_icon("mdi:timelapse")
        .disabled_by_default(),
    ),
    (
        "remoteControl",
        Descriptor::new(Info::read(ValueType::String)).with_icon("mdi:remote"),
    ),
    (
        "runningTime",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:timelapse"),
    ),
    (
        "sensorHumidity",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(HUMIDITY)
            .with_unit(Unit::Percentage)
            .with_icon("mdi:water-opacity")
            .with_friendly_name("Humidity"),
    ),
    (
        "sensorTemperature",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:thermometer"),
    ),
    (
        "startTime",
        Descriptor::new(Info::read_write(ValueType::Number).with_bounds(0.0, 72000.0, 1800.0))
            .with_unit(Unit::Seconds)
            .with_icon("mdi:clock-start"),
    ),
    (
        "targetMicrowavePower",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(ENERGY)
            .with_unit(Unit::Watt)
            .with_icon("mdi:microwave"),
    ),
    (
        "targetTemperatureC",
        Descriptor::new(Info::read_write(ValueType::Number).with_bounds(0.0, 300.0, 5.0))
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Celsius)
            .with_icon("mdi:thermometer"),
    ),
    (
        "targetTemperatureF",
        Descriptor::presentation_only()
            .with_device_class(TEMPERATURE)
            .with_unit(Unit::Fahrenheit)
            .with_icon("mdi:thermometer"),
    ),
    (
        "timeToEnd",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:av-timer"),
    ),
    (
        "totalCycleCounter",
        Descriptor::new(Info::read(ValueType::Number))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:counter"),
    ),
    (
        "totalWashingTime",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:washing-machine"),
    ),
    (
        "ui2LockMode",
        Descriptor::new(Info::read_write(ValueType::Boolean).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:lock"),
    ),
    (
        "uiLockMode",
        Descriptor::new(Info::read_write(ValueType::Boolean).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:lock"),
    ),
    (
        "userSelections/analogSpinSpeed",
        Descriptor::new(Info::read_write(ValueType::String).with_values(&[
            EnumValue { name: "0_RPM", disabled: false },
            EnumValue { name: "1000_RPM", disabled: false },
            EnumValue { name: "1200_RPM", disabled: false },
            EnumValue { name: "1400_RPM", disabled: false },
            EnumValue { name: "1600_RPM", disabled: false },
            EnumValue { name: "400_RPM", disabled: false },
            EnumValue { name: "600_RPM", disabled: false },
            EnumValue { name: "800_RPM", disabled: false },
            EnumValue { name: "DISABLED", disabled: true },
        ]))
        .with_icon("mdi:speedometer"),
    ),
    (
        "userSelections/analogTemperature",
        Descriptor::new(Info::read_write(ValueType::String).with_values(values![
            "20_CELSIUS",
            "30_CELSIUS",
            "40_CELSIUS",
            "50_CELSIUS",
            "60_CELSIUS",
            "90_CELSIUS",
            "95_CELSIUS",
            "COLD",
        ]))
        .with_icon("mdi:thermometer"),
    ),
    (
        "userSelections/programUID",
        Descriptor::new(Info::read(ValueType::String))
            .with_icon("mdi:application-settings-outline"),
    ),
    (
        "userSelections/steamValue",
        Descriptor::new(Info::read(ValueType::String).with_values(values![
            "STEAM_MAX",
            "STEAM_MED",
            "STEAM_MIN",
            "STEAM_OFF",
        ]))
        .with_icon("mdi:pot-steam"),
    ),
    (
        "vacationHolidayMode",
        Descriptor::new(Info::read_write(ValueType::Boolean).with_values(OFF_ON))
            .with_device_class(SWITCH)
            .with_icon("mdi:home"),
    ),
    (
        "waterFilterFlow",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(WATER)
            .with_unit(Unit::Liters)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:cup-water"),
    ),
    (
        "waterFilterFlowBuyThreshold",
        Descriptor::new(Info::constant(354.0))
            .with_device_class(WATER)
            .with_unit(Unit::Liters)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:cup-water")
            .disabled_by_default(),
    ),
    (
        "waterFilterFlowChangeThreshold",
        Descriptor::new(Info::constant(473.0))
            .with_device_class(WATER)
            .with_unit(Unit::Liters)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:cup-water")
            .disabled_by_default(),
    ),
    (
        "waterFilterLifeTime",
        Descriptor::new(Info::read(ValueType::Number))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:water")
            .disabled_by_default(),
    ),
    (
        "waterFilterLifeTimeBuyThreshold",
        Descriptor::new(Info::constant(12960000.0))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:water")
            .disabled_by_default(),
    ),
    (
        "waterFilterLifeTimeChangeThreshold",
        Descriptor::new(Info::constant(15811200.0))
            .with_device_class(DURATION)
            .with_unit(Unit::Seconds)
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:water")
            .disabled_by_default(),
    ),
    (
        "waterFilterState",
        Descriptor::new(Info::read(ValueType::Number).with_values(FILTER_STATES))
            .with_icon("mdi:water"),
    ),
    (
        "waterFilterStateReset",
        Descriptor::new(Info::write(ValueType::String).with_values(values!["RESET"]))
            .with_device_class(RESTART)
            .with_category(CONFIG)
            .with_icon("mdi:water"),
    ),
    (
        "waterHardness",
        Descriptor::new(Info::read(ValueType::String))
            .with_category(DIAGNOSTIC)
            .with_icon("mdi:water"),
    ),
    (
        "waterSoftenerMode",
        Descriptor::new(Info::read(ValueType::String)).with_icon("mdi:water"),
    ),
];
