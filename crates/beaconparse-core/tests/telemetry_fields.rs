use beaconparse_core::telemetry::{
    AccelerationField, AccelerometerField, BatteryLevelField, ClickInfoField, DoubleTapField,
    HumidityField, LightLevelField, MovementField, MovementInfoField, SensorsField,
    SystemHealthField, Temperature16BitField, Temperature8BitField, TimeSinceClickField,
    UtcTimeField,
};
use beaconparse_core::{KontaktTelemetryValue, ParseError, TelemetryPid};

fn field(pid: TelemetryPid, hex: &str) -> KontaktTelemetryValue {
    let value = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect();
    KontaktTelemetryValue {
        pid: pid as u16,
        value,
    }
}

#[test]
fn system_health_field() {
    let parsed = SystemHealthField::parse(&field(TelemetryPid::SystemHealth, "002F685964")).unwrap();
    assert_eq!(parsed.unix_timestamp, 1_500_000_000);
    assert_eq!(parsed.battery_level, 100);
}

#[test]
fn accelerometer_field() {
    let parsed =
        AccelerometerField::parse(&field(TelemetryPid::Accelerometer, "201020306400C800"))
            .unwrap();
    assert_eq!(parsed.sensitivity, 32);
    assert_eq!(parsed.x, 16);
    assert_eq!(parsed.y, 32);
    assert_eq!(parsed.z, 48);
    assert_eq!(parsed.seconds_since_double_tap, 100);
    assert_eq!(parsed.seconds_since_threshold, 200);
}

#[test]
fn sensors_field() {
    let parsed = SensorsField::parse(&field(TelemetryPid::Sensors, "6410")).unwrap();
    assert_eq!(parsed.light_level, 100);
    assert_eq!(parsed.temperature, 16);
}

#[test]
fn acceleration_field() {
    let parsed = AccelerationField::parse(&field(TelemetryPid::Acceleration, "20102030")).unwrap();
    assert_eq!(parsed.sensitivity, 32);
    assert_eq!(parsed.x, 16);
    assert_eq!(parsed.y, 32);
    assert_eq!(parsed.z, 48);
}

#[test]
fn movement_field() {
    let parsed = MovementField::parse(&field(TelemetryPid::Movement, "6401")).unwrap();
    assert_eq!(parsed.seconds_since_threshold, 356);
}

#[test]
fn double_tap_field() {
    let parsed = DoubleTapField::parse(&field(TelemetryPid::DoubleTap, "6401")).unwrap();
    assert_eq!(parsed.seconds_since_double_tap, 356);
}

#[test]
fn light_level_field() {
    let parsed = LightLevelField::parse(&field(TelemetryPid::LightLevel, "14")).unwrap();
    assert_eq!(parsed.light_level, 20);
}

#[test]
fn temperature_8bit_field() {
    let parsed =
        Temperature8BitField::parse(&field(TelemetryPid::Temperature8Bit, "FE")).unwrap();
    assert_eq!(parsed.temperature, -2);
}

#[test]
fn temperature_16bit_field() {
    let parsed =
        Temperature16BitField::parse(&field(TelemetryPid::Temperature16Bit, "FD80")).unwrap();
    assert_eq!(parsed.temperature, -2.5);
}

#[test]
fn battery_level_field() {
    let parsed = BatteryLevelField::parse(&field(TelemetryPid::BatteryLevel, "40")).unwrap();
    assert_eq!(parsed.battery_level, 64);
}

#[test]
fn time_since_click_field() {
    let parsed = TimeSinceClickField::parse(&field(TelemetryPid::TimeSinceClick, "6401")).unwrap();
    assert_eq!(parsed.seconds_since_click, 356);
}

#[test]
fn click_info_field() {
    let parsed = ClickInfoField::parse(&field(TelemetryPid::ClickInfo, "406401")).unwrap();
    assert_eq!(parsed.click_id, 64);
    assert_eq!(parsed.seconds_since_click, 356);
}

#[test]
fn utc_time_field() {
    let parsed = UtcTimeField::parse(&field(TelemetryPid::UtcTime, "002F6859")).unwrap();
    assert_eq!(parsed.utc_time, 1_500_000_000);
}

#[test]
fn humidity_field() {
    let parsed = HumidityField::parse(&field(TelemetryPid::Humidity, "24")).unwrap();
    assert_eq!(parsed.humidity, 36);
}

#[test]
fn movement_info_field() {
    let parsed = MovementInfoField::parse(&field(TelemetryPid::MovementInfo, "246401")).unwrap();
    assert_eq!(parsed.counter, 36);
    assert_eq!(parsed.seconds_since_threshold, 356);
}

#[test]
fn wrong_pid_is_rejected() {
    let err = LightLevelField::parse(&field(TelemetryPid::Humidity, "14")).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTelemetryPid));
}

#[test]
fn wrong_length_is_rejected_as_pid_mismatch() {
    // Length and PID failures share one error kind.
    let err = ClickInfoField::parse(&field(TelemetryPid::ClickInfo, "4064")).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTelemetryPid));
}
