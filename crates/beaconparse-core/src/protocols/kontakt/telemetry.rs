//! Per-PID telemetry field decoders.
//!
//! The telemetry advertisement decoder only splits the nested list into raw
//! `(pid, value)` pairs. Each decoder here turns one pair into a typed
//! field, validating both the PID and the exact value length through a
//! shared assertion; either mismatch reports the same
//! [`ParseError::InvalidTelemetryPid`]. Multi-byte fields are little-endian
//! except the 16-bit precise temperature, which is a big-endian signed 8.8
//! fixed-point value.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Field identifiers carried in the nested telemetry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u16)]
pub enum TelemetryPid {
    SystemHealth = 0x01,
    Accelerometer = 0x02,
    Sensors = 0x05,
    Acceleration = 0x06,
    Movement = 0x07,
    DoubleTap = 0x08,
    LightLevel = 0x0A,
    Temperature8Bit = 0x0B,
    BatteryLevel = 0x0C,
    TimeSinceClick = 0x0D,
    UtcTime = 0x0F,
    ClickInfo = 0x11,
    Humidity = 0x12,
    Temperature16Bit = 0x13,
    MovementInfo = 0x16,
}

/// One raw entry from the nested telemetry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktTelemetryValue {
    pub pid: u16,
    pub value: Vec<u8>,
}

fn expect_field(
    value: &KontaktTelemetryValue,
    pid: TelemetryPid,
    len: usize,
) -> Result<(), ParseError> {
    if value.pid != pid as u16 || value.value.len() != len {
        return Err(ParseError::InvalidTelemetryPid);
    }
    Ok(())
}

// Offsets below are safe: expect_field pins the exact value length.
fn u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemHealthField {
    pub unix_timestamp: u32,
    pub battery_level: u8,
}

impl SystemHealthField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::SystemHealth, 5)?;
        Ok(Self {
            unix_timestamp: u32_le(&value.value, 0),
            battery_level: value.value[4],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerometerField {
    pub sensitivity: u8,
    pub x: i8,
    pub y: i8,
    pub z: i8,
    pub seconds_since_double_tap: u16,
    pub seconds_since_threshold: u16,
}

impl AccelerometerField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Accelerometer, 8)?;
        Ok(Self {
            sensitivity: value.value[0],
            x: value.value[1] as i8,
            y: value.value[2] as i8,
            z: value.value[3] as i8,
            seconds_since_double_tap: u16_le(&value.value, 4),
            seconds_since_threshold: u16_le(&value.value, 6),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorsField {
    pub light_level: u8,
    pub temperature: i8,
}

impl SensorsField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Sensors, 2)?;
        Ok(Self {
            light_level: value.value[0],
            temperature: value.value[1] as i8,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerationField {
    pub sensitivity: u8,
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl AccelerationField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Acceleration, 4)?;
        Ok(Self {
            sensitivity: value.value[0],
            x: value.value[1] as i8,
            y: value.value[2] as i8,
            z: value.value[3] as i8,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementField {
    pub seconds_since_threshold: u16,
}

impl MovementField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Movement, 2)?;
        Ok(Self {
            seconds_since_threshold: u16_le(&value.value, 0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleTapField {
    pub seconds_since_double_tap: u16,
}

impl DoubleTapField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::DoubleTap, 2)?;
        Ok(Self {
            seconds_since_double_tap: u16_le(&value.value, 0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightLevelField {
    pub light_level: u8,
}

impl LightLevelField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::LightLevel, 1)?;
        Ok(Self {
            light_level: value.value[0],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature8BitField {
    pub temperature: i8,
}

impl Temperature8BitField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Temperature8Bit, 1)?;
        Ok(Self {
            temperature: value.value[0] as i8,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryLevelField {
    pub battery_level: u8,
}

impl BatteryLevelField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::BatteryLevel, 1)?;
        Ok(Self {
            battery_level: value.value[0],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSinceClickField {
    pub seconds_since_click: u16,
}

impl TimeSinceClickField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::TimeSinceClick, 2)?;
        Ok(Self {
            seconds_since_click: u16_le(&value.value, 0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimeField {
    pub utc_time: u32,
}

impl UtcTimeField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::UtcTime, 4)?;
        Ok(Self {
            utc_time: u32_le(&value.value, 0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickInfoField {
    pub click_id: u8,
    pub seconds_since_click: u16,
}

impl ClickInfoField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::ClickInfo, 3)?;
        Ok(Self {
            click_id: value.value[0],
            seconds_since_click: u16_le(&value.value, 1),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumidityField {
    pub humidity: u8,
}

impl HumidityField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Humidity, 1)?;
        Ok(Self {
            humidity: value.value[0],
        })
    }
}

/// Precise temperature in °C, from a big-endian signed 8.8 raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature16BitField {
    pub temperature: f32,
}

impl Temperature16BitField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::Temperature16Bit, 2)?;
        let raw = i16::from_be_bytes([value.value[0], value.value[1]]);
        Ok(Self {
            temperature: f32::from(raw) / 256.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInfoField {
    pub counter: u8,
    pub seconds_since_threshold: u16,
}

impl MovementInfoField {
    pub fn parse(value: &KontaktTelemetryValue) -> Result<Self, ParseError> {
        expect_field(value, TelemetryPid::MovementInfo, 3)?;
        Ok(Self {
            counter: value.value[0],
            seconds_since_threshold: u16_le(&value.value, 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{KontaktTelemetryValue, SystemHealthField, TelemetryPid};
    use crate::error::ParseError;

    fn field(pid: u16, value: &[u8]) -> KontaktTelemetryValue {
        KontaktTelemetryValue {
            pid,
            value: value.to_vec(),
        }
    }

    #[test]
    fn pid_mismatch_is_rejected() {
        let value = field(TelemetryPid::Humidity as u16, &[0x00]);
        let err = SystemHealthField::parse(&value).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTelemetryPid));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let value = field(TelemetryPid::SystemHealth as u16, &[0x00, 0x2F, 0x68, 0x59]);
        let err = SystemHealthField::parse(&value).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTelemetryPid));
    }

    #[test]
    fn matching_field_is_decoded() {
        let value = field(
            TelemetryPid::SystemHealth as u16,
            &[0x00, 0x2F, 0x68, 0x59, 0x64],
        );
        let parsed = SystemHealthField::parse(&value).unwrap();
        assert_eq!(parsed.unix_timestamp, 1_500_000_000);
        assert_eq!(parsed.battery_level, 100);
    }
}
