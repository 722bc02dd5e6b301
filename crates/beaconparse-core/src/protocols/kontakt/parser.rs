use serde::{Deserialize, Serialize};

use super::layout;
use super::reader::KontaktReader;
use super::telemetry::KontaktTelemetryValue;
use crate::error::ParseError;
use crate::sections::SectionScanner;

/// Decoded Secure Profile plain advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktPlainAdvertisement {
    pub device_model: u8,
    pub firmware_major: u8,
    pub firmware_minor: u8,
    pub battery_level: u8,
    pub tx_power: i8,
    pub unique_id: String,
}

/// Decoded Secure Profile shuffled advertisement. The Eddystone namespace
/// and instance stand in for the unique ID while the beacon is shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktShuffledAdvertisement {
    pub device_model: u8,
    pub firmware_major: u8,
    pub firmware_minor: u8,
    pub battery_level: u8,
    pub tx_power: i8,
    pub eddystone_namespace: [u8; 10],
    pub eddystone_instance_id: [u8; 6],
}

/// Decoded telemetry advertisement: the raw `(pid, value)` list only.
///
/// Translating an entry into a typed field is the caller's follow-up step
/// through the per-PID decoders in [`super::telemetry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktTelemetryAdvertisement {
    pub values: Vec<KontaktTelemetryValue>,
}

/// Decoded location advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktLocationAdvertisement {
    pub tx_power: i8,
    pub ble_channel: u8,
    pub device_model: u8,
    pub flags: u8,
    pub unique_id: String,
}

/// Scan response from an older Kontakt.io beacon. Each field may be absent
/// independently; a response supplies whatever subset it has room for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktIoScanResponse {
    pub name: Option<String>,
    pub tx_power: Option<i8>,
    pub identifier: Option<KontaktScanResponseIdentifier>,
}

impl KontaktIoScanResponse {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.tx_power.is_none() && self.identifier.is_none()
    }
}

/// Identifier block from the legacy scan-response service-data section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KontaktScanResponseIdentifier {
    pub unique_id: String,
    pub firmware: String,
    pub battery_level: u8,
}

/// Frame decoded from one Kontakt.io service-data payload.
#[derive(Debug, Clone, PartialEq)]
pub enum KontaktFrame {
    Plain(KontaktPlainAdvertisement),
    Shuffled(KontaktShuffledAdvertisement),
    Telemetry(KontaktTelemetryAdvertisement),
    Location(KontaktLocationAdvertisement),
}

/// Dispatch a Kontakt.io service-data payload on its payload-type byte.
///
/// A missing payload-type byte is a truncated structure and an unrecognized
/// one is [`ParseError::InvalidKontaktPayloadIdentifier`]; both abort the
/// scan. Plain, shuffled, and location frames whose body is too short
/// return `Ok(None)` instead of an error, leaving the result empty. The
/// scanner-level and Eddystone decoders treat short payloads as fatal; this
/// asymmetry is the observed wire behavior and callers depend on it.
pub fn parse_kontakt(payload: &[u8]) -> Result<Option<KontaktFrame>, ParseError> {
    let reader = KontaktReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    match reader.read_u8(layout::PAYLOAD_TYPE_OFFSET)? {
        layout::PAYLOAD_TYPE_SHUFFLED => {
            Ok(parse_shuffled(payload)?.map(KontaktFrame::Shuffled))
        }
        layout::PAYLOAD_TYPE_PLAIN => Ok(parse_plain(payload)?.map(KontaktFrame::Plain)),
        layout::PAYLOAD_TYPE_TELEMETRY => {
            parse_telemetry(payload).map(|adv| Some(KontaktFrame::Telemetry(adv)))
        }
        layout::PAYLOAD_TYPE_LOCATION => Ok(parse_location(payload)?.map(KontaktFrame::Location)),
        value => Err(ParseError::InvalidKontaktPayloadIdentifier { value }),
    }
}

fn parse_plain(payload: &[u8]) -> Result<Option<KontaktPlainAdvertisement>, ParseError> {
    if payload.len() < layout::PLAIN_MIN_LEN {
        return Ok(None);
    }
    let reader = KontaktReader::new(payload);

    Ok(Some(KontaktPlainAdvertisement {
        device_model: reader.read_u8(layout::DEVICE_MODEL_OFFSET)?,
        firmware_major: reader.read_u8(layout::FIRMWARE_MAJOR_OFFSET)?,
        firmware_minor: reader.read_u8(layout::FIRMWARE_MINOR_OFFSET)?,
        battery_level: reader.read_u8(layout::BATTERY_LEVEL_OFFSET)?,
        tx_power: reader.read_i8(layout::TX_POWER_OFFSET)?,
        unique_id: reader.read_string_tail(layout::PLAIN_UNIQUE_ID_OFFSET)?,
    }))
}

fn parse_shuffled(payload: &[u8]) -> Result<Option<KontaktShuffledAdvertisement>, ParseError> {
    if payload.len() != layout::SHUFFLED_FRAME_LEN {
        return Ok(None);
    }
    let reader = KontaktReader::new(payload);

    let mut eddystone_namespace = [0u8; 10];
    eddystone_namespace
        .copy_from_slice(reader.read_slice(layout::SHUFFLED_NAMESPACE_RANGE.clone())?);
    let mut eddystone_instance_id = [0u8; 6];
    eddystone_instance_id
        .copy_from_slice(reader.read_slice(layout::SHUFFLED_INSTANCE_RANGE.clone())?);

    Ok(Some(KontaktShuffledAdvertisement {
        device_model: reader.read_u8(layout::DEVICE_MODEL_OFFSET)?,
        firmware_major: reader.read_u8(layout::FIRMWARE_MAJOR_OFFSET)?,
        firmware_minor: reader.read_u8(layout::FIRMWARE_MINOR_OFFSET)?,
        battery_level: reader.read_u8(layout::BATTERY_LEVEL_OFFSET)?,
        tx_power: reader.read_i8(layout::TX_POWER_OFFSET)?,
        eddystone_namespace,
        eddystone_instance_id,
    }))
}

fn parse_location(payload: &[u8]) -> Result<Option<KontaktLocationAdvertisement>, ParseError> {
    if payload.len() < layout::LOCATION_MIN_LEN {
        return Ok(None);
    }
    let reader = KontaktReader::new(payload);

    Ok(Some(KontaktLocationAdvertisement {
        tx_power: reader.read_i8(layout::LOCATION_TX_POWER_OFFSET)?,
        ble_channel: reader.read_u8(layout::LOCATION_BLE_CHANNEL_OFFSET)?,
        device_model: reader.read_u8(layout::LOCATION_DEVICE_MODEL_OFFSET)?,
        flags: reader.read_u8(layout::LOCATION_FLAGS_OFFSET)?,
        unique_id: reader.read_string_tail(layout::LOCATION_UNIQUE_ID_OFFSET)?,
    }))
}

// The nested field list reuses the AD-structure framing, so the section
// scanner walks it: field PID in the type position, value as the payload.
// An empty list is a valid telemetry advertisement.
fn parse_telemetry(payload: &[u8]) -> Result<KontaktTelemetryAdvertisement, ParseError> {
    let reader = KontaktReader::new(payload);
    let mut fields = SectionScanner::new(reader.read_tail(layout::TELEMETRY_FIELDS_OFFSET)?);

    let mut values = Vec::new();
    while let Some(field) = fields.next_section()? {
        values.push(KontaktTelemetryValue {
            pid: u16::from(field.ad_type),
            value: field.payload.to_vec(),
        });
    }
    Ok(KontaktTelemetryAdvertisement { values })
}

/// Decode the legacy identifier block from a scan-response service-data
/// section. Returns `None` unless the payload is exactly the expected nine
/// bytes and starts with the legacy service UUID; a scan response may carry
/// arbitrary other service data, so a mismatch is not an error.
pub fn parse_scan_response_identifier(payload: &[u8]) -> Option<KontaktScanResponseIdentifier> {
    if payload.len() != layout::SCAN_RESPONSE_LEN {
        return None;
    }
    let reader = KontaktReader::new(payload);
    let uuid = reader.read_u16_le(layout::SCAN_RESPONSE_UUID_RANGE).ok()?;
    if uuid != layout::SCAN_RESPONSE_UUID {
        return None;
    }

    let unique_id = reader
        .read_string(layout::SCAN_RESPONSE_UNIQUE_ID_RANGE)
        .ok()?;
    let major = reader
        .read_u8(layout::SCAN_RESPONSE_FIRMWARE_MAJOR_OFFSET)
        .ok()?;
    let minor = reader
        .read_u8(layout::SCAN_RESPONSE_FIRMWARE_MINOR_OFFSET)
        .ok()?;
    let battery_level = reader.read_u8(layout::SCAN_RESPONSE_BATTERY_OFFSET).ok()?;

    Some(KontaktScanResponseIdentifier {
        unique_id,
        firmware: format!("{major}.{minor}"),
        battery_level,
    })
}
