use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::layout;
use super::reader::IBeaconReader;
use crate::error::ParseError;

/// Decoded iBeacon advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IBeaconAdvertisement {
    pub calibrated_rssi: i8,
    pub proximity_uuid: Uuid,
    pub major: u16,
    pub minor: u16,
}

/// Decode a 25-byte manufacturer-data payload as an iBeacon frame.
///
/// A preamble mismatch reports [`ParseError::InvalidPreamble`]; the
/// advertisement dispatcher treats that as "not an iBeacon" and keeps
/// scanning. Every other failure aborts the scan.
pub fn parse_ibeacon(payload: &[u8]) -> Result<IBeaconAdvertisement, ParseError> {
    let reader = IBeaconReader::new(payload);
    reader.require_len(layout::MANUFACTURER_DATA_LEN)?;

    let preamble = reader.read_preamble()?;
    if preamble != layout::PREAMBLE {
        return Err(ParseError::InvalidPreamble);
    }

    let proximity_uuid =
        Uuid::from_slice(reader.read_slice(layout::PROXIMITY_UUID_RANGE.clone())?)?;
    let major = reader.read_u16_le(layout::MAJOR_RANGE.clone())?;
    let minor = reader.read_u16_le(layout::MINOR_RANGE.clone())?;
    let calibrated_rssi = reader.read_i8(layout::CALIBRATED_RSSI_OFFSET)?;

    Ok(IBeaconAdvertisement {
        calibrated_rssi,
        proximity_uuid,
        major,
        minor,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_ibeacon;
    use crate::error::ParseError;
    use crate::protocols::ibeacon::layout;
    use uuid::Uuid;

    fn valid_payload() -> Vec<u8> {
        let mut payload = vec![0u8; layout::MANUFACTURER_DATA_LEN];
        payload[layout::PREAMBLE_RANGE.clone()].copy_from_slice(layout::PREAMBLE);
        payload[layout::PROXIMITY_UUID_RANGE.clone()].copy_from_slice(
            Uuid::parse_str("F7826DA6-4FA2-4E98-8024-BC5B71E0893E")
                .unwrap()
                .as_bytes(),
        );
        payload[layout::MAJOR_RANGE.clone()].copy_from_slice(&[0x01, 0x02]);
        payload[layout::MINOR_RANGE.clone()].copy_from_slice(&[0x03, 0x04]);
        payload[layout::CALIBRATED_RSSI_OFFSET] = 0xB3;
        payload
    }

    #[test]
    fn parse_valid_ibeacon() {
        let parsed = parse_ibeacon(&valid_payload()).unwrap();
        assert_eq!(
            parsed.proximity_uuid,
            Uuid::parse_str("F7826DA6-4FA2-4E98-8024-BC5B71E0893E").unwrap()
        );
        assert_eq!(parsed.major, 513);
        assert_eq!(parsed.minor, 1027);
        assert_eq!(parsed.calibrated_rssi, -77);
    }

    #[test]
    fn parse_invalid_preamble() {
        let mut payload = valid_payload();
        payload[0] = 0xFF;
        let err = parse_ibeacon(&payload).unwrap_err();
        assert!(matches!(err, ParseError::InvalidPreamble));
    }

    #[test]
    fn parse_short_payload() {
        let payload = vec![0u8; layout::MANUFACTURER_DATA_LEN - 1];
        let err = parse_ibeacon(&payload).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
    }
}
