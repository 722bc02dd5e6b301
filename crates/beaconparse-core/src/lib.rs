//! Decoding of BLE advertisement and scan-response payloads into typed
//! beacon records.
//!
//! One buffer per call: the section scanner splits the advertising data
//! into `(type, payload)` AD structures, and [`BeaconParser`] routes each
//! section to the protocol decoders (layout/reader/parser per protocol).
//! Decoding is byte-oriented and side-effect free; there is no radio or
//! file I/O anywhere in the crate.
//!
//! Invariants:
//! - A parser holds at most one decoded record; the last recognizable
//!   section in a buffer wins.
//! - [`BeaconParser::detected_type`] is `Unknown` exactly when no record
//!   was decoded.
//! - The scan loop is bounded by the buffer length and rejects zero-length
//!   AD structures, so it always terminates.
//!
//! # Examples
//! ```
//! use beaconparse_core::{DetectedType, ParsedPacket, decode_advertisement};
//!
//! let buffer = [
//!     0x02, 0x01, 0x06, // flags
//!     0x1A, 0xFF, 0x4C, 0x00, 0x02, 0x15, // manufacturer data, iBeacon preamble
//!     0xF7, 0x82, 0x6D, 0xA6, 0x4F, 0xA2, 0x4E, 0x98, // proximity UUID
//!     0x80, 0x24, 0xBC, 0x5B, 0x71, 0xE0, 0x89, 0x3E,
//!     0x01, 0x02, // major
//!     0x03, 0x04, // minor
//!     0xB3, // calibrated RSSI
//! ];
//! let packet = decode_advertisement(&buffer)?.expect("recognized beacon");
//! assert_eq!(packet.detected_type(), DetectedType::IBeacon);
//! let ParsedPacket::IBeacon(adv) = &packet else { unreachable!() };
//! assert_eq!(adv.major, 513);
//! # Ok::<(), beaconparse_core::ParseError>(())
//! ```

use serde::{Deserialize, Serialize};

mod error;
mod parser;
mod protocols;
mod sections;

pub use error::ParseError;
pub use parser::BeaconParser;
pub use protocols::eddystone::{
    EddystoneEidPacket, EddystoneEncryptedTlmPacket, EddystonePlainTlmPacket, EddystoneUidPacket,
    EddystoneUrlPacket,
};
pub use protocols::ibeacon::IBeaconAdvertisement;
pub use protocols::kontakt::telemetry;
pub use protocols::kontakt::{
    KontaktIoScanResponse, KontaktLocationAdvertisement, KontaktPlainAdvertisement,
    KontaktScanResponseIdentifier, KontaktShuffledAdvertisement, KontaktTelemetryAdvertisement,
    KontaktTelemetryValue, TelemetryPid,
};
pub use sections::{Section, SectionScanner};

/// Beacon protocol detected in a buffer, `Unknown` when none was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectedType {
    Unknown,
    IBeacon,
    EddystoneUid,
    EddystoneUrl,
    EddystoneTlm,
    EddystoneEid,
    EddystoneEtlm,
    KontaktScanResponse,
    KontaktPlain,
    KontaktShuffled,
    KontaktTelemetry,
    KontaktLocation,
}

/// One decoded record, tagged by the protocol that produced it.
///
/// The Eddystone telemetry and EID variants are part of the data model but
/// never produced by the current decoders, which report those frame bodies
/// as [`ParseError::NotImplemented`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedPacket {
    IBeacon(IBeaconAdvertisement),
    EddystoneUid(EddystoneUidPacket),
    EddystoneUrl(EddystoneUrlPacket),
    EddystonePlainTlm(EddystonePlainTlmPacket),
    EddystoneEncryptedTlm(EddystoneEncryptedTlmPacket),
    EddystoneEid(EddystoneEidPacket),
    KontaktScanResponse(KontaktIoScanResponse),
    KontaktPlain(KontaktPlainAdvertisement),
    KontaktShuffled(KontaktShuffledAdvertisement),
    KontaktTelemetry(KontaktTelemetryAdvertisement),
    KontaktLocation(KontaktLocationAdvertisement),
}

impl ParsedPacket {
    pub fn detected_type(&self) -> DetectedType {
        match self {
            ParsedPacket::IBeacon(_) => DetectedType::IBeacon,
            ParsedPacket::EddystoneUid(_) => DetectedType::EddystoneUid,
            ParsedPacket::EddystoneUrl(_) => DetectedType::EddystoneUrl,
            ParsedPacket::EddystonePlainTlm(_) => DetectedType::EddystoneTlm,
            ParsedPacket::EddystoneEncryptedTlm(_) => DetectedType::EddystoneEtlm,
            ParsedPacket::EddystoneEid(_) => DetectedType::EddystoneEid,
            ParsedPacket::KontaktScanResponse(_) => DetectedType::KontaktScanResponse,
            ParsedPacket::KontaktPlain(_) => DetectedType::KontaktPlain,
            ParsedPacket::KontaktShuffled(_) => DetectedType::KontaktShuffled,
            ParsedPacket::KontaktTelemetry(_) => DetectedType::KontaktTelemetry,
            ParsedPacket::KontaktLocation(_) => DetectedType::KontaktLocation,
        }
    }
}

/// Decode one advertising payload with a fresh parser.
pub fn decode_advertisement(buffer: &[u8]) -> Result<Option<ParsedPacket>, ParseError> {
    let mut parser = BeaconParser::new(buffer);
    parser.parse_advertisement()?;
    Ok(parser.into_parsed())
}

/// Decode one scan-response payload with a fresh parser.
pub fn decode_scan_response(buffer: &[u8]) -> Result<Option<ParsedPacket>, ParseError> {
    let mut parser = BeaconParser::new(buffer);
    parser.parse_scan_response()?;
    Ok(parser.into_parsed())
}
