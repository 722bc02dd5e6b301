use serde::{Deserialize, Serialize};

use super::layout;
use super::reader::EddystoneReader;
use super::url::decode_url;
use crate::error::ParseError;

/// Decoded Eddystone UID frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddystoneUidPacket {
    pub tx_power_0m: i8,
    pub namespace: [u8; 10],
    pub instance_id: [u8; 6],
}

/// Decoded Eddystone URL frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddystoneUrlPacket {
    pub tx_power_0m: i8,
    pub url: String,
}

/// Plain telemetry frame body. The telemetry frame types are recognized by
/// [`parse_eddystone`] but their bodies are not decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EddystonePlainTlmPacket {
    pub battery_voltage: u16,
    pub temperature: f32,
    pub advertisement_count: u32,
    pub time_since_power_on: u32,
}

/// Encrypted telemetry frame body (opaque ciphertext plus salt and MIC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddystoneEncryptedTlmPacket {
    pub telemetry: [u8; 12],
    pub salt: [u8; 2],
    pub mic: [u8; 2],
}

/// Ephemeral-identifier frame body (8-byte canonical EID).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddystoneEidPacket {
    pub tx_power_0m: i8,
    pub eid: Vec<u8>,
}

/// Frame decoded from one Eddystone service-data payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EddystoneFrame {
    Uid(EddystoneUidPacket),
    Url(EddystoneUrlPacket),
}

/// Dispatch an Eddystone service-data payload on its frame-type byte.
///
/// Returns `Ok(None)` for frame types the protocol does not define here;
/// the section is then skipped. TLM and EID frames fail with
/// [`ParseError::NotImplemented`].
pub fn parse_eddystone(payload: &[u8]) -> Result<Option<EddystoneFrame>, ParseError> {
    let reader = EddystoneReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    match reader.read_u8(layout::FRAME_TYPE_OFFSET)? {
        layout::FRAME_TYPE_UID => parse_uid(&reader).map(|packet| Some(EddystoneFrame::Uid(packet))),
        layout::FRAME_TYPE_URL => {
            parse_url_frame(&reader).map(|packet| Some(EddystoneFrame::Url(packet)))
        }
        frame_type @ (layout::FRAME_TYPE_TLM | layout::FRAME_TYPE_EID) => {
            Err(ParseError::NotImplemented { frame_type })
        }
        _ => Ok(None),
    }
}

fn parse_uid(reader: &EddystoneReader<'_>) -> Result<EddystoneUidPacket, ParseError> {
    reader.require_exact_len(layout::UID_FRAME_LEN)?;

    let tx_power_0m = reader.read_i8(layout::TX_POWER_OFFSET)?;
    let mut namespace = [0u8; 10];
    namespace.copy_from_slice(reader.read_slice(layout::UID_NAMESPACE_RANGE.clone())?);
    let mut instance_id = [0u8; 6];
    instance_id.copy_from_slice(reader.read_slice(layout::UID_INSTANCE_RANGE.clone())?);

    Ok(EddystoneUidPacket {
        tx_power_0m,
        namespace,
        instance_id,
    })
}

fn parse_url_frame(reader: &EddystoneReader<'_>) -> Result<EddystoneUrlPacket, ParseError> {
    reader.require_len(layout::URL_MIN_LEN)?;

    let tx_power_0m = reader.read_i8(layout::TX_POWER_OFFSET)?;
    let scheme = reader.read_u8(layout::URL_SCHEME_OFFSET)?;
    let url = decode_url(scheme, reader.read_tail(layout::URL_DATA_OFFSET)?)?;

    Ok(EddystoneUrlPacket { tx_power_0m, url })
}
