use crate::error::ParseError;
use crate::protocols::eddystone::{self, EddystoneFrame, parse_eddystone};
use crate::protocols::ibeacon::{self, parse_ibeacon};
use crate::protocols::kontakt::{
    self, KontaktFrame, KontaktIoScanResponse, parse_kontakt, parse_scan_response_identifier,
};
use crate::sections::SectionScanner;
use crate::{DetectedType, ParsedPacket};

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
const AD_TYPE_TX_POWER: u8 = 0x0A;
const AD_TYPE_SERVICE_DATA: u8 = 0x16;
const AD_TYPE_MANUFACTURER_DATA: u8 = 0xFF;

/// Per-call decoding state over one advertising or scan-response buffer.
///
/// Created fresh per buffer and never shared: drive one of the two entry
/// points, then inspect [`detected_type`](Self::detected_type) and
/// [`parsed`](Self::parsed). At most one record is retained; when a buffer
/// carries several recognizable sections the last one wins.
pub struct BeaconParser<'a> {
    scanner: SectionScanner<'a>,
    flags: u8,
    parsed: Option<ParsedPacket>,
}

impl<'a> BeaconParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            scanner: SectionScanner::new(buffer),
            flags: 0,
            parsed: None,
        }
    }

    /// Walk an advertising payload and route each section to its decoder.
    ///
    /// Flags sections accumulate into [`flags`](Self::flags). Manufacturer
    /// data is tried as an iBeacon only when exactly 25 bytes long, and a
    /// preamble mismatch skips the section instead of failing. Service data
    /// dispatches on its 16-bit UUID to the Eddystone or Kontakt decoders.
    /// The first fatal decode error aborts the scan.
    pub fn parse_advertisement(&mut self) -> Result<(), ParseError> {
        while let Some(section) = self.scanner.next_section()? {
            match section.ad_type {
                AD_TYPE_FLAGS => {
                    if let Some(&byte) = section.payload.first() {
                        self.flags = byte;
                    }
                }
                AD_TYPE_MANUFACTURER_DATA => {
                    if section.payload.len() != ibeacon::layout::MANUFACTURER_DATA_LEN {
                        continue;
                    }
                    match parse_ibeacon(section.payload) {
                        Ok(adv) => self.parsed = Some(ParsedPacket::IBeacon(adv)),
                        Err(ParseError::InvalidPreamble) => {}
                        Err(err) => return Err(err),
                    }
                }
                AD_TYPE_SERVICE_DATA => match read_service_uuid(section.payload)? {
                    eddystone::layout::SERVICE_UUID => {
                        match parse_eddystone(section.payload)? {
                            Some(EddystoneFrame::Uid(packet)) => {
                                self.parsed = Some(ParsedPacket::EddystoneUid(packet));
                            }
                            Some(EddystoneFrame::Url(packet)) => {
                                self.parsed = Some(ParsedPacket::EddystoneUrl(packet));
                            }
                            None => {}
                        }
                    }
                    kontakt::layout::SERVICE_UUID => match parse_kontakt(section.payload)? {
                        Some(KontaktFrame::Plain(adv)) => {
                            self.parsed = Some(ParsedPacket::KontaktPlain(adv));
                        }
                        Some(KontaktFrame::Shuffled(adv)) => {
                            self.parsed = Some(ParsedPacket::KontaktShuffled(adv));
                        }
                        Some(KontaktFrame::Telemetry(adv)) => {
                            self.parsed = Some(ParsedPacket::KontaktTelemetry(adv));
                        }
                        Some(KontaktFrame::Location(adv)) => {
                            self.parsed = Some(ParsedPacket::KontaktLocation(adv));
                        }
                        None => {}
                    },
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }

    /// Walk a scan-response payload for the three optional Kontakt fields.
    ///
    /// Recognizes the complete local name, the TX power byte, and the
    /// legacy identifier block; everything else is ignored, including
    /// service data of the wrong shape. Only the scanner's own truncation
    /// detection can fail this entry point. The result is committed only if
    /// at least one field was populated.
    pub fn parse_scan_response(&mut self) -> Result<(), ParseError> {
        let mut response = KontaktIoScanResponse::default();
        while let Some(section) = self.scanner.next_section()? {
            match section.ad_type {
                AD_TYPE_COMPLETE_LOCAL_NAME => {
                    response.name = Some(String::from_utf8_lossy(section.payload).into_owned());
                }
                AD_TYPE_TX_POWER => {
                    if let Some(&byte) = section.payload.first() {
                        response.tx_power = Some(byte as i8);
                    }
                }
                AD_TYPE_SERVICE_DATA => {
                    if let Some(identifier) = parse_scan_response_identifier(section.payload) {
                        response.identifier = Some(identifier);
                    }
                }
                _ => {}
            }
        }
        if !response.is_empty() {
            self.parsed = Some(ParsedPacket::KontaktScanResponse(response));
        }
        Ok(())
    }

    pub fn detected_type(&self) -> DetectedType {
        self.parsed
            .as_ref()
            .map_or(DetectedType::Unknown, ParsedPacket::detected_type)
    }

    pub fn parsed(&self) -> Option<&ParsedPacket> {
        self.parsed.as_ref()
    }

    pub fn into_parsed(self) -> Option<ParsedPacket> {
        self.parsed
    }

    /// Flags byte from the AD-flags section, 0 when none was seen.
    pub fn flags(&self) -> u8 {
        self.flags
    }
}

fn read_service_uuid(payload: &[u8]) -> Result<u16, ParseError> {
    match payload {
        [lo, hi, ..] => Ok(u16::from_le_bytes([*lo, *hi])),
        _ => Err(ParseError::TruncatedStructure {
            needed: 2,
            actual: payload.len(),
        }),
    }
}
