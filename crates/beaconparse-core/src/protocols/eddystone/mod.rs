//! Eddystone service-data decoding (service UUID 0xFEAA).
//!
//! The parser dispatches on the frame-type byte: UID and URL frames are
//! decoded into packets, the TLM and EID frame types are recognized but
//! their bodies are not decoded, and any other frame type is skipped. URL
//! frames go through the substitution codec in `url`.

pub mod layout;
pub mod parser;
pub mod reader;
pub mod url;

pub use parser::{
    EddystoneEidPacket, EddystoneEncryptedTlmPacket, EddystoneFrame, EddystonePlainTlmPacket,
    EddystoneUidPacket, EddystoneUrlPacket, parse_eddystone,
};
