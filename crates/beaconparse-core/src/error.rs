use thiserror::Error;

/// Errors returned while decoding advertisement and scan-response payloads.
///
/// Most kinds abort the whole scan. Two do not: the advertisement dispatcher
/// downgrades `InvalidPreamble` to "not an iBeacon, keep scanning", and short
/// Kontakt secure-profile bodies are not reported as errors at all (the
/// decoder leaves the result empty instead).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("advertising structure truncated: need {needed} bytes, got {actual}")]
    TruncatedStructure { needed: usize, actual: usize },
    #[error("manufacturer data does not carry the iBeacon preamble")]
    InvalidPreamble,
    #[error("unknown Kontakt payload identifier: {value:#04x}")]
    InvalidKontaktPayloadIdentifier { value: u8 },
    #[error("Eddystone frame type {frame_type:#04x} is not implemented")]
    NotImplemented { frame_type: u8 },
    #[error("invalid URL byte: {value:#04x}")]
    InvalidUrl { value: u8 },
    #[error("telemetry field PID or length mismatch")]
    InvalidTelemetryPid,
    #[error("invalid proximity UUID: {0}")]
    InvalidProximityUuid(#[from] uuid::Error),
}
