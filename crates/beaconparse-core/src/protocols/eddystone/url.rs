use crate::error::ParseError;

/// URL scheme prefixes indexed by the scheme byte at the head of the frame.
pub const SCHEME_PREFIXES: [&str; 4] = ["http://www.", "https://www.", "http://", "https://"];

/// Multi-character expansions for the encoded bytes 0x00..=0x0D.
pub const BYTE_EXPANSIONS: [&str; 14] = [
    ".com/", ".org/", ".edu/", ".net/", ".info/", ".biz/", ".gov/", ".com", ".org", ".edu",
    ".net", ".info", ".biz", ".gov",
];

/// Expand an encoded Eddystone URL into its text form.
///
/// Bytes in the printable range 0x20..=0x7F pass through unchanged; bytes
/// 0x00..=0x0D substitute a TLD/path expansion; everything else is invalid.
pub fn decode_url(scheme: u8, encoded: &[u8]) -> Result<String, ParseError> {
    let prefix = SCHEME_PREFIXES
        .get(usize::from(scheme))
        .ok_or(ParseError::InvalidUrl { value: scheme })?;

    let mut url = String::from(*prefix);
    for &byte in encoded {
        match byte {
            0x00..=0x0D => url.push_str(BYTE_EXPANSIONS[usize::from(byte)]),
            0x20..=0x7F => url.push(char::from(byte)),
            _ => return Err(ParseError::InvalidUrl { value: byte }),
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::decode_url;
    use crate::error::ParseError;

    #[test]
    fn decode_with_expansion() {
        let url = decode_url(0x03, b"test\x0c").unwrap();
        assert_eq!(url, "https://test.biz");
    }

    #[test]
    fn decode_prefix_only() {
        assert_eq!(decode_url(0x00, b"").unwrap(), "http://www.");
    }

    #[test]
    fn decode_slash_expansion() {
        let url = decode_url(0x02, b"example\x00index").unwrap();
        assert_eq!(url, "http://example.com/index");
    }

    #[test]
    fn unknown_scheme_is_invalid() {
        let err = decode_url(0x04, b"test").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl { value: 0x04 }));
    }

    #[test]
    fn unmapped_byte_is_invalid() {
        let err = decode_url(0x00, &[0x74, 0x0E]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl { value: 0x0E }));
    }

    #[test]
    fn high_byte_is_invalid() {
        let err = decode_url(0x00, &[0x80]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrl { value: 0x80 }));
    }
}
