use super::layout;
use crate::error::ParseError;

pub struct IBeaconReader<'a> {
    payload: &'a [u8],
}

impl<'a> IBeaconReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), ParseError> {
        if self.payload.len() < needed {
            return Err(ParseError::TruncatedStructure {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_preamble(&self) -> Result<&'a [u8], ParseError> {
        self.read_slice(layout::PREAMBLE_RANGE.clone())
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, ParseError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(ParseError::TruncatedStructure {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, ParseError> {
        self.payload
            .get(offset)
            .map(|&byte| byte as i8)
            .ok_or(ParseError::TruncatedStructure {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], ParseError> {
        self.payload
            .get(range.clone())
            .ok_or(ParseError::TruncatedStructure {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}
