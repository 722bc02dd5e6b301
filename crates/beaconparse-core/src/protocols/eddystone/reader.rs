use crate::error::ParseError;

pub struct EddystoneReader<'a> {
    payload: &'a [u8],
}

impl<'a> EddystoneReader<'a> {
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

    pub fn require_exact_len(&self, needed: usize) -> Result<(), ParseError> {
        if self.payload.len() != needed {
            return Err(ParseError::TruncatedStructure {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, ParseError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(ParseError::TruncatedStructure {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, ParseError> {
        self.read_u8(offset).map(|byte| byte as i8)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], ParseError> {
        self.payload
            .get(range.clone())
            .ok_or(ParseError::TruncatedStructure {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    pub fn read_tail(&self, offset: usize) -> Result<&'a [u8], ParseError> {
        self.payload
            .get(offset..)
            .ok_or(ParseError::TruncatedStructure {
                needed: offset,
                actual: self.payload.len(),
            })
    }
}
