//! ASN.1 tag parsing and encoding.

use keywire_types::FormatError;

use super::{Tag, TagClass};

impl Tag {
    /// Parse a tag from the first bytes of `input`. `offset` is the
    /// position of `input[0]` in the buffer being decoded, used only for
    /// error context. Returns the tag and the number of bytes consumed.
    pub fn from_bytes(input: &[u8], offset: usize) -> Result<(Self, usize), FormatError> {
        if input.is_empty() {
            return Err(FormatError::UnexpectedEnd { offset });
        }

        let first = input[0];
        let class = match (first >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            3 => TagClass::Private,
            _ => unreachable!(),
        };
        let constructed = (first & 0x20) != 0;

        let low_bits = first & 0x1F;
        if low_bits < 0x1F {
            // Short form tag number
            Ok((
                Tag {
                    class,
                    constructed,
                    number: low_bits as u32,
                },
                1,
            ))
        } else {
            // Long form tag number
            let mut number: u32 = 0;
            let mut i = 1;
            loop {
                if i >= input.len() {
                    return Err(FormatError::UnexpectedEnd { offset: offset + i });
                }
                let byte = input[i];
                if number > u32::MAX >> 7 {
                    return Err(FormatError::MalformedTag { offset });
                }
                number = (number << 7) | (byte & 0x7F) as u32;
                i += 1;
                if (byte & 0x80) == 0 {
                    break;
                }
            }
            Ok((
                Tag {
                    class,
                    constructed,
                    number,
                },
                i,
            ))
        }
    }

    /// The first identifier octet of this tag. Sufficient to identify any
    /// tag a key structure uses (all have numbers below 0x1F).
    pub fn leading_byte(&self) -> u8 {
        let class_bits = match self.class {
            TagClass::Universal => 0x00,
            TagClass::Application => 0x40,
            TagClass::ContextSpecific => 0x80,
            TagClass::Private => 0xC0,
        };
        let constructed_bit = if self.constructed { 0x20 } else { 0x00 };
        let number_bits = if self.number < 0x1F {
            self.number as u8
        } else {
            0x1F
        };
        class_bits | constructed_bit | number_bits
    }
}
