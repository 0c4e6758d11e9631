//! ASN.1 DER decoder.

use keywire_types::{CodecError, FormatError, StructuralError};

use super::{tags, Tag, TagClass, Tlv};

/// A streaming ASN.1 DER decoder over a borrowed buffer.
///
/// Sub-decoders produced for nested structures (SEQUENCE contents, explicit
/// wrappers) report offsets relative to the element they decode.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset into the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Parse the next TLV element.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, CodecError> {
        let start = self.pos;
        let (tag, tag_len) = Tag::from_bytes(&self.data[self.pos..], self.pos)?;
        self.pos += tag_len;

        let length = self.read_length()?;
        let remaining = self.data.len() - self.pos;
        if length > remaining {
            return Err(FormatError::Truncated {
                offset: start,
                declared: length,
                remaining,
            }
            .into());
        }

        let value = &self.data[self.pos..self.pos + length];
        self.pos += length;

        Ok(Tlv {
            tag,
            value,
            offset: start,
        })
    }

    /// Parse a definite DER length. Indefinite (0x80) and over-long
    /// length-of-length framings are rejected.
    fn read_length(&mut self) -> Result<usize, FormatError> {
        let offset = self.pos;
        if self.pos >= self.data.len() {
            return Err(FormatError::UnexpectedEnd { offset });
        }

        let first = self.data[self.pos];
        self.pos += 1;

        if first < 0x80 {
            Ok(first as usize)
        } else if first == 0x80 {
            // Indefinite length is BER-only
            Err(FormatError::IndefiniteLength { offset })
        } else {
            let num_bytes = (first & 0x7F) as usize;
            if num_bytes > 4 || self.pos + num_bytes > self.data.len() {
                return Err(FormatError::MalformedLength { offset });
            }
            let mut length: usize = 0;
            for i in 0..num_bytes {
                length = (length << 8) | self.data[self.pos + i] as usize;
            }
            self.pos += num_bytes;
            Ok(length)
        }
    }

    /// Read the next TLV and require its leading tag byte.
    fn expect_tag(&mut self, expected: u8) -> Result<Tlv<'a>, CodecError> {
        let tlv = self.read_tlv()?;
        let found = tlv.tag.leading_byte();
        if found != expected {
            return Err(StructuralError::UnexpectedTag {
                expected,
                found,
                offset: tlv.offset,
            }
            .into());
        }
        Ok(tlv)
    }

    /// Read an INTEGER and return its content bytes exactly as encoded,
    /// including any leading-zero padding.
    pub fn read_integer(&mut self) -> Result<&'a [u8], CodecError> {
        Ok(self.expect_tag(tags::INTEGER)?.value)
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> Result<&'a [u8], CodecError> {
        Ok(self.expect_tag(tags::OCTET_STRING)?.value)
    }

    /// Read a BIT STRING and return (unused_bits, data).
    pub fn read_bit_string(&mut self) -> Result<(u8, &'a [u8]), CodecError> {
        let tlv = self.expect_tag(tags::BIT_STRING)?;
        if tlv.value.is_empty() {
            return Err(StructuralError::EmptyBitString { offset: tlv.offset }.into());
        }
        Ok((tlv.value[0], &tlv.value[1..]))
    }

    /// Read an OBJECT IDENTIFIER and return its raw value bytes.
    pub fn read_oid(&mut self) -> Result<&'a [u8], CodecError> {
        Ok(self.expect_tag(tags::OID)?.value)
    }

    /// Read a SEQUENCE, returning a sub-decoder over its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder<'a>, CodecError> {
        Ok(Decoder::new(self.expect_tag(tags::SEQUENCE)?.value))
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Result<Tag, CodecError> {
        let (tag, _) = Tag::from_bytes(&self.data[self.pos..], self.pos)?;
        Ok(tag)
    }

    /// Read an explicit context-specific wrapper `[n]`, returning a
    /// sub-decoder over the single TLV it contains.
    pub fn read_explicit(&mut self, tag_num: u8) -> Result<Decoder<'a>, CodecError> {
        let expected = tags::CONTEXT_SPECIFIC | tags::CONSTRUCTED | (tag_num & 0x1F);
        Ok(Decoder::new(self.expect_tag(expected)?.value))
    }

    /// Try to read an explicit wrapper `[n]`. Returns `None` without
    /// consuming anything when the next tag differs or the input is done,
    /// which is how OPTIONAL fields are skipped.
    pub fn try_read_explicit(&mut self, tag_num: u8) -> Result<Option<Decoder<'a>>, CodecError> {
        if self.is_empty() {
            return Ok(None);
        }
        let tag = self.peek_tag()?;
        if tag.class == TagClass::ContextSpecific && tag.constructed && tag.number == tag_num as u32
        {
            Ok(Some(self.read_explicit(tag_num)?))
        } else {
            Ok(None)
        }
    }
}
