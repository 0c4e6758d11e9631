//! ASN.1 DER encoding and decoding.
//!
//! Only the productions used by EC key structures are supported: INTEGER,
//! OCTET STRING, OBJECT IDENTIFIER, BIT STRING, SEQUENCE, and explicit
//! context-specific tagging. Lengths are definite-form only; indefinite
//! (BER) framing is rejected.

mod decoder;
mod encoder;
mod tag;

pub use decoder::Decoder;
pub use encoder::Encoder;

/// ASN.1 tag constants.
pub mod tags {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const OID: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const CONSTRUCTED: u8 = 0x20;
}

/// Represents a parsed ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u32,
}

/// ASN.1 tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// A borrowed ASN.1 TLV element, with the offset of its tag byte in the
/// buffer it was read from.
#[derive(Debug, Clone)]
pub struct Tlv<'a> {
    pub tag: Tag,
    pub value: &'a [u8],
    pub offset: usize,
}

/// A decoded BIT STRING: unused-bit count plus content bytes.
///
/// EC point encodings are byte-aligned, so every BIT STRING this codec
/// produces carries an unused-bit count of 0; the count read from input is
/// preserved for re-encode fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    pub unused_bits: u8,
    pub data: Vec<u8>,
}
