#![forbid(unsafe_code)]
//! Conversion of elliptic-curve key material between raw coordinate
//! bytes, ASN.1 DER, and PEM, and between the SEC1 (PKCS#1-style) and
//! PKCS#8 private-key containers.
//!
//! The codec shuttles opaque byte strings; it never performs curve
//! arithmetic or validates that points or scalars belong to the curve.

pub mod curves;
pub mod encoder;
pub mod pkcs8;
pub mod sec1;
pub mod spki;

pub use encoder::KeyEncoder;
pub use keywire_types::{
    CodecError, FormatError, KeyFormat, PrivateKeyContainer, StructuralError,
};
