#![forbid(unsafe_code)]
//! Encoding primitives for the keywire EC key codec: ASN.1 DER, OID, PEM.

#[cfg(feature = "asn1")]
pub mod asn1;

#[cfg(feature = "oid")]
pub mod oid;

#[cfg(feature = "pem")]
pub mod pem;
