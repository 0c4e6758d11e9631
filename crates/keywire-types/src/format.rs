//! Closed variants for the wire formats and container conventions.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, FormatError};

/// Wire representation of key material at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// Bare scalar or uncompressed point bytes, hex-encoded.
    Raw,
    /// ASN.1 DER, hex-encoded.
    Der,
    /// Base64-wrapped DER with BEGIN/END label lines.
    Pem,
}

/// Private-key container convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateKeyContainer {
    /// Bare SEC1 `ECPrivateKey` (PKCS#1-style).
    Pkcs1,
    /// Algorithm-wrapped PKCS#8 `PrivateKeyInfo`.
    Pkcs8,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Raw => "raw",
            KeyFormat::Der => "der",
            KeyFormat::Pem => "pem",
        }
    }
}

impl FromStr for KeyFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(KeyFormat::Raw),
            "der" => Ok(KeyFormat::Der),
            "pem" => Ok(KeyFormat::Pem),
            _ => Err(FormatError::UnknownKeyFormat(s.to_string()).into()),
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrivateKeyContainer {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivateKeyContainer::Pkcs1 => "pkcs1",
            PrivateKeyContainer::Pkcs8 => "pkcs8",
        }
    }
}

impl FromStr for PrivateKeyContainer {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pkcs1" => Ok(PrivateKeyContainer::Pkcs1),
            "pkcs8" => Ok(PrivateKeyContainer::Pkcs8),
            _ => Err(FormatError::UnknownContainer(s.to_string()).into()),
        }
    }
}

impl fmt::Display for PrivateKeyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format_from_str() {
        assert_eq!("raw".parse::<KeyFormat>().unwrap(), KeyFormat::Raw);
        assert_eq!("der".parse::<KeyFormat>().unwrap(), KeyFormat::Der);
        assert_eq!("pem".parse::<KeyFormat>().unwrap(), KeyFormat::Pem);
        assert!("PEM".parse::<KeyFormat>().is_err());
        assert!("jwk".parse::<KeyFormat>().is_err());
    }

    #[test]
    fn test_container_from_str() {
        assert_eq!(
            "pkcs8".parse::<PrivateKeyContainer>().unwrap(),
            PrivateKeyContainer::Pkcs8
        );
        assert!("pkcs12".parse::<PrivateKeyContainer>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for fmt in [KeyFormat::Raw, KeyFormat::Der, KeyFormat::Pem] {
            assert_eq!(fmt.to_string().parse::<KeyFormat>().unwrap(), fmt);
        }
    }
}
