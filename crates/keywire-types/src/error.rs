/// Framing and envelope errors: the input could not be read at all.
///
/// Covers broken DER tag/length framing, a damaged PEM envelope, and
/// non-hex input where hex was expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid hex input")]
    InvalidHex,
    #[error("unexpected end of DER input at offset {offset}")]
    UnexpectedEnd { offset: usize },
    #[error("truncated DER at offset {offset}: declared length {declared} exceeds {remaining} remaining bytes")]
    Truncated {
        offset: usize,
        declared: usize,
        remaining: usize,
    },
    #[error("indefinite DER length at offset {offset}")]
    IndefiniteLength { offset: usize },
    #[error("malformed DER length at offset {offset}")]
    MalformedLength { offset: usize },
    #[error("malformed DER tag at offset {offset}")]
    MalformedTag { offset: usize },
    #[error("missing PEM BEGIN/END delimiters")]
    PemMissingDelimiters,
    #[error("PEM label mismatch: expected {expected:?}, found {found:?}")]
    PemLabelMismatch { expected: String, found: String },
    #[error("invalid base64 in PEM body")]
    PemInvalidBase64,
    #[error("unknown key format {0:?}, expected one of: raw, der, pem")]
    UnknownKeyFormat(String),
    #[error("unknown key container {0:?}, expected one of: pkcs1, pkcs8")]
    UnknownContainer(String),
}

/// Schema mismatch errors: the input is well-framed DER, but its shape
/// does not match the expected key structure.
///
/// Kept distinct from [`FormatError`] so callers can tell "not DER" apart
/// from "DER, but not this kind of key".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("expected tag {expected:#04x}, found {found:#04x} at offset {offset}")]
    UnexpectedTag {
        expected: u8,
        found: u8,
        offset: usize,
    },
    #[error("empty BIT STRING at offset {offset}")]
    EmptyBitString { offset: usize },
    #[error("trailing data at offset {offset} after a complete structure")]
    TrailingData { offset: usize },
    #[error("empty OBJECT IDENTIFIER")]
    EmptyOid,
    #[error("truncated OBJECT IDENTIFIER arc")]
    TruncatedOidArc,
    #[error("OBJECT IDENTIFIER arc overflow")]
    OidArcOverflow,
}

/// Top-level error for key encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The curve name given at construction is not in the registry.
    #[error("unknown curve {name:?}, supported curves: {supported}")]
    UnknownCurve { name: String, supported: String },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Structure(#[from] StructuralError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_carries_offsets() {
        let err = FormatError::Truncated {
            offset: 4,
            declared: 32,
            remaining: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("offset 4"));
        assert!(msg.contains("32"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_structural_error_shows_tags_in_hex() {
        let err = StructuralError::UnexpectedTag {
            expected: 0x30,
            found: 0x02,
            offset: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x30"));
        assert!(msg.contains("0x02"));
    }

    #[test]
    fn test_codec_error_classes_are_distinguishable() {
        let framing: CodecError = FormatError::PemMissingDelimiters.into();
        let structural: CodecError = StructuralError::EmptyOid.into();
        assert!(matches!(framing, CodecError::Format(_)));
        assert!(matches!(structural, CodecError::Structure(_)));
    }
}
